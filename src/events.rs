use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    OverlayShown,
    IntentionSubmitted,
    TimerStarted,
    TimerExpired,
}

/// One usage event, as recorded by the extension shell. Timestamps are
/// epoch milliseconds. Records are produced upstream and consumed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub domain: String,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intention: Option<String>,
    #[serde(default, rename = "tabId", skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

impl EventRecord {
    pub fn new(event_type: EventType, domain: impl Into<String>, timestamp: i64) -> Self {
        Self {
            event_type,
            domain: domain.into(),
            timestamp,
            intention: None,
            tab_id: None,
            minutes: None,
        }
    }

    pub fn with_intention(mut self, intention: impl Into<String>) -> Self {
        self.intention = Some(intention.into());
        self
    }
}
