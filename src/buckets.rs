use crate::events::{EventRecord, EventType};
use chrono::{Local, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

const DAY_FORMAT: &str = "%Y-%m-%d";
const HOUR_FORMAT: &str = "%Y-%m-%d %H:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDomainCounts {
    /// "YYYY-MM-DD", local calendar day.
    pub date: String,
    pub overlay_shown: usize,
    pub intention_submitted: usize,
    pub no_intention: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyDomainCounts {
    /// "YYYY-MM-DD HH:00", local calendar hour.
    pub hour: String,
    pub overlay_shown: usize,
    pub intention_submitted: usize,
    pub no_intention: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counts {
    overlay_shown: usize,
    intention_submitted: usize,
    no_intention: usize,
}

/// Per-domain counters bucketed by local calendar day, buckets sorted
/// ascending by date. Uses the process timezone; see
/// [`aggregate_daily_counts_in`] for the timezone-explicit variant.
pub fn aggregate_daily_counts(events: &[EventRecord]) -> BTreeMap<String, Vec<DailyDomainCounts>> {
    aggregate_daily_counts_in(events, &Local)
}

/// Per-domain counters bucketed by local calendar hour, buckets sorted
/// ascending by hour key.
pub fn aggregate_hourly_counts(
    events: &[EventRecord],
) -> BTreeMap<String, Vec<HourlyDomainCounts>> {
    aggregate_hourly_counts_in(events, &Local)
}

pub fn aggregate_daily_counts_in<Tz>(
    events: &[EventRecord],
    tz: &Tz,
) -> BTreeMap<String, Vec<DailyDomainCounts>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fold_buckets(events, tz, DAY_FORMAT)
        .into_iter()
        .map(|(domain, buckets)| {
            let days = buckets
                .into_iter()
                .map(|(date, c)| DailyDomainCounts {
                    date,
                    overlay_shown: c.overlay_shown,
                    intention_submitted: c.intention_submitted,
                    no_intention: c.no_intention,
                })
                .collect();
            (domain, days)
        })
        .collect()
}

pub fn aggregate_hourly_counts_in<Tz>(
    events: &[EventRecord],
    tz: &Tz,
) -> BTreeMap<String, Vec<HourlyDomainCounts>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fold_buckets(events, tz, HOUR_FORMAT)
        .into_iter()
        .map(|(domain, buckets)| {
            let hours = buckets
                .into_iter()
                .map(|(hour, c)| HourlyDomainCounts {
                    hour,
                    overlay_shown: c.overlay_shown,
                    intention_submitted: c.intention_submitted,
                    no_intention: c.no_intention,
                })
                .collect();
            (domain, hours)
        })
        .collect()
}

/// Only `overlay_shown` and `intention_submitted` count here; other event
/// types and empty domains are skipped. Events are folded in canonical
/// order (ascending timestamp, input order for ties) because the
/// `no_intention` clamp is order-sensitive.
///
/// `no_intention` is a running heuristic, not a distinct-session count:
/// +1 per overlay, -1 (floored at zero) per submission within the same
/// bucket. An overlay and its submission landing in different buckets
/// (e.g. across midnight) desynchronize it; known limitation, kept
/// for output compatibility.
fn fold_buckets<Tz>(
    events: &[EventRecord],
    tz: &Tz,
    format: &str,
) -> BTreeMap<String, BTreeMap<String, Counts>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut ordered: Vec<&EventRecord> = events
        .iter()
        .filter(|e| {
            matches!(
                e.event_type,
                EventType::OverlayShown | EventType::IntentionSubmitted
            )
        })
        .filter(|e| !e.domain.is_empty())
        .collect();
    ordered.sort_by_key(|e| e.timestamp);

    let mut map: BTreeMap<String, BTreeMap<String, Counts>> = BTreeMap::new();
    for event in ordered {
        // Unmappable timestamps are skipped, never a panic.
        let Some(moment) = tz.timestamp_millis_opt(event.timestamp).single() else {
            continue;
        };
        let key = moment.format(format).to_string();
        let bucket = map
            .entry(event.domain.clone())
            .or_default()
            .entry(key)
            .or_default();
        match event.event_type {
            EventType::OverlayShown => {
                bucket.overlay_shown += 1;
                bucket.no_intention += 1;
            }
            EventType::IntentionSubmitted => {
                bucket.intention_submitted += 1;
                bucket.no_intention = bucket.no_intention.saturating_sub(1);
            }
            _ => {}
        }
    }
    map
}
