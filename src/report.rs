use crate::buckets::{self, DailyDomainCounts, HourlyDomainCounts};
use crate::events::EventRecord;
use crate::top::{self, TopIntention};
use serde::Serialize;
use std::collections::BTreeMap;

/// The combined view a presentation layer consumes: all three
/// aggregations over one event snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub daily: BTreeMap<String, Vec<DailyDomainCounts>>,
    pub hourly: BTreeMap<String, Vec<HourlyDomainCounts>>,
    pub top_intentions: BTreeMap<String, Vec<TopIntention>>,
}

/// `from_timestamp` only narrows the top-intentions section; the daily
/// and hourly counters always cover the whole snapshot.
pub fn build_report(
    events: &[EventRecord],
    limit: usize,
    from_timestamp: Option<i64>,
) -> InsightsReport {
    InsightsReport {
        daily: buckets::aggregate_daily_counts(events),
        hourly: buckets::aggregate_hourly_counts(events),
        top_intentions: top::aggregate_top_intentions(events, limit, from_timestamp),
    }
}
