use crate::cluster;
use crate::events::{EventRecord, EventType};
use crate::normalize::{EnglishLemmatizer, Lemmatizer};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentionVariant {
    pub text: String,
    pub count: usize,
}

/// One ranked cluster: the representative text, the cluster's total
/// occurrence count, and every distinct phrasing that was merged into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopIntention {
    pub text: String,
    pub count: usize,
    pub variants: Vec<IntentionVariant>,
}

/// Top intention clusters per domain, with the default English lemmatizer.
pub fn aggregate_top_intentions(
    events: &[EventRecord],
    limit: usize,
    from_timestamp: Option<i64>,
) -> BTreeMap<String, Vec<TopIntention>> {
    aggregate_top_intentions_with(events, limit, from_timestamp, &EnglishLemmatizer)
}

/// Filter to `intention_submitted` events at or after `from_timestamp`,
/// deduplicate exact texts by lowercase + whitespace-collapse, then
/// cluster per domain in canonical order and keep the `limit` largest
/// clusters (total descending, representative ascending). Each cluster's
/// variants come out sorted count descending, text ascending.
pub fn aggregate_top_intentions_with(
    events: &[EventRecord],
    limit: usize,
    from_timestamp: Option<i64>,
    lemmatizer: &dyn Lemmatizer,
) -> BTreeMap<String, Vec<TopIntention>> {
    let mut by_domain: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for event in events {
        if event.event_type != EventType::IntentionSubmitted || event.domain.is_empty() {
            continue;
        }
        let Some(raw) = event.intention.as_deref() else {
            continue;
        };
        if let Some(from) = from_timestamp {
            if event.timestamp < from {
                continue;
            }
        }
        let normalized = collapse_whitespace(raw);
        if normalized.is_empty() {
            continue;
        }
        *by_domain
            .entry(event.domain.clone())
            .or_default()
            .entry(normalized)
            .or_insert(0) += 1;
    }

    by_domain
        .into_iter()
        .map(|(domain, counts)| (domain, rank_intentions(&counts, limit, lemmatizer)))
        .collect()
}

/// Exact-dedup key: lowercase + whitespace collapse only. Full
/// tokenization is the clusterer's job.
fn collapse_whitespace(raw: &str) -> String {
    raw.to_lowercase().split_whitespace().join(" ")
}

fn rank_intentions(
    counts: &BTreeMap<String, usize>,
    limit: usize,
    lemmatizer: &dyn Lemmatizer,
) -> Vec<TopIntention> {
    let items = cluster::canonical_order(counts);
    cluster::cluster_intentions(&items, lemmatizer)
        .into_iter()
        .sorted_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.representative.cmp(&b.representative))
        })
        .take(limit)
        .map(|c| {
            let variants = c
                .variants
                .iter()
                .map(|(text, count)| IntentionVariant {
                    text: text.clone(),
                    count: *count,
                })
                .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.text.cmp(&b.text)))
                .collect();
            TopIntention {
                text: c.representative,
                count: c.total,
                variants,
            }
        })
        .collect()
}
