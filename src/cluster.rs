use crate::normalize::{self, Lemmatizer};
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

/// Minimum similarity for a text to join an existing cluster.
pub const MERGE_THRESHOLD: f64 = 0.4;

/// One equivalence class of near-duplicate intention texts, scoped to a
/// single domain. Never split or merged again once formed.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentionCluster {
    pub representative: String,
    pub rep_count: usize,
    pub rep_tokens: BTreeSet<String>,
    pub total: usize,
    pub variants: BTreeMap<String, usize>,
}

/// Token-set similarity: 0 when either set is empty or they share no
/// tokens; 1.0 when one set contains the other (biases toward merging
/// phrase-containment cases like "email" vs "check my email"); otherwise
/// the Jaccard index.
pub fn similarity_score(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    if intersection == 0 {
        return 0.0;
    }
    if intersection == a.len() || intersection == b.len() {
        return 1.0;
    }
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

fn is_better_representative(
    candidate: &str,
    candidate_count: usize,
    current: &str,
    current_count: usize,
) -> bool {
    if candidate.len() != current.len() {
        return candidate.len() > current.len();
    }
    if candidate_count != current_count {
        return candidate_count > current_count;
    }
    candidate < current
}

/// The fixed input ordering the online algorithm is defined against:
/// count descending, then text ascending (byte-wise). Clustering results
/// are only reproducible relative to this ordering, never to incidental
/// iteration order of an unordered container.
pub fn canonical_order(counts: &BTreeMap<String, usize>) -> Vec<(String, usize)> {
    counts
        .iter()
        .map(|(text, count)| (text.clone(), *count))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Greedy single-pass clustering of `(distinct text, count)` pairs.
/// `items` must already be in canonical order. Each item joins the
/// highest-scoring cluster at or above [`MERGE_THRESHOLD`] (first wins
/// ties) or starts a singleton. O(n*k) where k is clusters formed so
/// far; the partition is not globally optimal.
pub fn cluster_intentions(
    items: &[(String, usize)],
    lemmatizer: &dyn Lemmatizer,
) -> Vec<IntentionCluster> {
    let mut clusters: Vec<IntentionCluster> = Vec::new();
    for (text, count) in items {
        let tokens: BTreeSet<String> =
            normalize::tokenize(text, lemmatizer).into_iter().collect();

        let mut best_index = None;
        let mut best_score = 0.0;
        for (index, cluster) in clusters.iter().enumerate() {
            let score = similarity_score(&tokens, &cluster.rep_tokens);
            if score > best_score {
                best_score = score;
                best_index = Some(index);
            }
        }

        match best_index {
            Some(index) if best_score >= MERGE_THRESHOLD => {
                let cluster = &mut clusters[index];
                cluster.total += count;
                *cluster.variants.entry(text.clone()).or_insert(0) += count;
                if is_better_representative(text, *count, &cluster.representative, cluster.rep_count)
                {
                    cluster.representative = text.clone();
                    cluster.rep_count = *count;
                    cluster.rep_tokens = tokens;
                }
            }
            _ => clusters.push(IntentionCluster {
                representative: text.clone(),
                rep_count: *count,
                rep_tokens: tokens,
                total: *count,
                variants: BTreeMap::from([(text.clone(), *count)]),
            }),
        }
    }
    clusters
}
