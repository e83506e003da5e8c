use std::cmp::Ordering;

use serde::Serialize;

use crate::scorer::ScoreMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub document: String,
    pub score: f64,
}

/// Sorts scores from highest to lowest. The sort is stable, so equal scores
/// keep the order of the score map.
pub fn rank_descending(scores: ScoreMap<'_>) -> Vec<Hit> {
    let mut hits: Vec<Hit> = scores
        .into_iter()
        .map(|(document, score)| Hit {
            document: document.to_string(),
            score,
        })
        .collect();
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}

/// The first `k` hits, or all of them when there are fewer.
pub fn top_k(hits: &[Hit], k: usize) -> &[Hit] {
    &hits[..k.min(hits.len())]
}
