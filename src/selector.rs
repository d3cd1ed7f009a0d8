//! Picks the winning content container from the score table.

use crate::dom::NodeId;
use crate::scoring::ScoreTable;

/// The container chosen to hold the article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    pub score: i64,
}

/// Select the container with the strictly greatest positive score.
///
/// Containers are visited in first-touch order and ties keep the earlier
/// one. Returns `None` when no container scored above zero.
#[must_use]
pub fn select_best(table: &ScoreTable) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (node, score) in table.iter() {
        let best_score = best.map_or(0, |b| b.score);
        if score > 0 && score > best_score {
            best = Some(Candidate { node, score });
        }
    }

    match best {
        Some(candidate) => tracing::debug!(score = candidate.score, "selected content container"),
        None => tracing::warn!(containers = table.len(), "no container scored above zero"),
    }
    best
}
