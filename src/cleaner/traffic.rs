use tracing::debug;

use crate::models::Turn;

use super::deletion::{DeletionReason, DeletionSet};
use super::{CleanerConfig, PassResult};

/// Pass 1: flag turns whose whole text is a non-verbal marker or traffic phrase.
///
/// Matching is against the full normalized text, so a phrase followed by
/// substantive speech is never flagged here.
pub fn flag_traffic_phrases(
    turns: &[Turn],
    deletions: &mut DeletionSet,
    config: &CleanerConfig,
) -> PassResult {
    let mut flagged = Vec::new();

    for (i, turn) in turns.iter().enumerate() {
        let text = turn.normalized_text();

        let reason = if config.nonverbal_markers.contains(&text) {
            DeletionReason::Nonverbal
        } else if config.traffic_phrases.contains(&text) {
            DeletionReason::TrafficPhrase
        } else {
            continue;
        };

        if deletions.mark(i, reason) {
            debug!("Turn {} ({}): {:?} flagged as {}", i, turn.speaker.name, text, reason);
            flagged.push(i);
        }
    }

    PassResult { flagged }
}
