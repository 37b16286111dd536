use tracing::debug;

use crate::models::Turn;

use super::deletion::{nearest_surviving, DeletionReason, DeletionSet, Direction};
use super::{CleanerConfig, PassResult};

/// Pass 3: flag acknowledgements that sit inside another speaker's floor.
///
/// A turn whose whole text is a simple interjection is removed when the
/// surviving turns on both sides belong to the same speaker. Duration is
/// not considered.
pub fn flag_interjections(
    turns: &[Turn],
    deletions: &mut DeletionSet,
    config: &CleanerConfig,
) -> PassResult {
    let mut flagged = Vec::new();

    for (i, turn) in turns.iter().enumerate() {
        if deletions.contains(i) {
            continue;
        }

        if !config.simple_interjections.contains(&turn.normalized_text()) {
            continue;
        }

        let skip = |j: usize| deletions.contains(j);
        let prev = nearest_surviving(turns, i, Direction::Backward, skip);
        let next = nearest_surviving(turns, i, Direction::Forward, skip);

        if let (Some(prev), Some(next)) = (prev, next) {
            if turns[prev].same_speaker(&turns[next]) {
                debug!(
                    "Turn {} ({}): interjection inside {}'s floor",
                    i, turn.speaker.name, turns[prev].speaker.name
                );
                deletions.mark(i, DeletionReason::Interjection);
                flagged.push(i);
            }
        }
    }

    PassResult { flagged }
}
