use tracing::debug;

use crate::models::Turn;

use super::deletion::{nearest_surviving, DeletionReason, DeletionSet, Direction};
use super::{CleanerConfig, PassResult};

const FALSE_START_SUFFIX: &str = "--";

/// Pass 2: flag short dash-terminated turns cut off by a different speaker.
///
/// A restart by the same speaker is left for the merge pass. A candidate
/// with no surviving successor is kept.
pub fn flag_false_starts(
    turns: &[Turn],
    deletions: &mut DeletionSet,
    config: &CleanerConfig,
) -> PassResult {
    let mut flagged = Vec::new();

    for (i, turn) in turns.iter().enumerate() {
        if deletions.contains(i) {
            continue;
        }

        if turn.duration() >= config.false_start_max_secs {
            continue;
        }
        if !turn.normalized_text().ends_with(FALSE_START_SUFFIX) {
            continue;
        }

        let Some(next) = nearest_surviving(turns, i, Direction::Forward, |j| deletions.contains(j))
        else {
            continue;
        };

        if !turn.same_speaker(&turns[next]) {
            debug!(
                "Turn {} ({}): false start interrupted by {}",
                i, turn.speaker.name, turns[next].speaker.name
            );
            deletions.mark(i, DeletionReason::FalseStart);
            flagged.push(i);
        }
    }

    PassResult { flagged }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_by_other_speaker() {
        let turns = vec![
            Turn::new("X", 0.0, 1.0, &["I object--"]),
            Turn::new("Y", 1.0, 3.0, &["Let me finish."]),
        ];
        let mut deletions = DeletionSet::new();

        let result = flag_false_starts(&turns, &mut deletions, &CleanerConfig::default());

        assert_eq!(result.flagged, vec![0]);
        assert_eq!(deletions.reason(0), Some(DeletionReason::FalseStart));
    }

    #[test]
    fn test_self_restart_is_kept() {
        let turns = vec![
            Turn::new("X", 0.0, 1.0, &["May I ask--"]),
            Turn::new("X", 1.0, 2.5, &["\u{2014}a question?"]),
        ];
        let mut deletions = DeletionSet::new();

        let result = flag_false_starts(&turns, &mut deletions, &CleanerConfig::default());

        assert!(result.flagged.is_empty());
    }

    #[test]
    fn test_last_turn_is_kept() {
        let turns = vec![
            Turn::new("Y", 0.0, 4.0, &["Go on."]),
            Turn::new("X", 4.0, 5.0, &["But--"]),
        ];
        let mut deletions = DeletionSet::new();

        let result = flag_false_starts(&turns, &mut deletions, &CleanerConfig::default());

        assert!(result.flagged.is_empty());
    }

    #[test]
    fn test_duration_threshold_is_strict() {
        let turns = vec![
            Turn::new("X", 0.0, 3.0, &["Well--"]),
            Turn::new("Y", 3.0, 5.0, &["Counsel."]),
        ];
        let mut deletions = DeletionSet::new();

        let result = flag_false_starts(&turns, &mut deletions, &CleanerConfig::default());

        assert!(result.flagged.is_empty());
    }

    #[test]
    fn test_successor_resolution_skips_prior_deletions() {
        // The only other-speaker turn in between is already gone, so the
        // next surviving turn is X again.
        let turns = vec![
            Turn::new("X", 0.0, 1.0, &["If I could--"]),
            Turn::new("Y", 1.0, 1.5, &["Go ahead."]),
            Turn::new("X", 1.5, 6.0, &["If I could finish the point."]),
        ];
        let mut deletions = DeletionSet::new();
        deletions.mark(1, DeletionReason::TrafficPhrase);

        let result = flag_false_starts(&turns, &mut deletions, &CleanerConfig::default());

        assert!(result.flagged.is_empty());
    }

    #[test]
    fn test_already_marked_turns_are_skipped() {
        let turns = vec![
            Turn::new("X", 0.0, 1.0, &["Thank you--"]),
            Turn::new("Y", 1.0, 3.0, &["Yes."]),
        ];
        let mut deletions = DeletionSet::new();
        deletions.mark(0, DeletionReason::TrafficPhrase);

        let result = flag_false_starts(&turns, &mut deletions, &CleanerConfig::default());

        assert!(result.flagged.is_empty());
        assert_eq!(deletions.reason(0), Some(DeletionReason::TrafficPhrase));
    }
}
