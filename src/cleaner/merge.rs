use crate::models::Turn;

use super::deletion::DeletionSet;

/// Result of the merge pass
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub turns: Vec<Turn>,
    /// Number of surviving turns folded into an earlier turn
    pub merges: usize,
}

/// Pass 4: drop marked turns, then coalesce adjacent same-speaker survivors.
///
/// A merged turn keeps the first turn's start and other fields, takes the
/// last turn's stop, and carries every text block in order.
pub fn merge_surviving(turns: Vec<Turn>, deletions: &DeletionSet) -> MergeResult {
    let mut merged: Vec<Turn> = Vec::with_capacity(turns.len().saturating_sub(deletions.len()));
    let mut merges = 0;

    for (i, turn) in turns.into_iter().enumerate() {
        if deletions.contains(i) {
            continue;
        }

        match merged.last_mut() {
            Some(last) if last.same_speaker(&turn) => {
                last.text_blocks.extend(turn.text_blocks);
                last.stop = turn.stop;
                merges += 1;
            }
            _ => merged.push(turn),
        }
    }

    MergeResult {
        turns: merged,
        merges,
    }
}
