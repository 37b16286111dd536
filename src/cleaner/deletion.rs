use std::collections::BTreeMap;
use std::fmt;

/// Why a turn was marked for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionReason {
    /// Whole text is a non-verbal marker such as "(laughter.)"
    Nonverbal,
    /// Whole text is a floor-management phrase
    TrafficPhrase,
    /// Short dash-terminated fragment cut off by another speaker
    FalseStart,
    /// Acknowledgement sandwiched inside another speaker's floor
    Interjection,
}

impl fmt::Display for DeletionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeletionReason::Nonverbal => "nonverbal",
            DeletionReason::TrafficPhrase => "traffic phrase",
            DeletionReason::FalseStart => "false start",
            DeletionReason::Interjection => "interjection",
        };
        f.write_str(label)
    }
}

/// Original turn indices slated for removal.
///
/// Indices can only be added. The first reason recorded for an index is kept.
#[derive(Debug, Clone, Default)]
pub struct DeletionSet {
    marked: BTreeMap<usize, DeletionReason>,
}

impl DeletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an index; returns true if it was not already marked
    pub fn mark(&mut self, index: usize, reason: DeletionReason) -> bool {
        if self.marked.contains_key(&index) {
            return false;
        }
        self.marked.insert(index, reason);
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.marked.contains_key(&index)
    }

    pub fn reason(&self, index: usize) -> Option<DeletionReason> {
        self.marked.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Number of indices marked for the given reason
    pub fn count(&self, reason: DeletionReason) -> usize {
        self.marked.values().filter(|r| **r == reason).count()
    }

    /// Marked indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.keys().copied()
    }
}

/// Scan direction for neighbor lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Find the nearest index strictly after (or before) `from` that `skip` does not reject.
///
/// `from` itself is never returned. Returns `None` when the scan runs off either end.
pub fn nearest_surviving<T>(
    items: &[T],
    from: usize,
    direction: Direction,
    skip: impl Fn(usize) -> bool,
) -> Option<usize> {
    match direction {
        Direction::Forward => (from.saturating_add(1)..items.len()).find(|&j| !skip(j)),
        Direction::Backward => (0..from.min(items.len())).rev().find(|&j| !skip(j)),
    }
}
