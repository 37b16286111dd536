pub mod deletion;
pub mod false_starts;
pub mod interjections;
pub mod merge;
pub mod sections;
pub mod traffic;

pub use deletion::*;
pub use false_starts::*;
pub use interjections::*;
pub use merge::*;
pub use sections::*;
pub use traffic::*;

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::models::Turn;

/// Floor-management phrases removed when they are a turn's entire text
pub const DEFAULT_TRAFFIC_PHRASES: &[&str] = &[
    "i'm sorry.",
    "go ahead.",
    "no, please.",
    "thank you.",
    "yes.",
    "okay.",
    "all right.",
    "thank you, counsel.",
    "please.",
];

/// Non-verbal transcription markers removed when they are a turn's entire text
pub const DEFAULT_NONVERBAL_MARKERS: &[&str] = &["(laughter.)"];

/// Acknowledgements removed when sandwiched inside one speaker's floor
pub const DEFAULT_SIMPLE_INTERJECTIONS: &[&str] = &[
    "yeah.", "right.", "mm-hmm.", "sure.", "no.", "correct.", "yes.",
];

/// Configuration for the turn cleaner
///
/// Phrase sets are matched against normalized turn text, so entries
/// should be trimmed and lowercase.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub traffic_phrases: BTreeSet<String>,
    pub nonverbal_markers: BTreeSet<String>,
    pub simple_interjections: BTreeSet<String>,
    /// Turns shorter than this (seconds) may be false starts
    pub false_start_max_secs: f64,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            traffic_phrases: phrase_set(DEFAULT_TRAFFIC_PHRASES.iter().copied()),
            nonverbal_markers: phrase_set(DEFAULT_NONVERBAL_MARKERS.iter().copied()),
            simple_interjections: phrase_set(DEFAULT_SIMPLE_INTERJECTIONS.iter().copied()),
            false_start_max_secs: 3.0,
        }
    }
}

/// Build a phrase set, normalizing each entry the way turn text is normalized
pub fn phrase_set<'a>(phrases: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    phrases
        .into_iter()
        .map(|p| p.trim().to_lowercase())
        .collect()
}

/// Indices flagged by a single pass, in ascending order
#[derive(Debug, Clone, Default)]
pub struct PassResult {
    pub flagged: Vec<usize>,
}

/// Summary of one cleaning run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub original_turns: usize,
    pub traffic_removed: usize,
    pub false_starts_removed: usize,
    pub interjections_removed: usize,
    /// Surviving turns folded into a preceding same-speaker turn
    pub merges: usize,
    pub cleaned_turns: usize,
}

impl CleanReport {
    /// Total turns removed by the three flagging passes
    pub fn removed(&self) -> usize {
        self.traffic_removed + self.false_starts_removed + self.interjections_removed
    }
}

/// Output of [`clean_turns`]
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub turns: Vec<Turn>,
    pub deletions: DeletionSet,
    pub report: CleanReport,
}

/// Clean a sequence of turns.
///
/// Runs traffic phrases, false starts, then interjections over one shared
/// deletion set, and finally merges the survivors. Each pass resolves
/// neighbors against everything marked by the passes before it, so the
/// order is fixed.
pub fn clean_turns(turns: Vec<Turn>, config: &CleanerConfig) -> CleanOutcome {
    let original_turns = turns.len();
    let mut deletions = DeletionSet::new();

    if turns.is_empty() {
        return CleanOutcome {
            turns,
            deletions,
            report: CleanReport::default(),
        };
    }

    let traffic = flag_traffic_phrases(&turns, &mut deletions, config);
    debug!("Pass 1: {} traffic turns flagged", traffic.flagged.len());

    let false_starts = flag_false_starts(&turns, &mut deletions, config);
    debug!("Pass 2: {} false starts flagged", false_starts.flagged.len());

    let interjections = flag_interjections(&turns, &mut deletions, config);
    debug!("Pass 3: {} interjections flagged", interjections.flagged.len());

    let merged = merge_surviving(turns, &deletions);

    let report = CleanReport {
        original_turns,
        traffic_removed: traffic.flagged.len(),
        false_starts_removed: false_starts.flagged.len(),
        interjections_removed: interjections.flagged.len(),
        merges: merged.merges,
        cleaned_turns: merged.turns.len(),
    };

    info!(
        "Cleaned {} turns -> {} ({} removed, {} merged)",
        report.original_turns,
        report.cleaned_turns,
        report.removed(),
        report.merges
    );

    CleanOutcome {
        turns: merged.turns,
        deletions,
        report,
    }
}
