//! Sentiment heatmap aggregation.
//!
//! DESIGN
//! ======
//! Pure functions over `(label, counts)` pairs so the aggregation invariants
//! (intensity bounds, tie-break precedence, zero-safety) test without a DOM.
//! Cell order always matches input order.

#[cfg(test)]
#[path = "sentiment_test.rs"]
mod sentiment_test;

use serde::{Deserialize, Serialize};

use crate::net::types::CommentRecord;

/// Raw sentiment counts for one label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(default)]
    pub positive: u32,
    #[serde(default)]
    pub negative: u32,
    #[serde(default)]
    pub neutral: u32,
}

impl SentimentCounts {
    pub fn total(self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

/// Dominant sentiment category of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// One derived heatmap cell. Never persisted; recomputed whenever the input
/// mapping changes.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapCell {
    pub id: String,
    pub label: String,
    pub counts: SentimentCounts,
    /// Relative volume on a 0-1 scale: this cell's total over the maximum
    /// total across the current cell set.
    pub intensity: f64,
}

/// Build one cell per labeled count set, in input order.
///
/// The max-total divisor is floored at 1 so an empty or all-zero mapping
/// yields intensity 0 everywhere instead of dividing by zero.
pub fn build_heatmap_cells(data: &[(String, SentimentCounts)]) -> Vec<HeatmapCell> {
    let max_total = data
        .iter()
        .map(|(_, counts)| counts.total())
        .max()
        .unwrap_or(0)
        .max(1);
    data.iter()
        .map(|(label, counts)| HeatmapCell {
            id: label.clone(),
            label: label.clone(),
            counts: *counts,
            intensity: f64::from(counts.total()) / f64::from(max_total),
        })
        .collect()
}

/// The category with the highest count. Positive wins any tie it is part
/// of; negative wins a negative/neutral tie; neutral is the default.
pub fn dominant(counts: SentimentCounts) -> Sentiment {
    if counts.positive >= counts.negative && counts.positive >= counts.neutral {
        Sentiment::Positive
    } else if counts.negative >= counts.positive && counts.negative >= counts.neutral {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Cell background: dominant hue with intensity as alpha, floored at 0.2 so
/// low-volume cells stay visible.
pub fn cell_color(cell: &HeatmapCell) -> String {
    let alpha = cell.intensity.max(0.2);
    let (r, g, b) = match dominant(cell.counts) {
        Sentiment::Positive => (34, 197, 94),
        Sentiment::Negative => (239, 68, 68),
        Sentiment::Neutral => (156, 163, 175),
    };
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Cell text color: high-contrast white above 0.5 intensity, otherwise a
/// dark tone matching the dominant hue.
pub fn text_color(cell: &HeatmapCell) -> &'static str {
    if cell.intensity > 0.5 {
        return "#ffffff";
    }
    match dominant(cell.counts) {
        Sentiment::Positive => "#16a34a",
        Sentiment::Negative => "#dc2626",
        Sentiment::Neutral => "#6b7280",
    }
}

/// Classify a free-form sentiment label from a comment record.
///
/// Matching is case-insensitive and substring-based because backends emit
/// variants like `"Positive"`, `"slightly negative"`, etc. Unrecognized or
/// missing labels classify as `None`.
pub fn classify_label(label: Option<&str>) -> Option<Sentiment> {
    let normalized = label?.to_lowercase();
    if normalized.contains("negative") {
        Some(Sentiment::Negative)
    } else if normalized.contains("positive") {
        Some(Sentiment::Positive)
    } else if normalized.contains("neutral") {
        Some(Sentiment::Neutral)
    } else {
        None
    }
}

/// Tally one draft's comments into counts, ignoring comments whose
/// sentiment label is missing or unrecognized.
pub fn counts_from_comments(comments: &[CommentRecord]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for comment in comments {
        match classify_label(comment.sentiment_analysis.as_deref()) {
            Some(Sentiment::Positive) => counts.positive += 1,
            Some(Sentiment::Negative) => counts.negative += 1,
            Some(Sentiment::Neutral) => counts.neutral += 1,
            None => {}
        }
    }
    counts
}
