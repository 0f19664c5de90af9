use super::*;

fn counts(positive: u32, negative: u32, neutral: u32) -> SentimentCounts {
    SentimentCounts {
        positive,
        negative,
        neutral,
    }
}

fn pairs(data: &[(&str, SentimentCounts)]) -> Vec<(String, SentimentCounts)> {
    data.iter().map(|(label, c)| ((*label).to_owned(), *c)).collect()
}

// =============================================================
// Intensity invariants
// =============================================================

#[test]
fn intensities_stay_within_unit_range() {
    let cells = build_heatmap_cells(&pairs(&[
        ("Berlin", counts(45, 12, 23)),
        ("Tokyo", counts(32, 8, 15)),
        ("Cairo", counts(1, 0, 0)),
    ]));
    for cell in &cells {
        assert!(cell.intensity >= 0.0 && cell.intensity <= 1.0, "{}", cell.label);
    }
}

#[test]
fn max_total_cell_has_intensity_one() {
    let cells = build_heatmap_cells(&pairs(&[
        ("Low", counts(1, 1, 0)),
        ("High", counts(10, 5, 5)),
    ]));
    assert!((cells[1].intensity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn empty_input_builds_no_cells() {
    assert!(build_heatmap_cells(&[]).is_empty());
}

#[test]
fn all_zero_counts_do_not_divide_by_zero() {
    let cells = build_heatmap_cells(&pairs(&[
        ("A", counts(0, 0, 0)),
        ("B", counts(0, 0, 0)),
    ]));
    for cell in &cells {
        assert!(!cell.intensity.is_nan());
        assert!((cell.intensity - 0.0).abs() < f64::EPSILON);
    }
}

#[test]
fn cell_order_matches_input_order() {
    let cells = build_heatmap_cells(&pairs(&[
        ("Zeta", counts(1, 0, 0)),
        ("Alpha", counts(2, 0, 0)),
        ("Mid", counts(3, 0, 0)),
    ]));
    let labels: Vec<&str> = cells.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Zeta", "Alpha", "Mid"]);
}

// =============================================================
// Dominant sentiment tie-breaks
// =============================================================

#[test]
fn positive_wins_tie_with_negative() {
    assert_eq!(dominant(counts(5, 5, 0)), Sentiment::Positive);
}

#[test]
fn negative_wins_tie_with_neutral() {
    assert_eq!(dominant(counts(0, 5, 5)), Sentiment::Negative);
}

#[test]
fn neutral_wins_only_a_strict_majority() {
    assert_eq!(dominant(counts(1, 2, 5)), Sentiment::Neutral);
}

#[test]
fn all_zero_counts_are_positive_by_precedence() {
    assert_eq!(dominant(counts(0, 0, 0)), Sentiment::Positive);
}

// =============================================================
// Color mapping
// =============================================================

#[test]
fn cell_color_uses_intensity_as_alpha() {
    let cells = build_heatmap_cells(&pairs(&[
        ("Half", counts(1, 0, 0)),
        ("Full", counts(2, 0, 0)),
    ]));
    assert_eq!(cell_color(&cells[0]), "rgba(34, 197, 94, 0.5)");
    assert_eq!(cell_color(&cells[1]), "rgba(34, 197, 94, 1)");
}

#[test]
fn cell_color_floors_alpha_for_faint_cells() {
    let cells = build_heatmap_cells(&pairs(&[
        ("Faint", counts(0, 1, 0)),
        ("Loud", counts(0, 100, 0)),
    ]));
    assert_eq!(cell_color(&cells[0]), "rgba(239, 68, 68, 0.2)");
}

#[test]
fn text_color_flips_to_white_above_half_intensity() {
    let cells = build_heatmap_cells(&pairs(&[
        ("Dim", counts(0, 0, 1)),
        ("Bright", counts(0, 0, 4)),
    ]));
    assert_eq!(text_color(&cells[0]), "#6b7280");
    assert_eq!(text_color(&cells[1]), "#ffffff");
}

// =============================================================
// Comment label classification
// =============================================================

#[test]
fn classify_label_is_case_insensitive_substring_match() {
    assert_eq!(classify_label(Some("Positive")), Some(Sentiment::Positive));
    assert_eq!(classify_label(Some("slightly negative")), Some(Sentiment::Negative));
    assert_eq!(classify_label(Some("NEUTRAL tone")), Some(Sentiment::Neutral));
}

#[test]
fn classify_label_negative_takes_priority_over_positive_substring() {
    // e.g. "false positive, overall negative"
    assert_eq!(
        classify_label(Some("positive-negative mix")),
        Some(Sentiment::Negative)
    );
}

#[test]
fn classify_label_unknown_or_missing_is_none() {
    assert_eq!(classify_label(Some("mixed")), None);
    assert_eq!(classify_label(None), None);
}

#[test]
fn counts_from_comments_tallies_recognized_labels() {
    let comment = |id: &str, label: Option<&str>| crate::net::types::CommentRecord {
        id: id.to_owned(),
        draft_id: "d1".to_owned(),
        comment: "text".to_owned(),
        sentiment_analysis: label.map(str::to_owned),
        sentiment_score: None,
        sentiment_keywords: None,
    };
    let tallied = counts_from_comments(&[
        comment("c1", Some("positive")),
        comment("c2", Some("Positive")),
        comment("c3", Some("negative")),
        comment("c4", Some("neutral")),
        comment("c5", Some("spam")),
        comment("c6", None),
    ]);
    assert_eq!(tallied, counts(2, 1, 1));
}
