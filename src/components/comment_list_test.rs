use super::*;

// =============================================================
// Sentiment badge classes
// =============================================================

#[test]
fn badge_class_matches_recognized_labels() {
    assert!(sentiment_badge_class(Some("Positive feedback")).ends_with("--positive"));
    assert!(sentiment_badge_class(Some("negative")).ends_with("--negative"));
    assert!(sentiment_badge_class(Some("Neutral")).ends_with("--neutral"));
}

#[test]
fn badge_class_unknown_for_unrecognized_or_missing() {
    assert!(sentiment_badge_class(Some("mixed")).ends_with("--unknown"));
    assert!(sentiment_badge_class(None).ends_with("--unknown"));
}

#[test]
fn badge_text_falls_back_when_label_missing() {
    assert_eq!(badge_text(Some("positive")), "positive");
    assert_eq!(badge_text(Some("   ")), "Sentiment unknown");
    assert_eq!(badge_text(None), "Sentiment unknown");
}

// =============================================================
// Score chip classes
// =============================================================

#[test]
fn score_chip_bands_on_the_numeric_value() {
    assert!(score_chip_class(Some("-0.7")).ends_with("--negative"));
    assert!(score_chip_class(Some("-0.2")).ends_with("--negative"));
    assert!(score_chip_class(Some("0.0")).ends_with("--neutral"));
    assert!(score_chip_class(Some("0.2")).ends_with("--positive"));
    assert!(score_chip_class(Some(" 0.9 ")).ends_with("--positive"));
}

#[test]
fn score_chip_unknown_for_unparseable_values() {
    assert!(score_chip_class(Some("n/a")).ends_with("--unknown"));
    assert!(score_chip_class(Some("")).ends_with("--unknown"));
    assert!(score_chip_class(None).ends_with("--unknown"));
}
