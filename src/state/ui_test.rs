use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn section_default_is_dashboard() {
    assert_eq!(Section::default(), Section::Dashboard);
}

#[test]
fn section_all_lists_each_section_once() {
    let all = Section::all();
    assert_eq!(all.len(), 4);
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn section_labels_are_distinct() {
    let labels: Vec<&str> = Section::all().iter().map(|s| s.label()).collect();
    let mut deduped = labels.clone();
    deduped.dedup();
    assert_eq!(labels.len(), deduped.len());
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_expanded_dashboard() {
    let state = UiState::default();
    assert_eq!(state.section, Section::Dashboard);
    assert!(!state.sidebar_collapsed);
}
