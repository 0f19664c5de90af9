use super::*;

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_untrimmed() {
    assert_eq!(
        validate_login_input("a@b.com", " spaced pass "),
        Ok(("a@b.com".to_owned(), " spaced pass ".to_owned()))
    );
}

// =============================================================
// Next-target resolution
// =============================================================

#[test]
fn resolve_next_target_defaults_to_dashboard() {
    assert_eq!(resolve_next_target(None), "/");
    assert_eq!(resolve_next_target(Some("")), "/");
}

#[test]
fn resolve_next_target_rejects_login_loop() {
    assert_eq!(resolve_next_target(Some("/login")), "/");
}

#[test]
fn resolve_next_target_honors_deep_link() {
    assert_eq!(resolve_next_target(Some("/")), "/");
    assert_eq!(resolve_next_target(Some("/settings")), "/settings");
}
