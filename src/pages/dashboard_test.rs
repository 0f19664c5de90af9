use super::*;

// =============================================================
// Status messages
// =============================================================

#[test]
fn bulk_upload_success_message_pluralizes() {
    assert_eq!(bulk_upload_success_message(0), "Uploaded 0 comments successfully.");
    assert_eq!(bulk_upload_success_message(1), "Uploaded 1 comment successfully.");
    assert_eq!(bulk_upload_success_message(7), "Uploaded 7 comments successfully.");
}

#[test]
fn report_success_message_names_the_file() {
    assert_eq!(
        report_success_message("draft_d1_report.pdf"),
        "Report download started: draft_d1_report.pdf"
    );
}

// =============================================================
// Settings helpers
// =============================================================

#[test]
fn token_caption_masks_the_stored_token() {
    let credential = session::Credential::new("abcdefghijklmnopqrstuvwxyz", None);
    assert_eq!(
        token_caption(Some(&credential)),
        "bearer abcdefgh...uvwxyz (stored)"
    );
}

#[test]
fn token_caption_without_credential() {
    assert_eq!(token_caption(None), "No token stored.");
}

#[test]
fn validate_password_change_requires_matching_fields() {
    assert_eq!(validate_password_change("secret", "secret"), Ok(()));
    assert_eq!(
        validate_password_change("secret", "other"),
        Err("New password and confirmation do not match.")
    );
    assert_eq!(validate_password_change("", ""), Err("Enter a new password."));
}
