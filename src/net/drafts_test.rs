use super::*;

fn without_credential() {
    crate::session::shared().clear();
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn detail_endpoint_uses_drafts_segment() {
    assert_eq!(draft_detail_endpoint("d1"), "/draft/drafts/d1");
}

#[test]
fn list_endpoint_carries_limit() {
    assert_eq!(draft_list_endpoint(20), "/draft/?limit=20");
}

#[test]
fn delete_and_report_share_the_plain_segment() {
    assert_eq!(draft_endpoint("d1"), "/draft/d1");
    assert_eq!(draft_report_endpoint("d1"), "/draft/d1/report");
}

// =============================================================
// 404 wording
// =============================================================

#[test]
fn not_found_messages_embed_the_draft_id() {
    assert!(draft_not_found_message("d9").contains("The draft with ID d9"));
    assert!(delete_not_found_message("d9").contains("already been deleted"));
    assert!(report_not_found_message("d9").contains("report for draft d9"));
}

// =============================================================
// Content-Disposition filename extraction
// =============================================================

#[test]
fn extract_filename_missing_header_uses_fallback() {
    assert_eq!(extract_filename(None, "draft_d1_report.pdf"), "draft_d1_report.pdf");
}

#[test]
fn extract_filename_header_without_parameter_uses_fallback() {
    assert_eq!(extract_filename(Some("attachment"), "fb.pdf"), "fb.pdf");
}

#[test]
fn extract_filename_reads_plain_value() {
    assert_eq!(
        extract_filename(Some("attachment; filename=report.pdf"), "fb.pdf"),
        "report.pdf"
    );
}

#[test]
fn extract_filename_strips_quotes() {
    assert_eq!(
        extract_filename(Some(r#"attachment; filename="report.pdf""#), "fb.pdf"),
        "report.pdf"
    );
}

#[test]
fn extract_filename_decodes_rfc5987_value() {
    assert_eq!(
        extract_filename(
            Some("attachment; filename*=UTF-8''draft%20final%20report.pdf"),
            "fb.pdf"
        ),
        "draft final report.pdf"
    );
}

#[test]
fn extract_filename_rfc5987_decode_failure_uses_fallback() {
    assert_eq!(
        extract_filename(Some("attachment; filename*=UTF-8''%ff%fe"), "fb.pdf"),
        "fb.pdf"
    );
}

#[test]
fn extract_filename_empty_quoted_value_uses_fallback() {
    assert_eq!(extract_filename(Some(r#"attachment; filename="""#), "fb.pdf"), "fb.pdf");
}

#[test]
fn extract_filename_multibyte_value_is_handled() {
    assert_eq!(
        extract_filename(Some("attachment; filename=\u{00e9}tude.pdf"), "fb.pdf"),
        "\u{00e9}tude.pdf"
    );
}

#[test]
fn extract_filename_first_parameter_wins() {
    assert_eq!(
        extract_filename(
            Some(r#"attachment; filename="first.pdf"; filename*=UTF-8''second.pdf"#),
            "fb.pdf"
        ),
        "first.pdf"
    );
}

#[test]
fn default_report_filename_embeds_draft_id() {
    assert_eq!(default_report_filename("d1"), "draft_d1_report.pdf");
}

// =============================================================
// Auth preconditions fail before any network call
// =============================================================

#[test]
fn get_rejects_unauthenticated_before_network() {
    without_credential();
    let result = futures::executor::block_on(get("d1"));
    assert_eq!(result, Err(crate::net::error::ApiError::NotAuthenticated));
}

#[test]
fn list_rejects_unauthenticated_before_network() {
    without_credential();
    let result = futures::executor::block_on(list(20));
    assert_eq!(result, Err(crate::net::error::ApiError::NotAuthenticated));
}

#[test]
fn delete_rejects_unauthenticated_before_network() {
    without_credential();
    let result = futures::executor::block_on(delete("d1"));
    assert_eq!(result, Err(crate::net::error::ApiError::NotAuthenticated));
}

#[test]
fn report_rejects_unauthenticated_before_network() {
    without_credential();
    let result = futures::executor::block_on(generate_report("d1"));
    assert_eq!(result, Err(crate::net::error::ApiError::NotAuthenticated));
}

#[test]
fn report_rejects_blank_draft_id_first() {
    without_credential();
    let result = futures::executor::block_on(generate_report(""));
    assert_eq!(
        result,
        Err(crate::net::error::ApiError::Validation(
            "Draft ID is required to generate a report.".to_owned()
        ))
    );
}
