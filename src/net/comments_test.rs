use super::*;
use crate::net::error::ApiError;

fn without_credential() {
    crate::session::shared().clear();
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn comment_endpoints_embed_the_draft_id() {
    assert_eq!(comment_endpoint("d1"), "/comment/draft/d1");
    assert_eq!(comment_list_endpoint("d1", 20), "/comment/draft/d1?limit=20");
    assert_eq!(comment_csv_endpoint("d1"), "/comment/draft/d1/csv");
}

#[test]
fn not_found_message_embeds_the_draft_id() {
    assert!(comments_not_found_message("d4").contains("comments for draft d4"));
}

// =============================================================
// Validation preconditions
// =============================================================

#[test]
fn create_rejects_blank_draft_id() {
    let payload = CreateCommentRequest::sanitized("hello", "", "", "");
    let result = futures::executor::block_on(create("", payload));
    assert_eq!(
        result,
        Err(ApiError::Validation(
            "Draft ID is required to create a comment.".to_owned()
        ))
    );
}

#[test]
fn create_rejects_empty_comment_text() {
    let payload = CreateCommentRequest {
        comment: "   ".to_owned(),
        sentiment_analysis: None,
        sentiment_score: None,
        sentiment_keywords: None,
    };
    let result = futures::executor::block_on(create("d1", payload));
    assert_eq!(
        result,
        Err(ApiError::Validation("Comment text is required.".to_owned()))
    );
}

#[test]
fn list_rejects_blank_draft_id() {
    let result = futures::executor::block_on(list("", 20));
    assert_eq!(
        result,
        Err(ApiError::Validation(
            "Draft ID is required to fetch comments.".to_owned()
        ))
    );
}

// =============================================================
// Auth preconditions fail before any network call
// =============================================================

#[test]
fn create_rejects_unauthenticated_before_network() {
    without_credential();
    let payload = CreateCommentRequest::sanitized("hello", "", "", "");
    let result = futures::executor::block_on(create("d1", payload));
    assert_eq!(result, Err(ApiError::NotAuthenticated));
}

#[test]
fn list_rejects_unauthenticated_before_network() {
    without_credential();
    let result = futures::executor::block_on(list("d1", 20));
    assert_eq!(result, Err(ApiError::NotAuthenticated));
}
