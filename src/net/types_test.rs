use super::*;

// =============================================================
// Tolerant id deserialization
// =============================================================

#[test]
fn draft_list_item_accepts_string_ids() {
    let item: DraftListItem = serde_json::from_str(r#"{"id":"d1","user_id":"u1"}"#).unwrap();
    assert_eq!(item.id, "d1");
    assert_eq!(item.user_id, "u1");
    assert!(item.draft.is_none());
    assert!(item.summary.is_none());
}

#[test]
fn draft_list_item_accepts_numeric_ids() {
    let item: DraftListItem = serde_json::from_str(r#"{"id":7,"user_id":12}"#).unwrap();
    assert_eq!(item.id, "7");
    assert_eq!(item.user_id, "12");
}

#[test]
fn comment_record_accepts_numeric_score() {
    let record: CommentRecord =
        serde_json::from_str(r#"{"id":"c1","draft_id":"d1","comment":"ok","sentiment_score":-0.4}"#)
            .unwrap();
    assert_eq!(record.sentiment_score.as_deref(), Some("-0.4"));
}

#[test]
fn comment_record_defaults_optional_sentiment_fields() {
    let record: CommentRecord =
        serde_json::from_str(r#"{"id":"c1","draft_id":"d1","comment":"ok"}"#).unwrap();
    assert!(record.sentiment_analysis.is_none());
    assert!(record.sentiment_score.is_none());
    assert!(record.sentiment_keywords.is_none());
}

#[test]
fn token_response_token_type_is_optional() {
    let response: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(response.access_token, "abc");
    assert!(response.token_type.is_none());
}

// =============================================================
// CreateCommentRequest sanitization
// =============================================================

#[test]
fn sanitized_trims_comment_text() {
    let request = CreateCommentRequest::sanitized("  hello  ", "", "", "");
    assert_eq!(request.comment, "hello");
}

#[test]
fn sanitized_drops_empty_optional_fields() {
    let request = CreateCommentRequest::sanitized("hello", "   ", "", "  ");
    assert!(request.sentiment_analysis.is_none());
    assert!(request.sentiment_score.is_none());
    assert!(request.sentiment_keywords.is_none());
}

#[test]
fn sanitized_keeps_trimmed_optional_fields() {
    let request = CreateCommentRequest::sanitized("hello", " positive ", " 0.8 ", " tax, policy ");
    assert_eq!(request.sentiment_analysis.as_deref(), Some("positive"));
    assert_eq!(request.sentiment_score.as_deref(), Some("0.8"));
    assert_eq!(request.sentiment_keywords.as_deref(), Some("tax, policy"));
}

#[test]
fn empty_optional_fields_are_omitted_from_json() {
    let request = CreateCommentRequest::sanitized("hello", "", "0.5", "");
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"comment": "hello", "sentiment_score": "0.5"})
    );
}

// =============================================================
// SentimentEnvelope
// =============================================================

#[test]
fn sentiment_envelope_preserves_label_order() {
    let envelope: SentimentEnvelope = serde_json::from_str(
        r#"{"success":true,"data":{"Zeta":{"positive":1,"negative":0,"neutral":0},"Alpha":{"positive":2,"negative":0,"neutral":0}}}"#,
    )
    .unwrap();
    let labels: Vec<&String> = envelope.data.as_ref().unwrap().keys().collect();
    assert_eq!(labels, ["Zeta", "Alpha"]);
}

#[test]
fn sentiment_envelope_data_is_optional() {
    let envelope: SentimentEnvelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert!(envelope.timestamp.is_none());
}
