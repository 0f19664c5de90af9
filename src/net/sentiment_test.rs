use super::*;

#[test]
fn sentiment_pairs_keep_envelope_order() {
    let envelope: crate::net::types::SentimentEnvelope = serde_json::from_str(
        r#"{"success":true,"data":{
            "Mumbai":{"positive":37,"negative":13,"neutral":20},
            "Delhi":{"positive":5,"negative":2,"neutral":1}
        }}"#,
    )
    .unwrap();
    let pairs = sentiment_pairs(envelope.data.unwrap());
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "Mumbai");
    assert_eq!(pairs[0].1.positive, 37);
    assert_eq!(pairs[1].0, "Delhi");
}

#[test]
fn sentiment_pairs_skip_malformed_entries() {
    let envelope: crate::net::types::SentimentEnvelope = serde_json::from_str(
        r#"{"success":true,"data":{
            "Good":{"positive":1,"negative":0,"neutral":0},
            "Bad":"not counts"
        }}"#,
    )
    .unwrap();
    let pairs = sentiment_pairs(envelope.data.unwrap());
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "Good");
}

#[test]
fn counts_missing_fields_default_to_zero() {
    let envelope: crate::net::types::SentimentEnvelope =
        serde_json::from_str(r#"{"success":true,"data":{"Partial":{"positive":3}}}"#).unwrap();
    let pairs = sentiment_pairs(envelope.data.unwrap());
    assert_eq!(pairs[0].1.positive, 3);
    assert_eq!(pairs[0].1.negative, 0);
    assert_eq!(pairs[0].1.neutral, 0);
}

#[test]
fn default_endpoint_is_the_analysis_path() {
    assert_eq!(DEFAULT_ENDPOINT, "/api/sentiment/analysis");
}

#[test]
fn agent_endpoint_embeds_the_agent_id() {
    assert_eq!(agent_endpoint("a7"), "/api/sentiment/agent/a7");
}

#[test]
fn invalid_envelope_message_names_the_sentiment_api() {
    assert_eq!(
        invalid_envelope_message(),
        "Invalid response format from sentiment API"
    );
}
