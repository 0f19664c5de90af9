use super::*;

// =============================================================
// Token type normalization
// =============================================================

#[test]
fn normalize_token_type_defaults_to_bearer() {
    assert_eq!(normalize_token_type(None), "bearer");
    assert_eq!(normalize_token_type(Some("")), "bearer");
    assert_eq!(normalize_token_type(Some("   ")), "bearer");
}

#[test]
fn normalize_token_type_canonicalizes_bearer_spellings() {
    assert_eq!(normalize_token_type(Some("Bearer")), "bearer");
    assert_eq!(normalize_token_type(Some("BEARER")), "bearer");
}

#[test]
fn normalize_token_type_keeps_other_schemes() {
    assert_eq!(normalize_token_type(Some("MAC")), "MAC");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_the_shared_session() {
    let session = crate::session::shared();
    session.set_token("tok-1", None);
    logout();
    assert!(session.token().is_none());
    assert!(session.auth_header().is_none());
}
