//! Credential store: an in-memory cache mirrored to durable storage.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::storage::TokenStorage;

/// Token type applied when the backend omits one.
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// An opaque bearer string plus its scheme tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_owned()
}

impl Credential {
    pub fn new(token: impl Into<String>, token_type: Option<&str>) -> Self {
        Self {
            token: token.into(),
            token_type: token_type
                .filter(|t| !t.trim().is_empty())
                .map_or_else(default_token_type, str::to_owned),
        }
    }

    /// `Authorization` header value, formatted `"<type> <token>"`.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

/// Holder of the at-most-one live credential.
///
/// Reads prefer the durable backend and re-synchronize the memory cache on
/// every call, so repeated reads stay consistent even when storage access
/// fails transiently. At most one credential is live per store; there is no
/// refresh or rotation.
pub struct SessionStore {
    cache: RefCell<Option<Credential>>,
    backend: Box<dyn TokenStorage>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn TokenStorage>) -> Self {
        Self {
            cache: RefCell::new(None),
            backend,
        }
    }

    /// Store a credential; `token_type` defaults to `"bearer"` when omitted.
    /// Storage failures are swallowed by the backend, never raised.
    pub fn set_token(&self, token: impl Into<String>, token_type: Option<&str>) {
        let credential = Credential::new(token, token_type);
        self.backend.save(&credential);
        *self.cache.borrow_mut() = Some(credential);
    }

    /// The live credential, if any.
    ///
    /// A backend hit refreshes the cache; a backend miss falls back to the
    /// cached value rather than discarding it.
    pub fn credential(&self) -> Option<Credential> {
        if let Some(stored) = self.backend.load() {
            *self.cache.borrow_mut() = Some(stored.clone());
            return Some(stored);
        }
        self.cache.borrow().clone()
    }

    /// The raw token, if a credential is live.
    pub fn token(&self) -> Option<String> {
        self.credential().map(|c| c.token)
    }

    /// Remove the credential from both the cache and durable storage.
    pub fn clear(&self) {
        *self.cache.borrow_mut() = None;
        self.backend.clear();
    }

    /// `("Authorization", "<type> <token>")`, or `None` when no credential
    /// is live. Callers detect "not authenticated" by the absence of the
    /// header pair, not by an empty value.
    pub fn auth_header(&self) -> Option<(&'static str, String)> {
        self.credential()
            .map(|c| ("Authorization", c.authorization_value()))
    }
}

fn default_backend() -> Box<dyn TokenStorage> {
    #[cfg(feature = "hydrate")]
    {
        Box::new(super::storage::BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Box::<super::storage::MemoryStorage>::default()
    }
}

thread_local! {
    static SHARED: Rc<SessionStore> = Rc::new(SessionStore::new(default_backend()));
}

/// Process-wide session store read by the API layer.
pub fn shared() -> Rc<SessionStore> {
    SHARED.with(Rc::clone)
}
