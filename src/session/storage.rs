//! Pluggable persistence backends for the session credential.
//!
//! TRADE-OFFS
//! ==========
//! Durable persistence is best-effort browser-only behavior. A backend that
//! cannot read or write (private browsing, storage disabled) degrades the
//! session to in-memory-only; it never surfaces an error to callers.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

use super::store::Credential;

/// Durable storage for the session credential.
///
/// Implementations swallow their own failures: `load` answers `None` when
/// nothing usable is stored, `save`/`clear` silently no-op on error.
pub trait TokenStorage {
    fn load(&self) -> Option<Credential>;
    fn save(&self, credential: &Credential);
    fn clear(&self);
}

/// In-process storage used in tests and non-browser builds.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<Credential>>,
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<Credential> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &Credential) {
        *self.slot.borrow_mut() = Some(credential.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "econsult_session";

/// `localStorage`-backed storage for hydrated browser builds.
///
/// The credential is stored as one JSON value under a single key so token
/// and token type can never drift apart across tabs.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<Credential> {
        let storage = local_storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, credential: &Credential) {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(credential) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
