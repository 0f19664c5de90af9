//! Session credential lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated API call reads the ambient credential from the shared
//! store. The store itself is an explicit object over a pluggable storage
//! backend so the lifecycle unit-tests without a browser environment.

pub mod storage;
pub mod store;

pub use store::{Credential, SessionStore, shared};
