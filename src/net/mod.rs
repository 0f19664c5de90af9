//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the shared request/response plumbing, `auth`/`drafts`/
//! `comments`/`sentiment` are the per-resource clients, `types` defines the
//! wire schema, and `error` the failure taxonomy surfaced to view state.

pub mod api;
pub mod auth;
pub mod comments;
pub mod drafts;
pub mod error;
pub mod sentiment;
pub mod types;
