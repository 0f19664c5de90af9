//! Shared view-state slices provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each slice is a plain struct with pure mutation methods so orchestration
//! rules (merge-by-id, partial preload failure, selection clearing) test
//! without a DOM. Pages wrap the slices in `RwSignal`s via context.

pub mod auth;
pub mod drafts;
pub mod ui;
