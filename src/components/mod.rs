//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome from props; orchestration and shared
//! state stay in the pages that own them.

pub mod comment_list;
pub mod draft_card;
pub mod sentiment_heatmap;
