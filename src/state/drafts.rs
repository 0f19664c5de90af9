//! Draft list and detail state for the dashboard.
//!
//! DESIGN
//! ======
//! All merge rules live here as pure methods: detail and comment results
//! apply by draft id (the only guard against stale responses landing after
//! a selection change), and each preload branch merges independently so one
//! draft's failure never blocks the others. Loading flags are advisory —
//! the client layer does not deduplicate in-flight requests.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use std::collections::HashMap;

use crate::net::types::{CommentRecord, DraftListItem, DraftRecord};
use crate::util::sentiment::{self, SentimentCounts};
use crate::util::text::derived_title;

/// Display projection of one draft in the list view.
///
/// `body`/`summary` may be partial until a detail fetch lands;
/// `comments_count` is `None` until that draft's comment preload resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftEntry {
    pub id: String,
    pub user_id: Option<String>,
    pub title: String,
    pub body: Option<String>,
    pub summary: Option<String>,
    pub comments_count: Option<usize>,
}

impl DraftEntry {
    fn from_list_item(item: DraftListItem) -> Self {
        let title = derived_title(item.summary.as_deref(), item.draft.as_deref());
        Self {
            id: item.id,
            user_id: Some(item.user_id),
            title,
            body: item.draft,
            summary: item.summary,
            comments_count: None,
        }
    }

    fn from_record(record: DraftRecord) -> Self {
        let title = derived_title(record.summary.as_deref(), Some(&record.draft));
        Self {
            id: record.id,
            user_id: record.user_id,
            title,
            body: Some(record.draft),
            summary: record.summary,
            comments_count: None,
        }
    }
}

/// Shared draft state: the list, the selection, and per-draft comment data.
#[derive(Clone, Debug, Default)]
pub struct DraftsState {
    pub entries: Vec<DraftEntry>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_id: Option<String>,
    pub comments: HashMap<String, Vec<CommentRecord>>,
    pub comment_errors: HashMap<String, String>,
    pub comments_loading_id: Option<String>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    pub deleting_id: Option<String>,
}

impl DraftsState {
    /// Replace the list with fresh entries, keeping selection and comment
    /// data for ids that survived.
    pub fn apply_list(&mut self, items: Vec<DraftListItem>) {
        self.entries = items.into_iter().map(DraftEntry::from_list_item).collect();
        self.loading = false;
        self.error = None;
        if let Some(selected) = &self.selected_id {
            if !self.entries.iter().any(|e| &e.id == selected) {
                self.selected_id = None;
            }
        }
    }

    /// Merge one branch of the comment preload fan-out.
    ///
    /// Success stores the comments and count and clears that draft's stale
    /// error; failure records the error as data. Other drafts are never
    /// touched, so partial success is the normal outcome.
    pub fn apply_comment_preload(
        &mut self,
        draft_id: &str,
        result: Result<Vec<CommentRecord>, String>,
    ) {
        match result {
            Ok(records) => {
                self.comment_errors.remove(draft_id);
                if let Some(entry) = self.entry_mut(draft_id) {
                    entry.comments_count = Some(records.len());
                }
                self.comments.insert(draft_id.to_owned(), records);
            }
            Err(message) => {
                self.comment_errors.insert(draft_id.to_owned(), message);
            }
        }
    }

    /// Store a refreshed comment list for one draft.
    pub fn set_comments(&mut self, draft_id: &str, records: Vec<CommentRecord>) {
        self.apply_comment_preload(draft_id, Ok(records));
    }

    /// Record a comment fetch failure for one draft.
    pub fn set_comment_error(&mut self, draft_id: &str, message: String) {
        self.apply_comment_preload(draft_id, Err(message));
    }

    /// Merge fetched detail into the matching entry, by id only.
    ///
    /// A response for a draft that is no longer listed is dropped on the
    /// floor — there is no cancellation, so this is the stale-response
    /// guard. List order is never disturbed.
    pub fn merge_detail(&mut self, record: DraftRecord) {
        self.detail_loading = false;
        if let Some(entry) = self.entry_mut(&record.id) {
            entry.body = Some(record.draft);
            entry.summary = record.summary;
            entry.user_id = record.user_id.or(entry.user_id.take());
            if entry.title == "Untitled Draft" {
                entry.title = derived_title(entry.summary.as_deref(), entry.body.as_deref());
            }
        }
    }

    /// Drop a deleted draft and everything keyed by its id, clearing the
    /// selection if it pointed at the removed draft.
    pub fn remove(&mut self, draft_id: &str) {
        self.entries.retain(|e| e.id != draft_id);
        self.comments.remove(draft_id);
        self.comment_errors.remove(draft_id);
        if self.selected_id.as_deref() == Some(draft_id) {
            self.selected_id = None;
        }
        if self.deleting_id.as_deref() == Some(draft_id) {
            self.deleting_id = None;
        }
    }

    /// Prepend a freshly uploaded draft and deep-link to its detail view
    /// without re-fetching the list.
    pub fn prepend_uploaded(&mut self, record: DraftRecord) {
        let mut entry = DraftEntry::from_record(record);
        entry.comments_count = Some(0);
        self.selected_id = Some(entry.id.clone());
        self.entries.insert(0, entry);
    }

    pub fn selected(&self) -> Option<&DraftEntry> {
        let id = self.selected_id.as_deref()?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Comments for one draft, empty until loaded.
    pub fn comments_for(&self, draft_id: &str) -> &[CommentRecord] {
        self.comments.get(draft_id).map_or(&[], Vec::as_slice)
    }

    /// Per-draft sentiment counts in list order, labeled by title — the
    /// locally derived heatmap input.
    pub fn sentiment_pairs(&self) -> Vec<(String, SentimentCounts)> {
        self.entries
            .iter()
            .map(|entry| {
                let counts = sentiment::counts_from_comments(self.comments_for(&entry.id));
                (entry.title.clone(), counts)
            })
            .collect()
    }

    fn entry_mut(&mut self, draft_id: &str) -> Option<&mut DraftEntry> {
        self.entries.iter_mut().find(|e| e.id == draft_id)
    }
}
