//! Card component for draft list rows on the dashboard.
//!
//! DESIGN
//! ======
//! Keeps list presentation consistent between the overview grid and the
//! comment-form draft pickers while centralizing the open/delete
//! affordances.

#[cfg(test)]
#[path = "draft_card_test.rs"]
mod draft_card_test;

use leptos::prelude::*;

/// Comment-count caption: count when known, em dash while the preload is
/// pending or failed.
fn comments_caption(count: Option<usize>) -> String {
    match count {
        Some(1) => "1 comment".to_owned(),
        Some(n) => format!("{n} comments"),
        None => "—".to_owned(),
    }
}

/// A clickable card representing one draft.
#[component]
pub fn DraftCard(
    id: String,
    title: String,
    #[prop(optional_no_strip)] comments_count: Option<usize>,
    #[prop(optional_no_strip)] comments_error: Option<String>,
    #[prop(optional)] selected: bool,
    on_open: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let open_id = id.clone();
    let delete_id = id.clone();
    let caption = comments_caption(comments_count);
    let error_title = comments_error.clone().unwrap_or_default();
    let has_error = comments_error.is_some();

    view! {
        <button
            class="draft-card"
            class:draft-card--selected=selected
            on:click=move |_| on_open.run(open_id.clone())
        >
            <span class="draft-card__title">{title}</span>
            <span class="draft-card__id">{id}</span>
            <span class="draft-card__status">"Draft"</span>
            <span
                class="draft-card__comments"
                class:draft-card__comments--error=has_error
                title=error_title
            >
                {caption}
            </span>
            <span
                class="draft-card__delete"
                role="button"
                title="Delete draft"
                aria-label="Delete draft"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_delete.run(delete_id.clone());
                }
            >
                "✕"
            </span>
        </button>
    }
}
