//! Dashboard page: the single authenticated controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On entry it loads the draft
//! list, then fans out one comment preload per draft and merges each branch
//! independently — one draft's failure never blocks the others. Section
//! navigation (overview, upload, comments, settings) is local UI state;
//! everything draft-shaped lives in the shared `DraftsState` slice.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::comment_list::CommentList;
use crate::components::draft_card::DraftCard;
use crate::components::sentiment_heatmap::SentimentHeatmap;
use crate::net::auth as auth_api;
use crate::session;
use crate::state::auth::AuthState;
use crate::state::drafts::DraftsState;
use crate::state::ui::{Section, UiState};
use crate::util::auth::install_unauth_redirect;
use crate::util::sentiment::SentimentCounts;
use crate::util::text::mask_token;

/// Overview list fetch size.
#[cfg(feature = "hydrate")]
const DRAFT_LIST_LIMIT: u32 = 20;
/// Per-draft preload size, large enough to make counts meaningful.
#[cfg(feature = "hydrate")]
const COMMENT_PRELOAD_LIMIT: u32 = 500;
/// Detail-view comment page size.
#[cfg(feature = "hydrate")]
const COMMENT_PAGE_LIMIT: u32 = 20;

#[cfg(any(test, feature = "hydrate"))]
fn bulk_upload_success_message(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Uploaded {count} comment{plural} successfully.")
}

#[cfg(any(test, feature = "hydrate"))]
fn report_success_message(filename: &str) -> String {
    format!("Report download started: {filename}")
}

/// Settings caption for the stored credential, masked for display.
fn token_caption(credential: Option<&session::Credential>) -> String {
    match credential {
        Some(credential) => format!(
            "{} {} (stored)",
            credential.token_type,
            mask_token(&credential.token)
        ),
        None => "No token stored.".to_owned(),
    }
}

/// Frontend-only password form check; nothing is persisted.
fn validate_password_change(new_password: &str, confirm: &str) -> Result<(), &'static str> {
    if new_password.is_empty() {
        return Err("Enter a new password.");
    }
    if new_password != confirm {
        return Err("New password and confirmation do not match.");
    }
    Ok(())
}

/// Load the draft list, then preload every draft's comments in parallel and
/// merge the settled branches. Partial success is the normal outcome.
#[cfg(feature = "hydrate")]
async fn load_drafts(drafts: RwSignal<DraftsState>) {
    match crate::net::drafts::list(DRAFT_LIST_LIMIT).await {
        Ok(items) => {
            drafts.update(|s| s.apply_list(items));
            let ids: Vec<String> = drafts
                .get_untracked()
                .entries
                .iter()
                .map(|e| e.id.clone())
                .collect();
            if ids.is_empty() {
                return;
            }
            let fetches = ids.into_iter().map(|id| async move {
                let result = crate::net::comments::list(&id, COMMENT_PRELOAD_LIMIT).await;
                (id, result.map_err(|e| e.to_string()))
            });
            let settled = futures::future::join_all(fetches).await;
            drafts.update(|s| {
                for (id, result) in settled {
                    s.apply_comment_preload(&id, result);
                }
            });
        }
        Err(e) => {
            log::warn!("draft list load failed: {e}");
            drafts.update(|s| {
                s.loading = false;
                s.error = Some(e.to_string());
            });
        }
    }
}

/// Refresh one draft's comment page. The trailing id comparison is the only
/// guard against a stale response clearing a newer load's flag.
#[cfg(feature = "hydrate")]
async fn load_draft_comments(drafts: RwSignal<DraftsState>, draft_id: String, limit: u32) {
    drafts.update(|s| {
        s.comments_loading_id = Some(draft_id.clone());
        s.comment_errors.remove(&draft_id);
    });
    let result = crate::net::comments::list(&draft_id, limit).await;
    drafts.update(|s| {
        match result {
            Ok(records) => s.set_comments(&draft_id, records),
            Err(e) => s.set_comment_error(&draft_id, e.to_string()),
        }
        if s.comments_loading_id.as_deref() == Some(draft_id.as_str()) {
            s.comments_loading_id = None;
        }
    });
}

/// Fetch full draft detail; the merge applies by id match only, so a
/// response landing after a selection change cannot corrupt another entry.
#[cfg(feature = "hydrate")]
async fn fetch_draft_detail(drafts: RwSignal<DraftsState>, draft_id: String) {
    drafts.update(|s| {
        s.detail_loading = true;
        s.detail_error = None;
    });
    match crate::net::drafts::get(&draft_id).await {
        Ok(record) => drafts.update(|s| s.merge_detail(record)),
        Err(e) => drafts.update(|s| {
            s.detail_loading = false;
            s.detail_error = Some(e.to_string());
        }),
    }
}

/// Dashboard page — section navigation plus the draft list/detail views.
/// Redirects to `/login` when the session holds no credential.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let drafts = expect_context::<RwSignal<DraftsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone(), "/");

    // One list load per entry into the authenticated dashboard.
    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() || !auth.get().is_authenticated() {
            return;
        }
        drafts.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_drafts(drafts));
        requested_list.set(true);
    });

    let on_logout = move |_| {
        auth_api::logout();
        drafts.set(DraftsState::default());
        auth.update(|a| a.authenticated = Some(false));
    };

    let section_nav = move || {
        Section::all()
            .into_iter()
            .map(|section| {
                let active = move || ui.get().section == section;
                view! {
                    <button
                        class="sidebar__item"
                        class:sidebar__item--active=active
                        on:click=move |_| ui.update(|u| u.section = section)
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if auth.get().is_pending() {
                                    "Loading..."
                                } else {
                                    "Redirecting to login..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <aside class="sidebar" class:sidebar--collapsed=move || ui.get().sidebar_collapsed>
                    <button
                        class="sidebar__toggle"
                        on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
                        title="Toggle sidebar"
                    >
                        {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                    </button>
                    <span class="sidebar__brand">"MCA eConsultation"</span>
                    {section_nav}
                    <span class="sidebar__spacer"></span>
                    <button class="sidebar__item sidebar__logout" on:click=on_logout>
                        "LOGOUT"
                    </button>
                </aside>
                <main class="dashboard-page__main">
                    {move || match ui.get().section {
                        Section::Dashboard => view! { <OverviewSection/> }.into_any(),
                        Section::Upload => view! { <UploadSection/> }.into_any(),
                        Section::Comments => view! { <CommentsSection/> }.into_any(),
                        Section::Settings => view! { <SettingsSection/> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}

/// Overview: the draft grid with comment counts, the sentiment heatmap, and
/// the detail view once a draft is selected.
#[component]
fn OverviewSection() -> impl IntoView {
    let drafts = expect_context::<RwSignal<DraftsState>>();
    let confirm_delete_id = RwSignal::new(None::<String>);
    let delete_error = RwSignal::new(None::<String>);

    // Server-side analysis is preferred when the endpoint answers; local
    // comment-derived counts are the fallback.
    let server_pairs = RwSignal::new(None::<Vec<(String, SentimentCounts)>>);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::sentiment::fetch().await {
                Ok(pairs) if !pairs.is_empty() => server_pairs.set(Some(pairs)),
                Ok(_) => {}
                Err(e) => log::debug!("sentiment endpoint unavailable, deriving locally: {e}"),
            }
        });
    }
    let heatmap_data = Signal::derive(move || {
        server_pairs
            .get()
            .unwrap_or_else(|| drafts.get().sentiment_pairs())
    });

    let on_open = Callback::new(move |draft_id: String| {
        drafts.update(|s| s.selected_id = Some(draft_id.clone()));
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(fetch_draft_detail(drafts, draft_id.clone()));
            let preloaded = drafts.get_untracked().comments.contains_key(&draft_id);
            if !preloaded {
                leptos::task::spawn_local(load_draft_comments(
                    drafts,
                    draft_id,
                    COMMENT_PAGE_LIMIT,
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = draft_id;
    });

    let on_delete_request = Callback::new(move |draft_id: String| {
        delete_error.set(None);
        confirm_delete_id.set(Some(draft_id));
    });
    let on_delete_cancel = Callback::new(move |_: ()| confirm_delete_id.set(None));

    view! {
        <Show
            when=move || drafts.get().selected_id.is_some()
            fallback=move || {
                view! {
                    <div class="overview">
                        <h2 class="overview__title">"Draft Dashboard"</h2>
                        <Show when=move || drafts.get().error.is_some()>
                            <p class="overview__error">
                                {move || drafts.get().error.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || delete_error.get().is_some()>
                            <p class="overview__error">
                                {move || delete_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <Show
                            when=move || !drafts.get().loading
                            fallback=move || view! { <p>"Loading drafts..."</p> }
                        >
                            <Show
                                when=move || !drafts.get().entries.is_empty()
                                fallback=move || {
                                    view! {
                                        <p class="overview__empty">
                                            "Upload a draft to get started with sentiment analysis"
                                        </p>
                                    }
                                }
                            >
                                <div class="overview__cards">
                                    {move || {
                                        drafts
                                            .get()
                                            .entries
                                            .iter()
                                            .map(|entry| {
                                                let error = drafts
                                                    .get()
                                                    .comment_errors
                                                    .get(&entry.id)
                                                    .cloned();
                                                view! {
                                                    <DraftCard
                                                        id=entry.id.clone()
                                                        title=entry.title.clone()
                                                        comments_count=entry.comments_count
                                                        comments_error=error
                                                        selected=false
                                                        on_open=on_open
                                                        on_delete=on_delete_request
                                                    />
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </Show>
                        </Show>
                        <SentimentHeatmap data=heatmap_data/>
                    </div>
                }
            }
        >
            <DetailSection/>
        </Show>
        <Show when=move || confirm_delete_id.get().is_some()>
            <DeleteDraftDialog
                draft_id=confirm_delete_id
                error=delete_error
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}

/// Detail view for the selected draft: body, summary, report actions, and
/// the comment page.
#[component]
fn DetailSection() -> impl IntoView {
    let drafts = expect_context::<RwSignal<DraftsState>>();

    let report_busy = RwSignal::new(false);
    let report_error = RwSignal::new(None::<String>);
    let report_success = RwSignal::new(None::<String>);

    // Report state belongs to one selection; clear it when the id changes.
    let last_report_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        let current = drafts.get().selected_id.clone();
        if last_report_id.get_untracked() != current {
            last_report_id.set(current);
            report_error.set(None);
            report_success.set(None);
            report_busy.set(false);
        }
    });

    let selected_id = move || drafts.get().selected_id.unwrap_or_default();

    let on_back = move |_| drafts.update(|s| s.selected_id = None);

    let on_generate_report = move |_| {
        if report_busy.get() {
            return;
        }
        report_error.set(None);
        report_success.set(None);
        report_busy.set(true);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &selected_id;
            report_busy.set(false);
        }
        #[cfg(feature = "hydrate")]
        {
            let draft_id = selected_id();
            leptos::task::spawn_local(async move {
                match crate::net::drafts::generate_report(&draft_id).await {
                    Ok(report) => {
                        crate::util::files::save_bytes(
                            &report.bytes,
                            &report.filename,
                            "application/pdf",
                        );
                        report_success.set(Some(report_success_message(&report.filename)));
                    }
                    Err(e) => report_error.set(Some(e.to_string())),
                }
                report_busy.set(false);
            });
        }
    };

    let on_refresh_comments = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let draft_id = selected_id();
            if drafts.get_untracked().comments_loading_id.as_deref() != Some(draft_id.as_str()) {
                leptos::task::spawn_local(load_draft_comments(drafts, draft_id, COMMENT_PAGE_LIMIT));
            }
        }
    };

    let on_retry_detail = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(fetch_draft_detail(drafts, selected_id()));
    };

    let comments_loading =
        move || drafts.get().comments_loading_id == drafts.get().selected_id && drafts.get().selected_id.is_some();
    let comments_error = move || {
        let state = drafts.get();
        state
            .selected_id
            .as_ref()
            .and_then(|id| state.comment_errors.get(id).cloned())
    };

    view! {
        <div class="detail">
            <nav class="detail__breadcrumb">
                <button class="detail__back" on:click=on_back>
                    "Dashboard"
                </button>
                <span class="detail__crumb-sep">"/"</span>
                <span class="detail__crumb">
                    {move || drafts.get().selected().map(|e| e.title.clone()).unwrap_or_default()}
                </span>
            </nav>

            <div class="detail__panels">
                <section class="detail__panel detail__panel--content">
                    <h3>"Draft Content"</h3>
                    {move || {
                        let state = drafts.get();
                        if state.detail_loading {
                            view! { <p class="detail__loading">"Loading draft content..."</p> }
                                .into_any()
                        } else if let Some(message) = state.detail_error.clone() {
                            view! {
                                <div class="detail__error">
                                    <p>{message}</p>
                                    <button class="detail__retry" on:click=on_retry_detail>
                                        "Retry"
                                    </button>
                                </div>
                            }
                            .into_any()
                        } else if let Some(body) = state.selected().and_then(|e| e.body.clone()) {
                            view! { <pre class="detail__body">{body}</pre> }.into_any()
                        } else {
                            view! { <p class="detail__empty">"No content available"</p> }.into_any()
                        }
                    }}
                </section>

                <section class="detail__panel detail__panel--summary">
                    <h3>"Executive Summary"</h3>
                    {move || {
                        let state = drafts.get();
                        if state.detail_loading {
                            view! { <p class="detail__loading">"Loading summary..."</p> }.into_any()
                        } else if let Some(summary) =
                            state.selected().and_then(|e| e.summary.clone())
                        {
                            view! { <p class="detail__summary">{summary}</p> }.into_any()
                        } else {
                            view! { <p class="detail__empty">"No summary available"</p> }.into_any()
                        }
                    }}
                </section>
            </div>

            <section class="detail__panel detail__panel--actions">
                <h3>"Analysis Actions"</h3>
                <button
                    class="detail__report-button"
                    on:click=on_generate_report
                    disabled=move || report_busy.get()
                >
                    {move || if report_busy.get() { "Generating…" } else { "Generate Report" }}
                </button>
                <Show when=move || report_error.get().is_some()>
                    <p class="detail__error">{move || report_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || report_success.get().is_some()>
                    <p class="detail__success">{move || report_success.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <section class="detail__panel detail__panel--comments">
                <header class="detail__comments-header">
                    <h3>"Stakeholder Comments"</h3>
                    <button
                        class="detail__refresh"
                        on:click=on_refresh_comments
                        disabled=comments_loading
                    >
                        "Refresh"
                    </button>
                </header>
                {move || {
                    let state = drafts.get();
                    let Some(draft_id) = state.selected_id.clone() else {
                        return ().into_any();
                    };
                    if comments_loading() {
                        view! { <p class="detail__loading">"Loading comments..."</p> }.into_any()
                    } else if let Some(message) = comments_error() {
                        view! {
                            <div class="detail__error">
                                <p>{message}</p>
                                <button class="detail__retry" on:click=on_refresh_comments>
                                    "Retry"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else if state.comments_for(&draft_id).is_empty() {
                        view! {
                            <p class="detail__empty">"No comments yet for this draft."</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <CommentList comments=state.comments_for(&draft_id).to_vec()/>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Upload view: PDF validation, upload, prepend + deep-link to detail.
#[component]
fn UploadSection() -> impl IntoView {
    let drafts = expect_context::<RwSignal<DraftsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let file_caption = RwSignal::new(None::<String>);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(not(feature = "hydrate"))]
    let _ = (drafts, ui);

    let on_file_change = move |_| {
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let file = file_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => {
                    if let Err(message) = crate::util::files::validate_draft_pdf(
                        &file.name(),
                        &file.type_(),
                        file.size(),
                    ) {
                        error.set(Some(message));
                        file_caption.set(None);
                    } else {
                        file_caption.set(Some(file.name()));
                    }
                }
                None => file_caption.set(None),
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let file = file_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                error.set(Some("Please choose a PDF file to upload.".to_owned()));
                return;
            };
            if let Err(message) =
                crate::util::files::validate_draft_pdf(&file.name(), &file.type_(), file.size())
            {
                error.set(Some(message));
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::drafts::upload(&file).await {
                    Ok(record) => {
                        drafts.update(|s| s.prepend_uploaded(record));
                        file_caption.set(None);
                        ui.update(|u| u.section = Section::Dashboard);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="upload">
            <h2 class="upload__title">"Upload Draft"</h2>
            <p class="upload__hint">"PDF only, up to 20MB. The backend returns the extracted text and an AI summary."</p>
            <form class="upload__form" on:submit=on_submit>
                <input
                    class="upload__file"
                    type="file"
                    accept="application/pdf"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
                <Show when=move || file_caption.get().is_some()>
                    <p class="upload__caption">{move || file_caption.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="upload__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="upload__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading…" } else { "Upload" }}
                </button>
            </form>
        </div>
    }
}

/// Comments view: a single-comment form and the bulk CSV import, both
/// re-syncing the affected draft's comment state on success.
#[component]
fn CommentsSection() -> impl IntoView {
    let drafts = expect_context::<RwSignal<DraftsState>>();

    // Single comment form.
    let comment_draft_id = RwSignal::new(String::new());
    let comment_text = RwSignal::new(String::new());
    let sentiment_analysis = RwSignal::new(String::new());
    let sentiment_score = RwSignal::new(String::new());
    let sentiment_keywords = RwSignal::new(String::new());
    let comment_busy = RwSignal::new(false);
    let comment_error = RwSignal::new(None::<String>);
    let comment_success = RwSignal::new(None::<String>);

    // Bulk CSV form.
    let bulk_draft_id = RwSignal::new(String::new());
    let bulk_busy = RwSignal::new(false);
    let bulk_error = RwSignal::new(None::<String>);
    let bulk_success = RwSignal::new(None::<String>);
    let bulk_input_ref = NodeRef::<leptos::html::Input>::new();

    let draft_options = move || {
        drafts
            .get()
            .entries
            .iter()
            .map(|entry| {
                view! { <option value=entry.id.clone()>{entry.title.clone()}</option> }
            })
            .collect_view()
    };

    let on_comment_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if comment_busy.get() {
            return;
        }
        comment_error.set(None);
        comment_success.set(None);
        let draft_id = comment_draft_id.get();
        if draft_id.is_empty() {
            comment_error.set(Some("Please select a draft to comment on.".to_owned()));
            return;
        }
        if comment_text.get().trim().is_empty() {
            comment_error.set(Some("Please enter a comment before submitting.".to_owned()));
            return;
        }
        comment_busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let payload = crate::net::types::CreateCommentRequest::sanitized(
                &comment_text.get(),
                &sentiment_analysis.get(),
                &sentiment_score.get(),
                &sentiment_keywords.get(),
            );
            leptos::task::spawn_local(async move {
                match crate::net::comments::create(&draft_id, payload).await {
                    Ok(_) => {
                        comment_success.set(Some("Comment submitted successfully.".to_owned()));
                        comment_text.set(String::new());
                        load_draft_comments(drafts, draft_id, COMMENT_PAGE_LIMIT).await;
                    }
                    Err(e) => comment_error.set(Some(e.to_string())),
                }
                comment_busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        comment_busy.set(false);
    };

    let on_bulk_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if bulk_busy.get() {
            return;
        }
        bulk_error.set(None);
        bulk_success.set(None);
        let draft_id = bulk_draft_id.get();
        if draft_id.is_empty() {
            bulk_error.set(Some(
                "Please select a draft before uploading CSV comments.".to_owned(),
            ));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let file = bulk_input_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                bulk_error.set(Some("Please choose a CSV file to upload.".to_owned()));
                return;
            };
            if let Err(message) =
                crate::util::files::validate_comments_csv(&file.name(), file.size())
            {
                bulk_error.set(Some(message));
                return;
            }
            bulk_busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::comments::upload_csv(&draft_id, &file).await {
                    Ok(uploaded) => {
                        bulk_success.set(Some(bulk_upload_success_message(uploaded.len())));
                        drafts.update(|s| s.set_comments(&draft_id, uploaded));
                        if let Some(input) = bulk_input_ref.get_untracked() {
                            input.set_value("");
                        }
                    }
                    Err(e) => bulk_error.set(Some(e.to_string())),
                }
                bulk_busy.set(false);
            });
        }
    };

    view! {
        <div class="comments-section">
            <section class="comments-section__panel">
                <h3>"Submit a Comment"</h3>
                <form class="comments-section__form" on:submit=on_comment_submit>
                    <label class="comments-section__label">
                        "Draft"
                        <select
                            class="comments-section__select"
                            prop:value=move || comment_draft_id.get()
                            on:change=move |ev| comment_draft_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select a draft…"</option>
                            {draft_options}
                        </select>
                    </label>
                    <label class="comments-section__label">
                        "Comment"
                        <textarea
                            class="comments-section__textarea"
                            prop:value=move || comment_text.get()
                            on:input=move |ev| comment_text.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="comments-section__label">
                        "Sentiment (optional)"
                        <input
                            class="comments-section__input"
                            type="text"
                            placeholder="positive | negative | neutral"
                            prop:value=move || sentiment_analysis.get()
                            on:input=move |ev| sentiment_analysis.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="comments-section__label">
                        "Score (optional)"
                        <input
                            class="comments-section__input"
                            type="text"
                            placeholder="-1.0 to 1.0"
                            prop:value=move || sentiment_score.get()
                            on:input=move |ev| sentiment_score.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="comments-section__label">
                        "Keywords (optional)"
                        <input
                            class="comments-section__input"
                            type="text"
                            placeholder="comma, separated"
                            prop:value=move || sentiment_keywords.get()
                            on:input=move |ev| sentiment_keywords.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || comment_error.get().is_some()>
                        <p class="comments-section__error">
                            {move || comment_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || comment_success.get().is_some()>
                        <p class="comments-section__success">
                            {move || comment_success.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        class="comments-section__submit"
                        type="submit"
                        disabled=move || comment_busy.get()
                    >
                        {move || if comment_busy.get() { "Submitting…" } else { "Submit Comment" }}
                    </button>
                </form>
            </section>

            <section class="comments-section__panel">
                <h3>"Bulk Upload (CSV)"</h3>
                <p class="comments-section__hint">".csv only, up to 10MB."</p>
                <form class="comments-section__form" on:submit=on_bulk_submit>
                    <label class="comments-section__label">
                        "Draft"
                        <select
                            class="comments-section__select"
                            prop:value=move || bulk_draft_id.get()
                            on:change=move |ev| bulk_draft_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select a draft…"</option>
                            {draft_options}
                        </select>
                    </label>
                    <input
                        class="comments-section__file"
                        type="file"
                        accept=".csv"
                        node_ref=bulk_input_ref
                    />
                    <Show when=move || bulk_error.get().is_some()>
                        <p class="comments-section__error">
                            {move || bulk_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || bulk_success.get().is_some()>
                        <p class="comments-section__success">
                            {move || bulk_success.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button
                        class="comments-section__submit"
                        type="submit"
                        disabled=move || bulk_busy.get()
                    >
                        {move || if bulk_busy.get() { "Uploading…" } else { "Upload CSV" }}
                    </button>
                </form>
            </section>
        </div>
    }
}

/// Settings view: credential management plus the frontend-only password
/// form.
#[component]
fn SettingsSection() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // The session store is not reactive; bump a version to re-render the
    // caption after set/clear.
    let session_version = RwSignal::new(0_u32);
    let token_input = RwSignal::new(String::new());
    let token_message = RwSignal::new(None::<String>);

    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let settings_alert = RwSignal::new(None::<Result<String, String>>);

    let caption = move || {
        session_version.get();
        token_caption(session::shared().credential().as_ref())
    };

    let on_save_token = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = token_input.get();
        let token = token.trim();
        if token.is_empty() {
            token_message.set(Some("Paste a token first.".to_owned()));
            return;
        }
        session::shared().set_token(token, None);
        auth.update(|a| a.authenticated = Some(true));
        token_input.set(String::new());
        token_message.set(Some("Token saved.".to_owned()));
        session_version.update(|v| *v += 1);
    };

    let on_clear_token = move |_| {
        session::shared().clear();
        token_message.set(Some("Token cleared. You will need to sign in again.".to_owned()));
        session_version.update(|v| *v += 1);
        auth.update(|a| a.authenticated = Some(false));
    };

    let on_save_settings = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_password_change(&new_password.get(), &confirm_password.get()) {
            Ok(()) => {
                settings_alert.set(Some(Ok(
                    "Settings updated (frontend only, not persisted).".to_owned()
                )));
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
            Err(message) => settings_alert.set(Some(Err(message.to_owned()))),
        }
    };

    view! {
        <div class="settings">
            <h2 class="settings__title">"Settings"</h2>

            <section class="settings__panel">
                <h3>"Authentication Token"</h3>
                <p class="settings__caption">{caption}</p>
                <form class="settings__form" on:submit=on_save_token>
                    <input
                        class="settings__input"
                        type="password"
                        placeholder="Paste an access token"
                        prop:value=move || token_input.get()
                        on:input=move |ev| token_input.set(event_target_value(&ev))
                    />
                    <div class="settings__actions">
                        <button class="settings__save" type="submit">
                            "Save Token"
                        </button>
                        <button class="settings__clear" type="button" on:click=on_clear_token>
                            "Clear Token"
                        </button>
                    </div>
                </form>
                <Show when=move || token_message.get().is_some()>
                    <p class="settings__message">{move || token_message.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <section class="settings__panel">
                <h3>"Account"</h3>
                <form class="settings__form" on:submit=on_save_settings>
                    <label class="settings__label">
                        "New password"
                        <input
                            class="settings__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings__label">
                        "Confirm password"
                        <input
                            class="settings__input"
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        settings_alert
                            .get()
                            .map(|alert| match alert {
                                Ok(message) => view! {
                                    <p class="settings__message settings__message--success">
                                        {message}
                                    </p>
                                }
                                .into_any(),
                                Err(message) => view! {
                                    <p class="settings__message settings__message--error">
                                        {message}
                                    </p>
                                }
                                .into_any(),
                            })
                    }}
                    <button class="settings__save" type="submit">
                        "Save Settings"
                    </button>
                </form>
            </section>
        </div>
    }
}

/// Confirm-then-delete dialog for a draft.
#[component]
fn DeleteDraftDialog(
    draft_id: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let drafts = expect_context::<RwSignal<DraftsState>>();

    let submit = Callback::new(move |()| {
        let Some(id) = draft_id.get_untracked() else {
            return;
        };
        if drafts.get_untracked().deleting_id.is_some() {
            return;
        }
        drafts.update(|s| s.deleting_id = Some(id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::drafts::delete(&id).await {
                Ok(()) => {
                    drafts.update(|s| s.remove(&id));
                    on_cancel.run(());
                }
                Err(e) => {
                    drafts.update(|s| s.deleting_id = None);
                    error.set(Some(e.to_string()));
                    on_cancel.run(());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, error);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Draft"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this draft and its comments."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || drafts.get().deleting_id.is_some()
                        on:click=move |_| submit.run(())
                    >
                        {move || {
                            if drafts.get().deleting_id.is_some() { "Deleting…" } else { "Delete" }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
