//! Command dispatch: one operation per user intent.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the bridge between the REST helpers in [`super::api`] and the
//! shared state signals. Each operation maps to exactly one network call,
//! applies its guard before dispatching, and settles the relevant in-flight
//! flag on both outcomes. Mutations that succeed are followed by exactly
//! one list refetch — the client never folds a mutation response into
//! local state directly.
//!
//! All dispatch is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment; the guards and transitions themselves
//! live on the state types where they are natively testable.

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use crate::state::editor::SaveRequest;
use crate::state::editor::EditorState;
use crate::state::generate::GenerateState;
#[cfg(feature = "hydrate")]
use crate::state::notice;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;
use crate::state::search::SearchState;

/// Fetch the canonical post list, replacing it wholesale on success.
///
/// Issued once on mount and again after every successful mutation.
pub fn fetch_posts(posts: RwSignal<PostsState>, notices: RwSignal<NoticeState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut epoch = 0;
        posts.update(|p| epoch = p.begin_fetch());
        leptos::task::spawn_local(async move {
            match api::fetch_posts().await {
                Ok(items) => {
                    posts.update(|p| {
                        p.apply_fetched(epoch, items);
                    });
                }
                Err(e) => {
                    log::warn!("post list fetch failed: {e}");
                    let mut settled = false;
                    posts.update(|p| settled = p.fail_fetch(epoch));
                    if settled {
                        notices.update(|n| {
                            n.show_error(notice::FETCH_POSTS_FAILED);
                        });
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (posts, notices);
    }
}

/// Save the open edit dialog: create when the form has no id, full
/// replace otherwise.
///
/// On success the dialog closes and the list is refetched; on failure the
/// dialog stays open with the entered values intact.
pub fn save_editor(
    editor: RwSignal<EditorState>,
    posts: RwSignal<PostsState>,
    notices: RwSignal<NoticeState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let mut request = None;
        editor.update(|e| request = e.begin_save());
        let Some(request) = request else {
            return;
        };
        leptos::task::spawn_local(async move {
            let (result, success_msg) = match &request {
                SaveRequest::Create(post) => (api::create_post(post).await, notice::POST_CREATED),
                SaveRequest::Update(post) => (api::update_post(post).await, notice::POST_UPDATED),
            };
            match result {
                Ok(()) => {
                    editor.update(EditorState::apply_saved);
                    notices.update(|n| {
                        n.show_success(success_msg);
                    });
                    fetch_posts(posts, notices);
                }
                Err(e) => {
                    log::warn!("post save failed: {e}");
                    editor.update(EditorState::fail_save);
                    notices.update(|n| {
                        n.show_error(notice::SAVE_POST_FAILED);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (editor, posts, notices);
    }
}

/// Delete a post by id. Fire-and-forget from the UI: no confirmation step.
///
/// On failure no refetch is issued, so the post stays visible in the list.
pub fn delete_post(
    post_id: String,
    posts: RwSignal<PostsState>,
    notices: RwSignal<NoticeState>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api::delete_post(&post_id).await {
                Ok(()) => {
                    notices.update(|n| {
                        n.show_success(notice::POST_DELETED);
                    });
                    fetch_posts(posts, notices);
                }
                Err(e) => {
                    log::warn!("post delete failed: {e}");
                    notices.update(|n| {
                        n.show_error(notice::DELETE_POST_FAILED);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, posts, notices);
    }
}

/// Run a relevance search for the current query.
///
/// No-op when the query is blank. Overlapping searches resolve by epoch:
/// only the latest issued request may apply its results.
pub fn run_search(search: RwSignal<SearchState>, notices: RwSignal<NoticeState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut started = None;
        let mut query = String::new();
        search.update(|s| {
            started = s.begin_search();
            query.clone_from(&s.query);
        });
        let Some(epoch) = started else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::search_posts(&query).await {
                Ok(results) => {
                    search.update(|s| {
                        s.apply_results(epoch, results);
                    });
                }
                Err(e) => {
                    log::warn!("post search failed: {e}");
                    let mut settled = false;
                    search.update(|s| settled = s.fail_search(epoch));
                    if settled {
                        notices.update(|n| {
                            n.show_error(notice::SEARCH_FAILED);
                        });
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, notices);
    }
}

/// Generate a draft for the current topic.
///
/// No-op when the topic is blank. The previous draft is dropped when the
/// call is issued; on failure the draft slot stays empty.
pub fn run_generate(generate: RwSignal<GenerateState>, notices: RwSignal<NoticeState>) {
    #[cfg(feature = "hydrate")]
    {
        let mut started = None;
        let mut topic = String::new();
        generate.update(|g| {
            started = g.begin_generate();
            topic.clone_from(&g.topic);
        });
        let Some(epoch) = started else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::generate_draft(&topic).await {
                Ok(draft) => {
                    generate.update(|g| {
                        g.apply_draft(epoch, draft);
                    });
                }
                Err(e) => {
                    log::warn!("draft generation failed: {e}");
                    let mut settled = false;
                    generate.update(|g| settled = g.fail_generate(epoch));
                    if settled {
                        notices.update(|n| {
                            n.show_error(notice::GENERATE_FAILED);
                        });
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generate, notices);
    }
}

/// Persist the pending generated draft through the regular create endpoint,
/// attaching the originating topic.
///
/// No-op without a draft. On success the draft and topic input clear and
/// the list is refetched; on failure the draft is retained for retry.
pub fn save_generated(
    generate: RwSignal<GenerateState>,
    posts: RwSignal<PostsState>,
    notices: RwSignal<NoticeState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let mut payload = None;
        generate.update(|g| payload = g.begin_save());
        let Some(payload) = payload else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::create_post(&payload).await {
                Ok(()) => {
                    generate.update(GenerateState::apply_saved);
                    notices.update(|n| {
                        n.show_success(notice::GENERATED_SAVED);
                    });
                    fetch_posts(posts, notices);
                }
                Err(e) => {
                    log::warn!("generated post save failed: {e}");
                    generate.update(GenerateState::fail_save);
                    notices.update(|n| {
                        n.show_error(notice::SAVE_GENERATED_FAILED);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (generate, posts, notices);
    }
}
