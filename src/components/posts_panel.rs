//! Canonical listing panel: the "All Posts" tab.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::ops;
use crate::net::types::Post;
use crate::state::editor::EditorState;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;

/// Grid of all posts with edit/delete actions per card.
///
/// Deletion is fire-and-forget: no confirmation step, and the card only
/// disappears once the follow-up list fetch lands.
#[component]
pub fn PostsPanel() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_edit = Callback::new(move |post: Post| editor.update(|e| e.open_edit(&post)));
    let on_delete = Callback::new(move |id: String| ops::delete_post(id, posts, notices));

    view! {
        <section class="posts-panel">
            <Show
                when=move || !posts.get().loading
                fallback=move || view! { <p class="panel__loading">"Loading posts..."</p> }
            >
                <div class="post-grid">
                    {move || {
                        posts
                            .get()
                            .items
                            .into_iter()
                            .map(|post| {
                                view! { <PostCard post=post on_edit=on_edit on_delete=on_delete/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
