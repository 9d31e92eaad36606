//! Relevance-search panel: query input and scored result grid.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::ops;
use crate::net::types::Post;
use crate::state::editor::EditorState;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;
use crate::state::search::SearchState;

/// Search tab: input row plus the results of the last successful search.
///
/// A blank query is a no-op, and a failed search keeps the prior results
/// on screen. Result cards expose the same edit/delete actions as the
/// listing; a delete refreshes the canonical list, not the search results.
#[component]
pub fn SearchPanel() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let posts = expect_context::<RwSignal<PostsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let do_search = move || ops::run_search(search, notices);

    let on_edit = Callback::new(move |post: Post| editor.update(|e| e.open_edit(&post)));
    let on_delete = Callback::new(move |id: String| ops::delete_post(id, posts, notices));

    view! {
        <section class="search-panel">
            <div class="search-panel__input-row">
                <input
                    class="search-panel__input"
                    type="text"
                    placeholder="Search posts"
                    prop:value=move || search.get().query
                    on:input=move |ev| search.update(|s| s.query = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            do_search();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| do_search()>
                    "Search"
                </button>
            </div>
            <Show
                when=move || !search.get().loading
                fallback=move || view! { <p class="panel__loading">"Searching..."</p> }
            >
                <div class="post-grid">
                    {move || {
                        search
                            .get()
                            .results
                            .into_iter()
                            .map(|post| {
                                view! {
                                    <PostCard
                                        post=post
                                        show_score=true
                                        on_edit=on_edit
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
