//! Home page: tab strip over the three view modes, plus dialog and
//! notice hosts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It issues the single mount-time list fetch and
//! keys the exclusive panels off `UiState::view_mode`; switching tabs is a
//! pure local state change that never fetches or clears data.

use leptos::prelude::*;

use crate::components::edit_dialog::EditDialog;
use crate::components::generate_panel::GeneratePanel;
use crate::components::notice_host::NoticeHost;
use crate::components::posts_panel::PostsPanel;
use crate::components::search_panel::SearchPanel;
use crate::components::toolbar::Toolbar;
use crate::net::ops;
use crate::state::editor::EditorState;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;
use crate::state::ui::{UiState, ViewMode};

/// The post manager screen.
#[component]
pub fn HomePage() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();
    let editor = expect_context::<RwSignal<EditorState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Exactly one list fetch on mount; everything after that is driven by
    // user intents.
    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        requested_initial.set(true);
        ops::fetch_posts(posts, notices);
    });

    view! {
        <div class="home-page">
            <Toolbar/>

            <main class="home-page__body">
                <nav class="tab-strip">
                    {ViewMode::all()
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <button
                                    class="tab"
                                    class:tab--active=move || ui.get().view_mode == mode
                                    on:click=move |_| ui.update(|u| u.view_mode = mode)
                                >
                                    {mode.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <Show when=move || ui.get().view_mode == ViewMode::Posts>
                    <PostsPanel/>
                </Show>
                <Show when=move || ui.get().view_mode == ViewMode::Search>
                    <SearchPanel/>
                </Show>
                <Show when=move || ui.get().view_mode == ViewMode::Generate>
                    <GeneratePanel/>
                </Show>
            </main>

            <Show when=move || editor.get().is_open()>
                <EditDialog/>
            </Show>

            <NoticeHost/>
        </div>
    }
}
