//! Top application bar with the title and the create action.

use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Header bar: app title on the left, "New Post" on the right.
#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Blog Post Manager"</span>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__new-post"
                on:click=move |_| editor.update(EditorState::open_create)
            >
                "New Post"
            </button>
        </header>
    }
}
