//! Modal dialog for creating and editing posts.
//!
//! DESIGN
//! ======
//! Rendered only while `EditorState::form` is `Some`; every keystroke
//! mutates the transient form copy, and Cancel discards it without any
//! network traffic. A failed save leaves the dialog open with the entered
//! values intact.

use leptos::prelude::*;

use crate::net::ops;
use crate::state::editor::EditorState;
use crate::state::notice::NoticeState;
use crate::state::posts::PostsState;

/// The create/edit post dialog.
#[component]
pub fn EditDialog() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let posts = expect_context::<RwSignal<PostsState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_cancel = move || editor.update(EditorState::close);
    let on_save = move || ops::save_editor(editor, posts, notices);

    let field = move |f: fn(&crate::state::editor::PostForm) -> String| {
        editor.get().form.as_ref().map(f).unwrap_or_default()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editor.get().is_edit() { "Edit Post" } else { "Create New Post" }}</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || field(|f| f.title.clone())
                        on:input=move |ev| {
                            editor.update(|e| {
                                if let Some(form) = e.form.as_mut() {
                                    form.title = event_target_value(&ev);
                                }
                            });
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Topic"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || field(|f| f.topic.clone())
                        on:input=move |ev| {
                            editor.update(|e| {
                                if let Some(form) = e.form.as_mut() {
                                    form.topic = event_target_value(&ev);
                                }
                            });
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__textarea"
                        rows="8"
                        prop:value=move || field(|f| f.content.clone())
                        on:input=move |ev| {
                            editor.update(|e| {
                                if let Some(form) = e.form.as_mut() {
                                    form.content = event_target_value(&ev);
                                }
                            });
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || editor.get().saving
                        on:click=move |_| on_save()
                    >
                        {move || if editor.get().saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
