//! Edit-dialog form state.
//!
//! DESIGN
//! ======
//! The dialog is a scoped acquisition of form state: opening initializes a
//! transient copy, keystrokes mutate it, and closing discards it
//! unconditionally. `form` is `Some` exactly while the dialog is open, so
//! Cancel needs no cleanup beyond [`EditorState::close`] and performs no
//! network call.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::{NewPost, Post, UpdatePost};

/// Transient editable copy of a post bound to the dialog inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostForm {
    /// `Some` when editing an existing post, `None` when creating.
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub topic: String,
}

/// The request a dialog save maps to.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(NewPost),
    Update(UpdatePost),
}

/// Dialog state: the open form, if any, plus the save in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// The form backing the open dialog; `None` while the dialog is closed.
    pub form: Option<PostForm>,
    /// True while a create/update call is in flight.
    pub saving: bool,
}

impl EditorState {
    /// Open the dialog with a blank form for creating a post.
    pub fn open_create(&mut self) {
        self.form = Some(PostForm::default());
    }

    /// Open the dialog seeded from an existing post.
    pub fn open_edit(&mut self, post: &Post) {
        self.form = Some(PostForm {
            id: Some(post.id.clone()),
            title: post.title.clone(),
            content: post.content.clone(),
            topic: post.topic.clone(),
        });
    }

    /// Close the dialog, discarding the form.
    pub fn close(&mut self) {
        self.form = None;
        self.saving = false;
    }

    /// Whether the dialog is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    /// Whether the open form edits an existing post.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.form.as_ref().is_some_and(|f| f.id.is_some())
    }

    /// Build the save request for the open form, marking the save as in
    /// flight. The form is kept so a failed save loses no entered values.
    ///
    /// Returns `None` when the dialog is closed.
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        let form = self.form.as_ref()?;
        self.saving = true;
        Some(match &form.id {
            Some(id) => SaveRequest::Update(UpdatePost {
                id: id.clone(),
                title: form.title.clone(),
                content: form.content.clone(),
                topic: form.topic.clone(),
            }),
            None => SaveRequest::Create(NewPost {
                title: form.title.clone(),
                content: form.content.clone(),
                topic: form.topic.clone(),
            }),
        })
    }

    /// The save succeeded: close the dialog.
    pub fn apply_saved(&mut self) {
        self.close();
    }

    /// Settle a failed save. The dialog stays open with the entered
    /// values intact.
    pub fn fail_save(&mut self) {
        self.saving = false;
    }
}
