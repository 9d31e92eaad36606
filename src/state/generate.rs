//! Draft-generation state.
//!
//! DESIGN
//! ======
//! A generated draft is a pending artifact, not a post: it exists only
//! between a successful generation and its save or discard. Saving goes
//! through the regular create endpoint with the originating topic attached,
//! then clears both the draft and the topic input.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use crate::net::types::{GeneratedDraft, NewPost};

/// State for the generate view: topic input, pending draft, in-flight flags.
#[derive(Clone, Debug, Default)]
pub struct GenerateState {
    /// Current topic input value.
    pub topic: String,
    /// Generated draft awaiting user acceptance, if any.
    pub draft: Option<GeneratedDraft>,
    /// True while a generation call is in flight.
    pub generating: bool,
    /// True while a save of the generated draft is in flight.
    pub saving: bool,
    /// Epoch of the most recently issued generation.
    pub epoch: u64,
}

impl GenerateState {
    /// Start a generation for the current topic, discarding any previous
    /// draft.
    ///
    /// Returns `None` without touching any state when the topic is empty
    /// or whitespace-only — a guard, not an error.
    pub fn begin_generate(&mut self) -> Option<u64> {
        if self.topic.trim().is_empty() {
            return None;
        }
        self.epoch += 1;
        self.generating = true;
        self.draft = None;
        Some(self.epoch)
    }

    /// Apply a successfully generated draft.
    ///
    /// Returns `false` (no state change) for responses superseded by a
    /// newer generation.
    pub fn apply_draft(&mut self, epoch: u64, draft: GeneratedDraft) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.draft = Some(draft);
        self.generating = false;
        true
    }

    /// Settle a failed generation. `draft` stays `None`.
    pub fn fail_generate(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.generating = false;
        true
    }

    /// Drop the pending draft without saving. No network call involved.
    pub fn discard_draft(&mut self) {
        self.draft = None;
    }

    /// Build the create payload for the pending draft, marking the save as
    /// in flight.
    ///
    /// Returns `None` when there is no draft to save — a guard, not an
    /// error. The draft itself is retained until [`Self::apply_saved`] so
    /// a failed save can be retried.
    pub fn begin_save(&mut self) -> Option<NewPost> {
        let draft = self.draft.as_ref()?;
        self.saving = true;
        Some(NewPost {
            title: draft.title.clone(),
            content: draft.content.clone(),
            topic: self.topic.clone(),
        })
    }

    /// The draft was persisted: clear it together with the topic input.
    pub fn apply_saved(&mut self) {
        self.draft = None;
        self.topic.clear();
        self.saving = false;
    }

    /// Settle a failed save, keeping the draft so the user can retry.
    pub fn fail_save(&mut self) {
        self.saving = false;
    }
}
