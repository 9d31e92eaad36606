//! Transient user-facing notices.
//!
//! DESIGN
//! ======
//! One error slot and one success slot, each independently settable by any
//! operation and auto-dismissed after [`NOTICE_DISMISS_MS`]. Setting one
//! does not clear the other. Each slot carries a sequence number so an
//! expired timer for an old message cannot dismiss a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays visible before auto-dismissal, in milliseconds.
pub const NOTICE_DISMISS_MS: u64 = 6_000;

/// Failure notice for the list fetch.
pub const FETCH_POSTS_FAILED: &str = "Failed to fetch posts";
/// Failure notice for dialog create/update saves.
pub const SAVE_POST_FAILED: &str = "Failed to save post";
/// Failure notice for deletion.
pub const DELETE_POST_FAILED: &str = "Failed to delete post";
/// Failure notice for search.
pub const SEARCH_FAILED: &str = "Search failed";
/// Failure notice for draft generation.
pub const GENERATE_FAILED: &str = "Failed to generate post";
/// Failure notice for saving a generated draft.
pub const SAVE_GENERATED_FAILED: &str = "Failed to save generated post";

/// Success notice after creating a post.
pub const POST_CREATED: &str = "Post created successfully";
/// Success notice after updating a post.
pub const POST_UPDATED: &str = "Post updated successfully";
/// Success notice after deleting a post.
pub const POST_DELETED: &str = "Post deleted successfully";
/// Success notice after persisting a generated draft.
pub const GENERATED_SAVED: &str = "Generated post saved successfully";

/// Current error and success notices with their dismissal sequence numbers.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    /// Visible error message, if any.
    pub error: Option<String>,
    /// Visible success message, if any.
    pub success: Option<String>,
    /// Sequence of the current error; bumped on every show.
    pub error_seq: u64,
    /// Sequence of the current success; bumped on every show.
    pub success_seq: u64,
}

impl NoticeState {
    /// Show an error notice, replacing any prior one. Returns the sequence
    /// number the auto-dismiss timer must present.
    pub fn show_error(&mut self, message: &str) -> u64 {
        self.error = Some(message.to_owned());
        self.error_seq += 1;
        self.error_seq
    }

    /// Show a success notice, replacing any prior one. Returns the
    /// sequence number the auto-dismiss timer must present.
    pub fn show_success(&mut self, message: &str) -> u64 {
        self.success = Some(message.to_owned());
        self.success_seq += 1;
        self.success_seq
    }

    /// Explicitly dismiss the error notice.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Explicitly dismiss the success notice.
    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    /// Auto-dismiss the error notice if it is still the one the timer was
    /// started for. Returns whether anything was dismissed.
    pub fn expire_error(&mut self, seq: u64) -> bool {
        if seq != self.error_seq || self.error.is_none() {
            return false;
        }
        self.error = None;
        true
    }

    /// Auto-dismiss the success notice if it is still the one the timer
    /// was started for. Returns whether anything was dismissed.
    pub fn expire_success(&mut self, seq: u64) -> bool {
        if seq != self.success_seq || self.success.is_none() {
            return false;
        }
        self.success = None;
        true
    }
}
