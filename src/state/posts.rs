//! Canonical post-list state.
//!
//! DESIGN
//! ======
//! `items` always reflects the last successful fetch, replaced wholesale —
//! mutations never patch it locally. Every write operation that succeeds
//! triggers one follow-up fetch, so after any successful mutation the list
//! matches server truth at the cost of an extra round trip.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::types::Post;

/// Canonical listing state: the client's view of `GET /api/posts`.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    /// Posts from the last successful fetch, in server order.
    pub items: Vec<Post>,
    /// True while a list fetch is in flight.
    pub loading: bool,
    /// Epoch of the most recently issued fetch. Responses carrying an older
    /// epoch are stale and must not be applied.
    pub epoch: u64,
}

impl PostsState {
    /// Start a list fetch. Returns the epoch the response must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.epoch
    }

    /// Apply a successful fetch, replacing the list wholesale.
    ///
    /// Returns `false` (leaving state untouched) when a newer fetch has
    /// been issued since `epoch`.
    pub fn apply_fetched(&mut self, epoch: u64, items: Vec<Post>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Settle a failed fetch. The list keeps its prior value.
    ///
    /// Returns `false` when a newer fetch owns the loading flag.
    pub fn fail_fetch(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.loading = false;
        true
    }
}
