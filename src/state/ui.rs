//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so the tab
//! strip can evolve independently of the data it fronts. Switching modes
//! is a pure local state change: it neither fetches nor clears anything,
//! so returning to a previously visited tab shows whatever was last
//! loaded there.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which of the three exclusive views is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The canonical post listing.
    #[default]
    Posts,
    /// Relevance search over posts.
    Search,
    /// Draft generation from a topic.
    Generate,
}

impl ViewMode {
    /// Tab label shown in the strip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Posts => "All Posts",
            ViewMode::Search => "Search",
            ViewMode::Generate => "Generate",
        }
    }

    /// All modes in tab order.
    #[must_use]
    pub fn all() -> [ViewMode; 3] {
        [ViewMode::Posts, ViewMode::Search, ViewMode::Generate]
    }
}

/// UI state for the top-level view switch.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Active view mode; exactly one at any time by construction.
    pub view_mode: ViewMode,
}
