//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the post manager chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers. Network
//! dispatch goes through `crate::net::ops`; no component talks HTTP
//! directly.

pub mod edit_dialog;
pub mod generate_panel;
pub mod notice_host;
pub mod post_card;
pub mod posts_panel;
pub mod search_panel;
pub mod toolbar;
