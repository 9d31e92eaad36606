//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`posts`, `search`, `generate`, etc.) so
//! individual components can depend on small focused models. Each struct
//! lives in an `RwSignal` provided from the root component, and every
//! mutation goes through a named transition method so the whole transition
//! table is unit-testable without a rendering environment.

pub mod editor;
pub mod generate;
pub mod notice;
pub mod posts;
pub mod search;
pub mod ui;
