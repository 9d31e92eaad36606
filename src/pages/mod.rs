//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The manager is a single-screen app; `home` owns route-scoped
//! orchestration (mount fetch, tab switching, dialog hosting) and
//! delegates rendering details to `components`.

pub mod home;
