//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON shapes the posts API exchanges so serde stays
//! the single source of truth for the contract. Mutation responses are not
//! modeled: the client only cares about success/failure and resynchronizes
//! via a follow-up list fetch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A blog post as returned by `/api/posts` and `/api/posts/search/{query}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier (opaque string), immutable for the post's lifetime.
    pub id: String,
    /// Post headline.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Free-form topic label.
    pub topic: String,
    /// Relevance score; present only on search results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Request body for `POST /api/posts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub topic: String,
}

/// Request body for `POST /api/posts/update`.
///
/// Edits are full replaces; the server re-derives everything else from
/// these four fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdatePost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub topic: String,
}

/// Request body for `POST /api/generate`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub topic: String,
}

/// A generated draft returned by `POST /api/generate`.
///
/// Not yet a [`Post`]: it has no id until the user accepts it and the
/// client saves it through the regular create endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDraft {
    pub title: String,
    pub content: String,
}
