//! REST API helpers for the posts backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both surface as `Err(String)`.
//! Callers collapse any error into a fixed per-operation notice; the detail
//! string exists for debugging, not for display logic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::GenerateRequest;
use super::types::{GeneratedDraft, NewPost, Post, UpdatePost};

#[cfg(any(test, feature = "hydrate"))]
fn delete_post_endpoint(post_id: &str) -> String {
    format!("/api/posts/delete/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_posts_endpoint(query: &str) -> String {
    format!("/api/posts/search/{}", urlencoding::encode(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Fetch the full post list from `GET /api/posts`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_posts() -> Result<Vec<Post>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/posts")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post list", resp.status()));
        }
        resp.json::<Vec<Post>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a post via `POST /api/posts`.
///
/// The response body is ignored; callers refetch the list on success.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn create_post(post: &NewPost) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/posts")
            .json(post)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post create", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post;
        Err("not available on server".to_owned())
    }
}

/// Replace an existing post via `POST /api/posts/update`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn update_post(post: &UpdatePost) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/posts/update")
            .json(post)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post;
        Err("not available on server".to_owned())
    }
}

/// Delete a post via `GET /api/posts/delete/{id}`.
///
/// The backend exposes deletion as a GET; this mirrors that contract
/// rather than inventing a DELETE route the server does not serve.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn delete_post(post_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = delete_post_endpoint(post_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err("not available on server".to_owned())
    }
}

/// Search posts by relevance via `GET /api/posts/search/{query}`.
///
/// The query is URL-escaped into the path segment. Results carry a
/// `score` field the plain listing lacks.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn search_posts(query: &str) -> Result<Vec<Post>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_posts_endpoint(query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post search", resp.status()));
        }
        resp.json::<Vec<Post>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Generate a draft post for a topic via `POST /api/generate`.
///
/// The draft is not persisted server-side; saving it goes through
/// [`create_post`] once the user accepts it.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn generate_draft(topic: &str) -> Result<GeneratedDraft, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = GenerateRequest {
            topic: topic.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/generate")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("draft generation", resp.status()));
        }
        resp.json::<GeneratedDraft>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = topic;
        Err("not available on server".to_owned())
    }
}
