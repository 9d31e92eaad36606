//! Card component for a single post in the listing and search grids.
//!
//! DESIGN
//! ======
//! One card serves both views; the search grid turns on the score line via
//! a prop instead of duplicating the markup.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::net::types::Post;

/// Meta caption under the title: topic, plus the relevance score when the
/// card fronts a search result.
fn meta_line(topic: &str, score: Option<f64>, show_score: bool) -> String {
    match (show_score, score) {
        (true, Some(score)) => format!("Topic: {topic} | Score: {score:.2}"),
        _ => format!("Topic: {topic}"),
    }
}

/// A post card with edit and delete actions.
#[component]
pub fn PostCard(
    post: Post,
    #[prop(optional)] show_score: bool,
    on_edit: Callback<Post>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let meta = meta_line(&post.topic, post.score, show_score);
    let edit_post = post.clone();
    let delete_id = post.id.clone();

    view! {
        <article class="post-card">
            <h3 class="post-card__title">{post.title.clone()}</h3>
            <span class="post-card__meta">{meta}</span>
            <p class="post-card__content">{post.content.clone()}</p>
            <div class="post-card__actions">
                <button
                    class="btn post-card__edit"
                    title="Edit post"
                    on:click=move |_| on_edit.run(edit_post.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--danger post-card__delete"
                    title="Delete post"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
