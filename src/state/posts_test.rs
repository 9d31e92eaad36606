use super::*;

fn make_post(id: &str) -> Post {
    Post {
        id: id.to_owned(),
        title: format!("Post {id}"),
        content: "body".to_owned(),
        topic: "tech".to_owned(),
        score: None,
    }
}

// =============================================================
// PostsState defaults
// =============================================================

#[test]
fn posts_state_default_is_empty_and_idle() {
    let state = PostsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_advances_epoch() {
    let mut state = PostsState::default();
    let first = state.begin_fetch();
    assert!(state.loading);
    let second = state.begin_fetch();
    assert!(second > first);
}

#[test]
fn apply_fetched_replaces_items_wholesale() {
    let mut state = PostsState::default();
    state.items = vec![make_post("old")];
    let epoch = state.begin_fetch();
    assert!(state.apply_fetched(epoch, vec![make_post("a"), make_post("b")]));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "a");
    assert!(!state.loading);
}

#[test]
fn apply_fetched_accepts_empty_list() {
    let mut state = PostsState::default();
    state.items = vec![make_post("old")];
    let epoch = state.begin_fetch();
    assert!(state.apply_fetched(epoch, Vec::new()));
    assert!(state.items.is_empty());
}

#[test]
fn fail_fetch_keeps_prior_items() {
    let mut state = PostsState::default();
    state.items = vec![make_post("keep")];
    let epoch = state.begin_fetch();
    assert!(state.fail_fetch(epoch));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "keep");
    assert!(!state.loading);
}

// =============================================================
// Epoch guard
// =============================================================

#[test]
fn stale_fetch_response_is_discarded() {
    let mut state = PostsState::default();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();
    assert!(!state.apply_fetched(stale, vec![make_post("stale")]));
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.apply_fetched(fresh, vec![make_post("fresh")]));
    assert_eq!(state.items[0].id, "fresh");
    assert!(!state.loading);
}

#[test]
fn stale_fetch_failure_does_not_clear_loading() {
    let mut state = PostsState::default();
    let stale = state.begin_fetch();
    let _fresh = state.begin_fetch();
    assert!(!state.fail_fetch(stale));
    assert!(state.loading, "a superseded failure must not settle the newer fetch");
}
