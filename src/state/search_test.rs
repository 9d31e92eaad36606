use super::*;

fn scored_post(id: &str, score: f64) -> Post {
    Post {
        id: id.to_owned(),
        title: format!("Post {id}"),
        content: "body".to_owned(),
        topic: "tech".to_owned(),
        score: Some(score),
    }
}

// =============================================================
// Blank-query guard
// =============================================================

#[test]
fn begin_search_rejects_empty_query() {
    let mut state = SearchState::default();
    assert!(state.begin_search().is_none());
    assert!(!state.loading);
    assert_eq!(state.epoch, 0);
}

#[test]
fn begin_search_rejects_whitespace_only_query() {
    let mut state = SearchState {
        query: "   \t ".to_owned(),
        ..SearchState::default()
    };
    assert!(state.begin_search().is_none());
    assert!(!state.loading);
}

#[test]
fn blank_query_guard_leaves_results_unchanged() {
    let mut state = SearchState {
        query: String::new(),
        results: vec![scored_post("kept", 0.9)],
        ..SearchState::default()
    };
    assert!(state.begin_search().is_none());
    assert_eq!(state.results.len(), 1);
}

// =============================================================
// Search lifecycle
// =============================================================

#[test]
fn begin_search_sets_loading_for_real_query() {
    let mut state = SearchState {
        query: "rust".to_owned(),
        ..SearchState::default()
    };
    let epoch = state.begin_search();
    assert!(epoch.is_some());
    assert!(state.loading);
}

#[test]
fn apply_results_replaces_results_and_clears_loading() {
    let mut state = SearchState {
        query: "rust".to_owned(),
        results: vec![scored_post("old", 0.1)],
        ..SearchState::default()
    };
    let epoch = state.begin_search().unwrap();
    assert!(state.apply_results(epoch, vec![scored_post("a", 0.9), scored_post("b", 0.5)]));
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.results[0].score, Some(0.9));
    assert!(!state.loading);
}

#[test]
fn fail_search_retains_prior_results() {
    let mut state = SearchState {
        query: "rust".to_owned(),
        results: vec![scored_post("prior", 0.7)],
        ..SearchState::default()
    };
    let epoch = state.begin_search().unwrap();
    assert!(state.fail_search(epoch));
    assert_eq!(state.results[0].id, "prior");
    assert!(!state.loading);
}

// =============================================================
// Overlapping searches
// =============================================================

#[test]
fn stale_search_response_is_discarded() {
    let mut state = SearchState {
        query: "first".to_owned(),
        ..SearchState::default()
    };
    let stale = state.begin_search().unwrap();
    state.query = "second".to_owned();
    let fresh = state.begin_search().unwrap();

    // The slower first response arrives after the second was issued.
    assert!(!state.apply_results(stale, vec![scored_post("stale", 0.2)]));
    assert!(state.results.is_empty());
    assert!(state.loading);

    assert!(state.apply_results(fresh, vec![scored_post("fresh", 0.8)]));
    assert_eq!(state.results[0].id, "fresh");
    assert!(!state.loading);
}

#[test]
fn stale_search_failure_does_not_settle_newer_search() {
    let mut state = SearchState {
        query: "first".to_owned(),
        ..SearchState::default()
    };
    let stale = state.begin_search().unwrap();
    let _fresh = state.begin_search().unwrap();
    assert!(!state.fail_search(stale));
    assert!(state.loading);
}
