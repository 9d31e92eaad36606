use super::*;

fn make_draft() -> GeneratedDraft {
    GeneratedDraft {
        title: "A".to_owned(),
        content: "B".to_owned(),
    }
}

// =============================================================
// Blank-topic guard
// =============================================================

#[test]
fn begin_generate_rejects_empty_topic() {
    let mut state = GenerateState::default();
    assert!(state.begin_generate().is_none());
    assert!(!state.generating);
    assert!(state.draft.is_none());
}

#[test]
fn begin_generate_rejects_whitespace_only_topic() {
    let mut state = GenerateState {
        topic: " \n  ".to_owned(),
        ..GenerateState::default()
    };
    assert!(state.begin_generate().is_none());
    assert!(!state.generating);
}

// =============================================================
// Generation lifecycle
// =============================================================

#[test]
fn begin_generate_clears_previous_draft() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        draft: Some(make_draft()),
        ..GenerateState::default()
    };
    let epoch = state.begin_generate();
    assert!(epoch.is_some());
    assert!(state.draft.is_none());
    assert!(state.generating);
}

#[test]
fn apply_draft_populates_draft_and_clears_flag() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        ..GenerateState::default()
    };
    let epoch = state.begin_generate().unwrap();
    assert!(state.apply_draft(epoch, make_draft()));
    assert_eq!(state.draft, Some(make_draft()));
    assert!(!state.generating);
}

#[test]
fn fail_generate_leaves_draft_none() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        ..GenerateState::default()
    };
    let epoch = state.begin_generate().unwrap();
    assert!(state.fail_generate(epoch));
    assert!(state.draft.is_none());
    assert!(!state.generating);
}

#[test]
fn stale_generation_response_is_discarded() {
    let mut state = GenerateState {
        topic: "first".to_owned(),
        ..GenerateState::default()
    };
    let stale = state.begin_generate().unwrap();
    state.topic = "second".to_owned();
    let fresh = state.begin_generate().unwrap();

    let stale_draft = GeneratedDraft {
        title: "stale".to_owned(),
        content: "stale".to_owned(),
    };
    assert!(!state.apply_draft(stale, stale_draft));
    assert!(state.draft.is_none());
    assert!(state.generating);

    assert!(state.apply_draft(fresh, make_draft()));
    assert_eq!(state.draft.as_ref().unwrap().title, "A");
}

// =============================================================
// Save / discard
// =============================================================

#[test]
fn begin_save_without_draft_is_noop() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        ..GenerateState::default()
    };
    assert!(state.begin_save().is_none());
    assert!(!state.saving);
}

#[test]
fn begin_save_builds_payload_with_originating_topic() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        draft: Some(make_draft()),
        ..GenerateState::default()
    };
    let payload = state.begin_save().unwrap();
    assert_eq!(
        payload,
        NewPost {
            title: "A".to_owned(),
            content: "B".to_owned(),
            topic: "llms".to_owned(),
        }
    );
    assert!(state.saving);
    assert!(state.draft.is_some(), "draft is retained until the save succeeds");
}

#[test]
fn apply_saved_clears_draft_and_topic() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        draft: Some(make_draft()),
        saving: true,
        ..GenerateState::default()
    };
    state.apply_saved();
    assert!(state.draft.is_none());
    assert!(state.topic.is_empty());
    assert!(!state.saving);
}

#[test]
fn fail_save_retains_draft_for_retry() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        draft: Some(make_draft()),
        saving: true,
        ..GenerateState::default()
    };
    state.fail_save();
    assert!(state.draft.is_some());
    assert_eq!(state.topic, "llms");
    assert!(!state.saving);
}

#[test]
fn discard_draft_drops_draft_only() {
    let mut state = GenerateState {
        topic: "llms".to_owned(),
        draft: Some(make_draft()),
        ..GenerateState::default()
    };
    state.discard_draft();
    assert!(state.draft.is_none());
    assert_eq!(state.topic, "llms");
}
