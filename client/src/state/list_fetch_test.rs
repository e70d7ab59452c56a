use super::*;

fn records(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("record-{i}")).collect()
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_state_is_loading_and_empty() {
    let state = ListFetchState::<String>::default();
    assert_eq!(state.phase, FetchPhase::Loading);
    assert!(state.is_loading());
    assert!(state.items.is_empty());
    assert_eq!(state.error, None);
    assert!(!state.has_outstanding());
}

#[test]
fn successful_resolve_stores_whole_collection() {
    let mut state = ListFetchState::default();
    let token = state.begin();
    assert!(state.resolve(token, Ok(records(7))));
    assert_eq!(state.phase, FetchPhase::Ready);
    assert_eq!(state.items.len(), 7);
    assert_eq!(state.error, None);
    assert!(!state.has_outstanding());
}

#[test]
fn resolve_preserves_server_order() {
    let mut state = ListFetchState::default();
    let token = state.begin();
    state.resolve(token, Ok(vec!["b".to_owned(), "a".to_owned(), "c".to_owned()]));
    assert_eq!(state.items, vec!["b", "a", "c"]);
}

#[test]
fn failed_resolve_is_ready_with_empty_list() {
    let mut state = ListFetchState::<String>::default();
    let token = state.begin();
    assert!(state.resolve(token, Err(ApiError::Network("offline".to_owned()))));
    assert_eq!(state.phase, FetchPhase::Ready);
    assert!(state.items.is_empty());
    assert_eq!(state.error, Some(ApiError::Network("offline".to_owned())));
}

#[test]
fn non_2xx_and_decode_failures_also_render_empty() {
    for err in [ApiError::Status(500), ApiError::Decode("expected array".to_owned())] {
        let mut state = ListFetchState::<String>::default();
        let token = state.begin();
        state.resolve(token, Err(err.clone()));
        assert!(!state.is_loading());
        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(err));
    }
}

// =============================================================
// Request tokens
// =============================================================

#[test]
fn begin_issues_distinct_tokens() {
    let mut state = ListFetchState::<String>::default();
    let first = state.begin();
    let second = state.begin();
    assert_ne!(first, second);
}

#[test]
fn stale_token_is_ignored() {
    let mut state = ListFetchState::default();
    let stale = state.begin();
    let current = state.begin();

    assert!(!state.resolve(stale, Ok(records(3))));
    assert!(state.is_loading());
    assert!(state.items.is_empty());

    assert!(state.resolve(current, Ok(records(2))));
    assert_eq!(state.items.len(), 2);
}

#[test]
fn late_stale_response_does_not_overwrite_newer_data() {
    let mut state = ListFetchState::default();
    let stale = state.begin();
    let current = state.begin();
    state.resolve(current, Ok(records(4)));

    assert!(!state.resolve(stale, Err(ApiError::Status(500))));
    assert_eq!(state.items.len(), 4);
    assert_eq!(state.error, None);
}

#[test]
fn cancelled_fetch_never_populates() {
    let mut state = ListFetchState::default();
    let token = state.begin();
    state.cancel();
    assert!(!state.has_outstanding());
    assert!(!state.resolve(token, Ok(records(5))));
    assert!(state.items.is_empty());
}

#[test]
fn token_resolves_only_once() {
    let mut state = ListFetchState::default();
    let token = state.begin();
    assert!(state.resolve(token, Ok(records(1))));
    assert!(!state.resolve(token, Ok(records(9))));
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Retry
// =============================================================

#[test]
fn retry_after_failure_clears_error_and_reloads() {
    let mut state = ListFetchState::default();
    let first = state.begin();
    state.resolve(first, Err(ApiError::Status(503)));
    assert!(state.error.is_some());

    let retry = state.begin();
    assert!(state.is_loading());
    assert_eq!(state.error, None);

    state.resolve(retry, Ok(records(3)));
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.error, None);
}
