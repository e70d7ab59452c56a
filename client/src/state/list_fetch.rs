//! Fetch-on-mount state shared by the Skills, Projects and Experience pages.
//!
//! DESIGN
//! ======
//! A page mount issues one read. Every read is keyed by a [`RequestToken`];
//! only the outstanding token may resolve the state, so a response that
//! arrives after a retry, remount or unmount is dropped instead of clobbering
//! newer data.
//!
//! ERROR HANDLING
//! ==============
//! A failed read still lands in `Ready` with an empty collection. The error
//! is kept alongside so the page can offer a retry without ever showing a
//! half-populated list.

#[cfg(test)]
#[path = "list_fetch_test.rs"]
mod list_fetch_test;

use crate::net::api::ApiError;

/// Identifies one issued read. Monotonic per state instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Lifecycle of a list page's collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    #[default]
    Loading,
    Ready,
}

/// Collection snapshot plus the bookkeeping for its in-flight read.
#[derive(Clone, Debug)]
pub struct ListFetchState<T> {
    pub items: Vec<T>,
    pub phase: FetchPhase,
    pub error: Option<ApiError>,
    next_seq: u64,
    outstanding: Option<RequestToken>,
}

impl<T> Default for ListFetchState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), phase: FetchPhase::Loading, error: None, next_seq: 0, outstanding: None }
    }
}

impl<T> ListFetchState<T> {
    /// Start a new read, superseding any outstanding one.
    pub fn begin(&mut self) -> RequestToken {
        self.next_seq += 1;
        let token = RequestToken(self.next_seq);
        self.outstanding = Some(token);
        self.phase = FetchPhase::Loading;
        self.items.clear();
        self.error = None;
        token
    }

    /// Apply a read outcome. Returns `false` when `token` is stale.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<Vec<T>, ApiError>) -> bool {
        if self.outstanding != Some(token) {
            return false;
        }
        self.outstanding = None;
        self.phase = FetchPhase::Ready;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
        true
    }

    /// Drop the outstanding read so its response is ignored.
    pub fn cancel(&mut self) {
        self.outstanding = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    #[must_use]
    pub fn has_outstanding(&self) -> bool {
        self.outstanding.is_some()
    }
}
