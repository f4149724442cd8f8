//! Releases list view state with request sequencing
//!
//! In-flight list fetches are not cancelled when the filter changes, so a
//! slow stale response can arrive after a fresher one. Each fetch takes a
//! monotonically increasing token; a response is applied only if its token
//! is still the latest issued. The item list is replaced wholesale on every
//! applied response, never patched in place.

use drec_common::types::{ReleaseList, ReleaseRecord};
use drec_common::{ReleaseFilter, Result};

/// Token identifying one issued list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// View-model state for the releases list
#[derive(Debug, Default)]
pub struct ReleasesView {
    issued: u64,
    current: Option<ReleaseList>,
}

impl ReleasesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a fetch about to start. Any previously issued
    /// token becomes stale.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Apply a fetch result. Stale tokens are discarded (returns false).
    /// A failed fetch degrades to an empty list for the requested window
    /// rather than keeping data from an older filter on screen.
    pub fn apply(
        &mut self,
        token: FetchToken,
        result: Result<ReleaseList>,
        filter: &ReleaseFilter,
    ) -> bool {
        if token.0 != self.issued {
            return false;
        }

        self.current = Some(match result {
            Ok(list) => list,
            Err(_) => ReleaseList::empty(filter.page, filter.page_size),
        });
        true
    }

    pub fn items(&self) -> &[ReleaseRecord] {
        self.current.as_ref().map(|l| l.items.as_slice()).unwrap_or(&[])
    }

    /// Whether the current data is the non-authoritative sample fallback
    pub fn is_mock(&self) -> bool {
        self.current.as_ref().map(|l| l.mock).unwrap_or(false)
    }

    pub fn total(&self) -> i64 {
        self.current.as_ref().map(|l| l.total).unwrap_or(0)
    }

    /// Whether a further page exists, judged from the reported total
    /// rather than the full-page heuristic.
    pub fn has_next_page(&self) -> bool {
        match &self.current {
            Some(list) => list.page * list.limit < list.total,
            None => false,
        }
    }

    pub fn has_prev_page(&self) -> bool {
        self.current.as_ref().map(|l| l.page > 1).unwrap_or(false)
    }
}
