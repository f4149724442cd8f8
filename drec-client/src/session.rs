//! Persisted session state: releases filter + release draft
//!
//! One mutable session per client, written through on every mutation. The
//! store is injected rather than ambient so state transitions stay testable
//! and the persistence policy lives in one place. Corrupt persisted content
//! is discarded and defaults re-applied; it never errors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use drec_common::{ReleaseFilter, ReleaseStatus, Result, SortOrder};

use crate::draft::ReleaseDraft;

/// Everything the client session persists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub filter: ReleaseFilter,
    pub draft: ReleaseDraft,
}

/// Injected persistence for the session state
pub trait SessionStore {
    /// Load the persisted session; corrupt or missing content yields defaults
    fn load(&self) -> SessionState;

    /// Persist the whole session (write-through, no batching)
    fn save(&self, state: &SessionState) -> Result<()>;
}

/// JSON file store, the localStorage analog.
///
/// Multiple stores pointed at the same path are last-write-wins with no
/// locking; concurrent sessions can silently clobber each other.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> SessionState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return SessionState::default(),
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "Ignoring corrupt session file {}: {}",
                    self.path.display(),
                    e
                );
                SessionState::default()
            }
        }
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(state)
            .map_err(|e| drec_common::Error::Internal(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Owns the session state and writes it through the injected store after
/// every mutation.
pub struct SessionController<S: SessionStore> {
    state: SessionState,
    store: S,
}

impl<S: SessionStore> SessionController<S> {
    /// Load (or default) the session from the store
    pub fn new(store: S) -> Self {
        let state = store.load();
        Self { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn filter(&self) -> &ReleaseFilter {
        &self.state.filter
    }

    pub fn draft(&self) -> &ReleaseDraft {
        &self.state.draft
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    // --- filter mutations (non-page changes reset to page 1) ---

    pub fn set_query(&mut self, q: impl Into<String>) -> Result<()> {
        self.state.filter.set_query(q);
        self.persist()
    }

    pub fn set_status(&mut self, status: ReleaseStatus) -> Result<()> {
        self.state.filter.set_status(status);
        self.persist()
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> Result<()> {
        self.state.filter.set_sort(sort);
        self.persist()
    }

    pub fn set_page_size(&mut self, page_size: i64) -> Result<()> {
        self.state.filter.set_page_size(page_size);
        self.persist()
    }

    pub fn next_page(&mut self) -> Result<()> {
        self.state.filter.next_page();
        self.persist()
    }

    pub fn prev_page(&mut self) -> Result<()> {
        self.state.filter.prev_page();
        self.persist()
    }

    // --- draft mutations ---

    /// Apply an arbitrary draft edit and write it through
    pub fn with_draft(&mut self, edit: impl FnOnce(&mut ReleaseDraft)) -> Result<()> {
        edit(&mut self.state.draft);
        self.persist()
    }

    pub fn add_track(&mut self) -> Result<usize> {
        let index = self.state.draft.add_track();
        self.persist()?;
        Ok(index)
    }

    pub fn delete_track(&mut self, index: usize) -> Result<bool> {
        let deleted = self.state.draft.delete_track(index);
        if deleted {
            self.persist()?;
        }
        Ok(deleted)
    }

    pub fn move_track(&mut self, from: usize, to: usize) -> Result<bool> {
        let moved = self.state.draft.move_track(from, to);
        if moved {
            self.persist()?;
        }
        Ok(moved)
    }

    /// Fill in title/artist from the identity prompt and persist
    pub fn provide_identity(&mut self, title: &str, artist: &str) -> Result<()> {
        crate::wizard::provide_identity(&mut self.state.draft, title, artist);
        self.persist()
    }
}
