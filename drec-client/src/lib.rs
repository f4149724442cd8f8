//! # DreamRecords Client Session Library
//!
//! Client-side core of the label dashboard, separated from any rendering:
//! - `draft` - the in-progress release being authored (ordered track list)
//! - `wizard` - the multi-step create-release state machine
//! - `session` - persisted session state (filter + draft) with injected storage
//! - `list` - releases list view state with request sequencing
//! - `api` - HTTP client for the resource API
//!
//! State transitions are pure and synchronous; persistence and network I/O
//! are explicit side effects owned by the caller.

pub mod api;
pub mod draft;
pub mod list;
pub mod session;
pub mod wizard;

pub use api::ApiClient;
pub use draft::{ReleaseDraft, TrackDraft};
pub use session::{JsonFileStore, SessionController, SessionState, SessionStore};
pub use wizard::{AdvanceOutcome, SubmitAction, Wizard, WizardStep};
