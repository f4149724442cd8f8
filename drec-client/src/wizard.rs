//! Create-release wizard state machine
//!
//! Four strictly linear steps: AlbumInfo → TracksInfo → ReleaseDate →
//! Overview. Advancing out of AlbumInfo is gated on the required-field set;
//! backward transitions are always unconditional. Advancing from Overview
//! does not change step - it yields a submission instead.

use drec_common::duration::parse_duration_text;
use drec_common::types::{NewRelease, NewTrack};

use crate::draft::ReleaseDraft;

/// Title applied when submitting a draft with no title
pub const DEFAULT_TITLE: &str = "Untitled Release";

/// Artist applied when submitting a draft with no artist
pub const DEFAULT_ARTIST: &str = "Unknown Artist";

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    AlbumInfo,
    TracksInfo,
    ReleaseDate,
    Overview,
}

impl WizardStep {
    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::AlbumInfo => Some(WizardStep::TracksInfo),
            WizardStep::TracksInfo => Some(WizardStep::ReleaseDate),
            WizardStep::ReleaseDate => Some(WizardStep::Overview),
            WizardStep::Overview => None,
        }
    }

    fn prev(self) -> Option<WizardStep> {
        match self {
            WizardStep::AlbumInfo => None,
            WizardStep::TracksInfo => Some(WizardStep::AlbumInfo),
            WizardStep::ReleaseDate => Some(WizardStep::TracksInfo),
            WizardStep::Overview => Some(WizardStep::ReleaseDate),
        }
    }
}

/// One field-level validation failure, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Result of an advance attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Moved forward to the contained step
    Moved(WizardStep),
    /// Blocked by validation; all failures reported in one batch
    Blocked(Vec<FieldError>),
    /// Advance from Overview: submit instead of moving
    Submit,
}

/// What submission needs next
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Payload is ready to POST
    Ready(NewRelease),
    /// Title or artist missing; collect them via the blocking prompt first
    NeedsIdentity,
}

/// The wizard's step cursor. The draft itself lives in the session.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::AlbumInfo
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Attempt to advance. Leaving AlbumInfo re-validates the required
    /// fields; any failure blocks the transition and reports every missing
    /// field at once.
    pub fn advance(&mut self, draft: &ReleaseDraft) -> AdvanceOutcome {
        if self.step == WizardStep::AlbumInfo {
            let errors = validate_album_info(draft);
            if !errors.is_empty() {
                return AdvanceOutcome::Blocked(errors);
            }
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                AdvanceOutcome::Moved(next)
            }
            None => AdvanceOutcome::Submit,
        }
    }

    /// Go back one step. Always unconditional; returns false at AlbumInfo.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }
}

/// Required-field gate for the AlbumInfo step
pub fn validate_album_info(draft: &ReleaseDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut check = |value: &str, field: &'static str, message: &'static str| {
        if value.trim().is_empty() {
            errors.push(FieldError { field, message });
        }
    };

    check(&draft.title, "title", "Release Title is required");
    check(&draft.genre, "genre", "Genre is required");
    check(
        &draft.production_year,
        "production_year",
        "Production Year is required",
    );
    check(
        &draft.original_release_date,
        "original_release_date",
        "Original release date is required",
    );
    check(&draft.p_line, "p_line", "P Line is required");
    check(&draft.c_line, "c_line", "C Line is required");
    errors
}

/// Decide whether the draft can be submitted as-is or the identity prompt
/// must run first.
pub fn prepare_submission(draft: &ReleaseDraft) -> SubmitAction {
    if draft.title.trim().is_empty() || draft.artist.trim().is_empty() {
        SubmitAction::NeedsIdentity
    } else {
        SubmitAction::Ready(build_create_payload(draft))
    }
}

/// Fill in title/artist collected by the identity prompt. Blank prompt
/// answers fall back to the placeholder defaults.
pub fn provide_identity(draft: &mut ReleaseDraft, title: &str, artist: &str) {
    let title = title.trim();
    let artist = artist.trim();
    draft.title = if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    };
    draft.artist = if artist.is_empty() {
        DEFAULT_ARTIST.to_string()
    } else {
        artist.to_string()
    };
}

/// Serialize the draft into a create request. Duration text converts to
/// seconds with the fail-closed-to-zero policy; track order is 1-based
/// array position.
pub fn build_create_payload(draft: &ReleaseDraft) -> NewRelease {
    let title = draft.title.trim();
    let artist = draft.artist.trim();

    NewRelease {
        title: if title.is_empty() { DEFAULT_TITLE } else { title }.to_string(),
        artist: if artist.is_empty() { DEFAULT_ARTIST } else { artist }.to_string(),
        status: Some("In Review".to_string()),
        tracks: draft
            .tracks
            .iter()
            .enumerate()
            .map(|(i, t)| NewTrack {
                title: Some(t.title.clone()),
                artist: Some(t.artist.clone()),
                duration_sec: parse_duration_text(&t.duration),
                order_index: Some((i + 1) as i64),
            })
            .collect(),
    }
}
