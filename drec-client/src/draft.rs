//! Release draft: the in-progress release authored through the wizard
//!
//! A single mutable draft exists per session, persisted continuously. The
//! track list is ordered (order = array index) and never empty: deleting
//! the last track re-seeds one default entry.

use serde::{Deserialize, Serialize};

/// One track row in the draft. Duration is "mm:ss" display text; it is
/// converted to seconds only when the create payload is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackDraft {
    pub title: String,
    pub artist: String,
    pub duration: String,
}

impl Default for TrackDraft {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            artist: "Primary Artist".to_string(),
            duration: "00:00".to_string(),
        }
    }
}

/// The full create-release form model.
///
/// Unknown or missing fields deserialize to their defaults, so a persisted
/// draft from an older session never fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDraft {
    pub title: String,
    pub artist: String,
    pub date: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub label: String,
    pub genre: String,
    pub subgenre: String,
    pub production_year: String,
    pub original_release_date: String,
    pub version: String,
    pub featured_artist: String,
    pub remixer: String,
    pub composer: String,
    pub lyrics: String,
    pub isrc: String,
    pub upc: String,
    pub language: String,
    pub lyricist: String,
    pub publisher: String,
    pub p_line: String,
    pub c_line: String,
    pub tracks: Vec<TrackDraft>,
}

impl Default for ReleaseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            date: String::new(),
            release_type: "Single".to_string(),
            label: String::new(),
            genre: String::new(),
            subgenre: String::new(),
            production_year: String::new(),
            original_release_date: String::new(),
            version: String::new(),
            featured_artist: String::new(),
            remixer: String::new(),
            composer: String::new(),
            lyrics: "Clean".to_string(),
            isrc: String::new(),
            upc: String::new(),
            language: String::new(),
            lyricist: String::new(),
            publisher: String::new(),
            p_line: String::new(),
            c_line: String::new(),
            tracks: vec![TrackDraft {
                duration: "03:20".to_string(),
                ..TrackDraft::default()
            }],
        }
    }
}

impl ReleaseDraft {
    /// Append a default track. Returns the new track's index.
    pub fn add_track(&mut self) -> usize {
        self.tracks.push(TrackDraft::default());
        self.tracks.len() - 1
    }

    /// Delete the track at `index`. If that empties the list, one default
    /// track is re-seeded so the list is never empty. Returns false for an
    /// out-of-range index.
    pub fn delete_track(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            return false;
        }
        self.tracks.remove(index);
        if self.tracks.is_empty() {
            self.tracks.push(TrackDraft::default());
        }
        true
    }

    /// Relocate the track at `from` to position `to` (single-element move,
    /// not a swap). Returns false if either index is out of range.
    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        let len = self.tracks.len();
        if from >= len || to >= len {
            return false;
        }
        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
        true
    }

    /// Mutable access to a track for field edits
    pub fn track_mut(&mut self, index: usize) -> Option<&mut TrackDraft> {
        self.tracks.get_mut(index)
    }
}
