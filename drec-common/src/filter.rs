//! Release list filter state
//!
//! A `ReleaseFilter` is the client-owned query state for the releases list:
//! free-text search, status filter, sort order and pagination window. Any
//! change to a non-page field resets pagination back to page 1.

use serde::{Deserialize, Serialize};

/// Default page size for the releases list
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size accepted by the list endpoints
pub const MAX_PAGE_SIZE: i64 = 100;

/// Release review status filter.
///
/// The status column is free text in storage, so unknown values are carried
/// through verbatim and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReleaseStatus {
    /// No status filtering
    Any,
    Approved,
    InReview,
    /// Any other status string, matched exactly
    Custom(String),
}

impl ReleaseStatus {
    pub fn is_any(&self) -> bool {
        matches!(self, ReleaseStatus::Any)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReleaseStatus::Any => "Any",
            ReleaseStatus::Approved => "Approved",
            ReleaseStatus::InReview => "In Review",
            ReleaseStatus::Custom(s) => s,
        }
    }
}

impl Default for ReleaseStatus {
    fn default() -> Self {
        ReleaseStatus::Any
    }
}

impl From<String> for ReleaseStatus {
    fn from(s: String) -> Self {
        match s.trim() {
            "" | "Any" => ReleaseStatus::Any,
            "Approved" => ReleaseStatus::Approved,
            "In Review" => ReleaseStatus::InReview,
            other => ReleaseStatus::Custom(other.to_string()),
        }
    }
}

impl From<ReleaseStatus> for String {
    fn from(s: ReleaseStatus) -> Self {
        s.as_str().to_string()
    }
}

/// Sort order for the releases list.
///
/// Unrecognized sort strings fall back to `Newest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    /// Newest first by creation time (default)
    Newest,
    /// Oldest first by creation time
    Oldest,
    /// Lexicographic by title, ascending
    TitleAz,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
            SortOrder::TitleAz => "Title A-Z",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

impl From<String> for SortOrder {
    fn from(s: String) -> Self {
        match s.trim() {
            "Oldest" => SortOrder::Oldest,
            "Title A-Z" => SortOrder::TitleAz,
            _ => SortOrder::Newest,
        }
    }
}

impl From<SortOrder> for String {
    fn from(s: SortOrder) -> Self {
        s.as_str().to_string()
    }
}

/// Filter + sort + page request for the releases list.
///
/// Invariant: `page >= 1` and `page_size` in `[1, MAX_PAGE_SIZE]`, so the
/// computed offset is always non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseFilter {
    /// Free-text query, matched case-insensitively against title OR artist
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub status: ReleaseStatus,
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ReleaseFilter {
    fn default() -> Self {
        Self {
            q: String::new(),
            status: ReleaseStatus::Any,
            sort: SortOrder::Newest,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ReleaseFilter {
    /// SQL LIMIT/OFFSET offset for the current page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Sanitize page and page_size back into their valid ranges.
    /// Applied when a filter arrives from an untrusted source (query
    /// parameters, persisted session file).
    pub fn clamp(&mut self) {
        self.page = self.page.max(1);
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
    }

    /// Change the free-text query. Resets to page 1.
    pub fn set_query(&mut self, q: impl Into<String>) {
        self.q = q.into();
        self.page = 1;
    }

    /// Change the status filter. Resets to page 1.
    pub fn set_status(&mut self, status: ReleaseStatus) {
        self.status = status;
        self.page = 1;
    }

    /// Change the sort order. Resets to page 1.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// Change the page size. Resets to page 1.
    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self.page = 1;
    }

    /// Move to a specific page (clamped to >= 1)
    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = (self.page - 1).max(1);
    }
}
