//! # DreamRecords Common Library
//!
//! Shared code for the DreamRecords label dashboard:
//! - Error taxonomy and Result alias
//! - API request/response types
//! - Release list filter (query/status/sort/pagination)
//! - Duration text parsing ("mm:ss")
//! - Database initialization and schema migrations
//! - Configuration and data directory resolution

pub mod config;
pub mod db;
pub mod duration;
pub mod error;
pub mod filter;
pub mod types;

pub use error::{Error, Result};
pub use filter::{ReleaseFilter, ReleaseStatus, SortOrder};
