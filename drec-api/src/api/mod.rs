//! HTTP API handlers for drec-api

pub mod error;
pub mod health;
pub mod meta;
pub mod names;
pub mod releases;

pub use error::ApiError;
pub use health::health_routes;
pub use meta::{db_check, not_found, ping, service_banner};
pub use names::{create_artist, create_label, list_artists, list_labels};
pub use releases::{
    create_release, delete_release, get_release, list_releases, update_release,
};
