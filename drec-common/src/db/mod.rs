//! Database access layer: pool initialization and schema migrations

mod init;
mod migrations;

pub use init::init_database;
pub use migrations::{run_migrations, CURRENT_SCHEMA_VERSION};
