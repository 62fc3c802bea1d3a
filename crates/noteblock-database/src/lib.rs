//! # noteblock-database
//!
//! SQLite connection management, schema migrations, and the concrete
//! repositories for folders, notes and blocks.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
