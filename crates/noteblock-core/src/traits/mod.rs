//! Core traits defined in `noteblock-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
