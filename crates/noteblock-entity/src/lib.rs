//! # noteblock-entity
//!
//! Domain entity models for Noteblock. Every struct in this crate
//! represents a database table row or the payload used to insert one.
//! Row entities derive `sqlx::FromRow` and serialize with camelCase keys.

pub mod block;
pub mod folder;
pub mod note;
