//! Route handlers organized by domain.

pub mod block;
pub mod folder;
pub mod health;
pub mod note;
