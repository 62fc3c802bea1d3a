//! Block domain entities.

pub mod kind;
pub mod model;

pub use kind::BlockType;
pub use model::{Block, CreateBlock};
