//! Block lifecycle service.

pub mod service;

pub use service::{BlockChanges, BlockService};
