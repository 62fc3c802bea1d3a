//! Note lifecycle service.

pub mod service;

pub use service::NoteService;
