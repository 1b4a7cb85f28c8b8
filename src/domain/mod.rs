//! Domain layer types and invariants.

pub mod document;
pub mod format;
pub mod slug;
