//! Application services orchestrating domain logic.

pub mod error;
pub mod render;
