//! Infrastructure adapters and runtime bootstrap.

pub mod error;
pub mod io;
pub mod telemetry;
