//! Logging setup for the CREED timeline service.
mod logger;
pub use logger::*;
