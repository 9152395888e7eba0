//! Repository implementations module.
//!
//! - `local`: In-memory implementation for unit testing and local development,
//!   optionally seeded from a JSON file
pub mod local;

pub use local::{validate_seed, LocalRepository};
