//! Core services of the application.
//!
//! - `blockchain`: per-chain transaction fetchers and the chain dispatcher
//! - `classifier`: chain resolution for hashes and transaction bodies
//! - `narrative`: explanation and diagram generation

pub mod blockchain;
pub mod classifier;
pub mod narrative;
