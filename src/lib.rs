//! Chain Narrator
//!
//! Classifies blockchain transactions by chain and explains them in plain
//! language through a text-completion service.
//!
//! # Architecture
//! - Models: chains, requests, analysis results and configuration
//! - Services: chain clients and dispatcher, classifier, narrative generator
//! - API: actix-web routes mapping service errors to `{ "error": ... }` bodies
//! - Bootstrap: wires the services from a resolved configuration
//!
//! # Flow
//! 1. A hash is matched against the registry patterns and verified live on every candidate chain
//! 2. A transaction body is matched against the structural predicates in priority order
//! 3. The resolved chain's client fetches the transaction
//! 4. The narrative generator explains or diagrams it

pub mod api;
pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
