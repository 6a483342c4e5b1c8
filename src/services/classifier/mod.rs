//! Chain classification.
//!
//! Resolves which supported chain a hash or transaction body belongs to:
//! - Ordered registry of hash patterns and structural predicates
//! - Concurrent live verification of hash candidates
//! - Deterministic tie-break by registry priority

mod error;
mod predicates;
mod registry;
mod resolver;
mod service;
mod verification;

pub use error::ClassificationError;
pub use predicates::{has_aptos_structure, has_polkadot_structure, has_ripple_structure};
pub use registry::{ChainPattern, ChainRegistry, StructuralPredicate};
pub use resolver::resolve;
pub use service::ChainClassifier;
pub use verification::{confirmed_chains, verify_candidates, VerificationOutcome};
