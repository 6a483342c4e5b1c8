//! Blockchain client implementations.
//!
//! One client per supported chain, each generic over its transport so tests
//! can substitute a mock transport.

mod aptos;
mod polkadot;
mod ripple;

pub use aptos::AptosClient;
pub use polkadot::{extrinsic_request, PolkadotClient, SUBSCAN_API_KEY_HEADER};
pub use ripple::{tx_request, RippleClient};
