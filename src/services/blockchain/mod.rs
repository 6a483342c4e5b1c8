//! Blockchain client interfaces and implementations.
//!
//! Provides the per-chain transaction fetchers and the dispatcher that
//! selects one for a resolved chain. Includes:
//!
//! - Generic fetcher trait
//! - Chain specific clients (Aptos, XRP Ledger, Polkadot via Subscan)
//! - HTTP transport
//! - Error handling for blockchain operations

mod client;
mod clients;
mod dispatcher;
mod error;
mod transports;

pub use client::TransactionFetcher;
pub use clients::{
	extrinsic_request, tx_request, AptosClient, PolkadotClient, RippleClient,
	SUBSCAN_API_KEY_HEADER,
};
pub use dispatcher::{ChainDispatcher, ChainHandler};
pub use error::BlockChainError;
pub use transports::{BlockchainTransport, HttpTransportClient, TransportResponse};
