use std::{sync::Arc, time::Duration};

use serde_json::json;

use chain_narrator::{
	models::{ChainId, ClassifyRequest},
	services::{
		blockchain::{BlockChainError, ChainDispatcher},
		classifier::{ChainClassifier, ChainRegistry, ClassificationError},
	},
};

use crate::integration::mocks::{fetcher, MockFetcher, BARE_HASH, PREFIXED_HASH};

fn classifier(dispatcher: ChainDispatcher) -> ChainClassifier {
	ChainClassifier::new(
		ChainRegistry::standard().unwrap(),
		Arc::new(dispatcher),
		Duration::from_secs(2),
	)
}

#[tokio::test]
async fn test_every_candidate_is_verified_once() {
	let mut aptos = MockFetcher::new();
	aptos.expect_chain().return_const(ChainId::Aptos);
	aptos
		.expect_fetch_transaction()
		.withf(|hash| hash.to_string() == PREFIXED_HASH)
		.times(1)
		.returning(|_| Err(BlockChainError::TransactionNotFound(PREFIXED_HASH.into())));

	let mut polkadot = MockFetcher::new();
	polkadot.expect_chain().return_const(ChainId::Polkadot);
	polkadot
		.expect_fetch_transaction()
		.times(1)
		.returning(|_| Ok(json!({ "transaction": {} })));

	let mut ripple = MockFetcher::new();
	ripple.expect_chain().return_const(ChainId::Ripple);
	ripple.expect_fetch_transaction().never();

	let dispatcher = ChainDispatcher::new()
		.with_fetcher(Arc::new(aptos))
		.with_fetcher(Arc::new(ripple))
		.with_fetcher(Arc::new(polkadot));

	assert_eq!(
		classifier(dispatcher).classify_hash(PREFIXED_HASH).await,
		Ok(ChainId::Polkadot)
	);
}

#[tokio::test]
async fn test_single_candidate_still_requires_confirmation() {
	let dispatcher = ChainDispatcher::new().with_fetcher(fetcher(
		ChainId::Ripple,
		Err(BlockChainError::TransactionNotFound(BARE_HASH.into())),
	));

	assert_eq!(
		classifier(dispatcher).classify_hash(BARE_HASH).await,
		Err(ClassificationError::Undetermined)
	);
}

#[tokio::test]
async fn test_hash_input_is_trimmed() {
	let dispatcher =
		ChainDispatcher::new().with_fetcher(fetcher(ChainId::Ripple, Ok(json!({}))));
	let request = ClassifyRequest {
		kind: Some("hash".into()),
		input: Some(json!(format!("  {}\n", BARE_HASH))),
	};

	assert_eq!(
		classifier(dispatcher).classify(&request).await,
		Ok(ChainId::Ripple)
	);
}

#[tokio::test]
async fn test_repeated_runs_are_deterministic() {
	let dispatcher = ChainDispatcher::new()
		.with_fetcher(fetcher(ChainId::Aptos, Ok(json!({}))))
		.with_fetcher(fetcher(ChainId::Polkadot, Ok(json!({}))));
	let classifier = classifier(dispatcher);

	for _ in 0..5 {
		assert_eq!(
			classifier.classify_hash(PREFIXED_HASH).await,
			Ok(ChainId::Aptos)
		);
	}
}

#[test]
fn test_json_priority_prefers_earlier_chain() {
	let classifier = classifier(ChainDispatcher::new());
	let both = json!({
		"TransactionType": "Payment",
		"hash": BARE_HASH,
		"transaction": { "extrinsic_hash": PREFIXED_HASH },
	});

	assert_eq!(classifier.classify_json(&both), Ok(ChainId::Ripple));
}
