use actix_web::test;
use serde_json::{json, Value};

use chain_narrator::{
	models::ChainId, services::blockchain::BlockChainError, utils::metrics::API_RESPONSES,
};

use crate::integration::mocks::{
	app, app_state, completion, fetcher, BARE_HASH, PREFIXED_HASH,
};

fn not_found() -> Result<Value, BlockChainError> {
	Err(BlockChainError::TransactionNotFound("missing".into()))
}

fn unused_completion() -> std::sync::Arc<dyn chain_narrator::services::narrative::CompletionClient> {
	completion(Ok(String::new()))
}

async fn post_classify(
	state: chain_narrator::api::AppState,
	body: Value,
) -> (u16, Value) {
	let app = test::init_service(app(state)).await;
	let req = test::TestRequest::post()
		.uri("/classify")
		.set_json(body)
		.to_request();
	let resp = test::call_service(&app, req).await;
	let status = resp.status().as_u16();
	let body: Value = test::read_body_json(resp).await;
	(status, body)
}

#[actix_web::test]
async fn test_hash_verified_on_second_candidate_only() {
	let state = app_state(
		vec![
			fetcher(ChainId::Aptos, not_found()),
			fetcher(ChainId::Ripple, Ok(json!({ "hash": BARE_HASH }))),
			fetcher(ChainId::Polkadot, Ok(json!({ "transaction": {} }))),
		],
		unused_completion(),
	);

	let (status, body) =
		post_classify(state, json!({ "type": "hash", "input": PREFIXED_HASH })).await;

	assert_eq!(status, 200);
	assert_eq!(body, json!({ "chain": "polkadot" }));
}

#[actix_web::test]
async fn test_hash_confirmed_on_both_candidates_prefers_registry_order() {
	let state = app_state(
		vec![
			fetcher(ChainId::Aptos, Ok(json!({ "version": "1" }))),
			fetcher(ChainId::Polkadot, Ok(json!({ "transaction": {} }))),
		],
		unused_completion(),
	);

	let (status, body) =
		post_classify(state, json!({ "type": "hash", "input": PREFIXED_HASH })).await;

	assert_eq!(status, 200);
	assert_eq!(body, json!({ "chain": "aptos" }));
}

#[actix_web::test]
async fn test_bare_hash_resolves_to_ripple() {
	let state = app_state(
		vec![fetcher(ChainId::Ripple, Ok(json!({ "hash": BARE_HASH })))],
		unused_completion(),
	);

	let (status, body) =
		post_classify(state, json!({ "type": "hash", "input": BARE_HASH })).await;

	assert_eq!(status, 200);
	assert_eq!(body, json!({ "chain": "ripple" }));
}

#[actix_web::test]
async fn test_hash_confirmed_nowhere_is_undetermined() {
	let state = app_state(
		vec![
			fetcher(ChainId::Aptos, not_found()),
			fetcher(
				ChainId::Polkadot,
				Err(BlockChainError::ConnectionError("timeout".into())),
			),
		],
		unused_completion(),
	);

	let (status, body) =
		post_classify(state, json!({ "type": "hash", "input": PREFIXED_HASH })).await;

	assert_eq!(status, 400);
	assert_eq!(body, json!({ "error": "Unable to determine blockchain type" }));
}

#[actix_web::test]
async fn test_malformed_hash_is_undetermined() {
	let state = app_state(vec![], unused_completion());
	let (status, body) = post_classify(state, json!({ "type": "hash", "input": "0x1234" })).await;

	assert_eq!(status, 400);
	assert_eq!(body["error"], "Unable to determine blockchain type");
}

#[actix_web::test]
async fn test_json_ripple_payment() {
	let state = app_state(vec![], unused_completion());
	let (status, body) = post_classify(
		state,
		json!({ "type": "json", "input": { "TransactionType": "Payment", "hash": BARE_HASH } }),
	)
	.await;

	assert_eq!(status, 200);
	assert_eq!(body, json!({ "chain": "ripple" }));
}

#[actix_web::test]
async fn test_json_string_input_is_parsed() {
	let state = app_state(vec![], unused_completion());
	let input = json!({ "type": "user_transaction", "version": "42" }).to_string();
	let (status, body) = post_classify(state, json!({ "type": "json", "input": input })).await;

	assert_eq!(status, 200);
	assert_eq!(body, json!({ "chain": "aptos" }));
}

#[actix_web::test]
async fn test_malformed_json_input() {
	let state = app_state(vec![], unused_completion());
	let (status, body) =
		post_classify(state, json!({ "type": "json", "input": "{\"TransactionType\":" })).await;

	assert_eq!(status, 400);
	assert_eq!(body, json!({ "error": "Invalid JSON format" }));
}

#[actix_web::test]
async fn test_unrecognised_json_is_undetermined() {
	let state = app_state(vec![], unused_completion());
	let (status, body) =
		post_classify(state, json!({ "type": "json", "input": { "foo": "bar" } })).await;

	assert_eq!(status, 400);
	assert_eq!(body["error"], "Unable to determine blockchain type");
}

#[actix_web::test]
async fn test_missing_fields() {
	let state = app_state(vec![], unused_completion());
	let (status, body) = post_classify(state, json!({ "type": "hash" })).await;

	assert_eq!(status, 400);
	assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[actix_web::test]
async fn test_unknown_input_type() {
	let state = app_state(vec![], unused_completion());
	let (status, body) = post_classify(state, json!({ "type": "address", "input": "r1" })).await;

	assert_eq!(status, 400);
	assert_eq!(body["error"], "Unsupported input type: address");
}

#[actix_web::test]
async fn test_unparseable_body() {
	let rejected = API_RESPONSES.with_label_values(&["classify", "400"]);
	let before = rejected.get();
	let app = test::init_service(app(app_state(vec![], unused_completion()))).await;
	let req = test::TestRequest::post()
		.uri("/classify")
		.insert_header(("content-type", "application/json"))
		.set_payload("{ not json")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 400);
	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Invalid request body" }));
	assert!(rejected.get() > before);
}

#[actix_web::test]
async fn test_health() {
	let app = test::init_service(app(app_state(vec![], unused_completion()))).await;
	let req = test::TestRequest::get().uri("/health").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "status": "ok" }));
}
