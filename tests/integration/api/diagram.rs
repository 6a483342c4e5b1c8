use actix_web::test;
use serde_json::{json, Value};

use chain_narrator::models::ChainId;

use crate::integration::mocks::{app, app_state, completion, fetcher, PREFIXED_HASH};

const DIAGRAM: &str = "sequenceDiagram\n    participant S as Sender\n    participant R as Recipient\n    S->>R: 25 DOT";

#[actix_web::test]
async fn test_get_diagram_cleans_generated_code() {
	let raw = format!("Here's the sequence diagram:\n```mermaid\n{}\n```\nExplanation: a transfer.", DIAGRAM);
	let state = app_state(
		vec![fetcher(
			ChainId::Polkadot,
			Ok(json!({ "transaction": { "extrinsic_hash": PREFIXED_HASH } })),
		)],
		completion(Ok(raw)),
	);
	let app = test::init_service(app(state)).await;

	let req = test::TestRequest::get()
		.uri(&format!("/diagram/polkadot?hash={}", PREFIXED_HASH))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 200);
	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "chain": "polkadot", "diagram": DIAGRAM }));
}

#[actix_web::test]
async fn test_post_diagram_rejects_non_sequence_diagram() {
	let state = app_state(vec![], completion(Ok("flowchart LR\n  A --> B".into())));
	let app = test::init_service(app(state)).await;

	let req = test::TestRequest::post()
		.uri("/diagram/aptos")
		.set_json(json!({ "transaction": { "type": "user_transaction", "version": "1" } }))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 500);
	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Invalid diagram code generated" }));
}

#[actix_web::test]
async fn test_post_diagram_requires_payload() {
	let state = app_state(vec![], completion(Ok(DIAGRAM.into())));
	let app = test::init_service(app(state)).await;

	let req = test::TestRequest::post()
		.uri("/diagram/ripple")
		.set_json(json!({ "transaction": null }))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 400);
	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Transaction data is required" }));
}

#[actix_web::test]
async fn test_get_diagram_requires_hash() {
	let state = app_state(vec![], completion(Ok(DIAGRAM.into())));
	let app = test::init_service(app(state)).await;

	let req = test::TestRequest::get().uri("/diagram/aptos?hash=").to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status().as_u16(), 400);
	let body: Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Transaction hash is required" }));
}
