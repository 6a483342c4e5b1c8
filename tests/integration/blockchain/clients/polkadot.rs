use std::sync::Arc;

use mockito::Matcher;
use serde_json::json;

use chain_narrator::{
	services::blockchain::{
		BlockChainError, HttpTransportClient, PolkadotClient, TransactionFetcher,
		SUBSCAN_API_KEY_HEADER,
	},
	utils::{create_http_client, HttpClientConfig},
};

use crate::integration::mocks::PREFIXED_HASH;

fn client(url: &str, api_key: &str) -> PolkadotClient<HttpTransportClient> {
	let http = Arc::new(create_http_client(&HttpClientConfig::default()).unwrap());
	PolkadotClient::new(http, url, api_key).unwrap()
}

#[tokio::test]
async fn test_fetch_wraps_extrinsic() {
	let mut server = mockito::Server::new_async().await;
	let extrinsic = json!({
		"extrinsic_hash": PREFIXED_HASH,
		"call_module": "balances",
		"call_module_function": "transfer_keep_alive",
		"success": true,
	});
	let mock = server
		.mock("POST", "/api/scan/extrinsic")
		.match_header(SUBSCAN_API_KEY_HEADER, "subscan-key")
		.match_body(Matcher::PartialJson(json!({
			"hash": PREFIXED_HASH,
			"events_limit": 0,
			"only_extrinsic_event": true,
		})))
		.with_status(200)
		.with_body(json!({ "code": 0, "message": "Success", "data": extrinsic }).to_string())
		.create_async()
		.await;

	let result = client(&format!("{}/api/scan/extrinsic", server.url()), "subscan-key")
		.fetch_transaction(PREFIXED_HASH)
		.await
		.unwrap();

	assert_eq!(result, json!({ "transaction": extrinsic }));
	mock.assert();
}

#[tokio::test]
async fn test_empty_api_key_is_still_sent() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.match_header(SUBSCAN_API_KEY_HEADER, "")
		.with_status(200)
		.with_body(r#"{"code":0,"message":"Success","data":{"extrinsic_hash":"0x01"}}"#)
		.create_async()
		.await;

	assert!(client(&server.url(), "").verify_transaction(PREFIXED_HASH).await);
	mock.assert();
}

#[tokio::test]
async fn test_api_error_code() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body(r#"{"code":10004,"message":"Record Not Found"}"#)
		.create_async()
		.await;

	let err = client(&server.url(), "k")
		.fetch_transaction(PREFIXED_HASH)
		.await
		.unwrap_err();

	assert_eq!(err.to_string(), "Subscan API error: Record Not Found");
	mock.assert();
}

#[tokio::test]
async fn test_null_data_is_not_found() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(200)
		.with_body(r#"{"code":0,"message":"Success","data":null}"#)
		.create_async()
		.await;

	let result = client(&server.url(), "k").fetch_transaction(PREFIXED_HASH).await;

	assert!(matches!(result, Err(BlockChainError::TransactionNotFound(_))));
	mock.assert();
}

#[tokio::test]
async fn test_rate_limited() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/")
		.with_status(429)
		.with_body("Too Many Requests")
		.create_async()
		.await;

	let err = client(&server.url(), "k")
		.fetch_transaction(PREFIXED_HASH)
		.await
		.unwrap_err();

	assert_eq!(
		err.to_string(),
		"Failed to fetch transaction: 429 Too Many Requests"
	);
	mock.assert();
}
