use std::sync::Arc;

use serde_json::json;

use chain_narrator::{
	models::{ChainId, ExplanationStyle},
	services::narrative::{NarrativeError, NarrativeGenerator, OpenAiCompletionClient},
	utils::{create_http_client, HttpClientConfig},
};

use crate::integration::mocks::{completion, MockCompletion};

fn generator_for(server_url: &str) -> NarrativeGenerator {
	let http = Arc::new(create_http_client(&HttpClientConfig::default()).unwrap());
	let client = OpenAiCompletionClient::new(http, server_url, "test-key").unwrap();
	NarrativeGenerator::new(Arc::new(client), "elyn/2.0-flash", "elyn/4o-mini")
}

#[tokio::test]
async fn test_explain_posts_summary_request() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/chat/completions")
		.match_header("authorization", "Bearer test-key")
		.match_body(mockito::Matcher::PartialJson(json!({
			"model": "elyn/2.0-flash",
			"max_tokens": 100,
		})))
		.with_status(200)
		.with_body(
			json!({
				"choices": [{
					"message": {
						"role": "assistant",
						"content": "```\nPayment | r9Lq... → rPT1... | Sent 10 XRP\n```"
					}
				}]
			})
			.to_string(),
		)
		.create_async()
		.await;

	let explanation = generator_for(&server.url())
		.explain(
			ChainId::Ripple,
			&json!({ "TransactionType": "Payment" }),
			ExplanationStyle::Summary,
		)
		.await
		.unwrap();

	assert_eq!(explanation, "Payment | r9Lq... → rPT1... | Sent 10 XRP");
	mock.assert();
}

#[tokio::test]
async fn test_diagram_uses_diagram_model() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/chat/completions")
		.match_body(mockito::Matcher::PartialJson(json!({
			"model": "elyn/4o-mini",
			"max_tokens": 1000,
		})))
		.with_status(200)
		.with_body(
			json!({
				"choices": [{ "message": { "content": "sequenceDiagram\n  A->>B: transfer" } }]
			})
			.to_string(),
		)
		.create_async()
		.await;

	let diagram = generator_for(&server.url())
		.diagram(ChainId::Aptos, &json!({ "type": "user_transaction" }))
		.await
		.unwrap();

	assert_eq!(diagram, "sequenceDiagram\n  A->>B: transfer");
	mock.assert();
}

#[tokio::test]
async fn test_missing_content_is_invalid_response() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/chat/completions")
		.with_status(200)
		.with_body(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
		.create_async()
		.await;

	let result = generator_for(&server.url())
		.explain(ChainId::Polkadot, &json!({}), ExplanationStyle::Detailed)
		.await;

	assert_eq!(result, Err(NarrativeError::InvalidResponse));
	mock.assert();
}

#[tokio::test]
async fn test_generator_never_retries() {
	let mut mock = MockCompletion::new();
	mock.expect_complete()
		.times(1)
		.returning(|_| Err(NarrativeError::RequestFailed("connection reset".into())));
	let generator = NarrativeGenerator::new(Arc::new(mock), "s", "d");

	let result = generator
		.explain(ChainId::Aptos, &json!({}), ExplanationStyle::Summary)
		.await;

	assert_eq!(
		result,
		Err(NarrativeError::RequestFailed("connection reset".into()))
	);
}

#[tokio::test]
async fn test_blank_completion_is_invalid_response() {
	let generator = NarrativeGenerator::new(completion(Ok("  \n ".into())), "s", "d");

	assert_eq!(
		generator.diagram(ChainId::Ripple, &json!({})).await,
		Err(NarrativeError::InvalidResponse)
	);
}
