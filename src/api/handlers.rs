//! HTTP request handlers.
//!
//! Handlers validate input, delegate to the services held in [`AppState`] and
//! run under the configured request deadline.

use std::{future::Future, str::FromStr, sync::Arc, time::Duration};

use actix_web::{
	http::{Method, StatusCode},
	web, HttpRequest, HttpResponse, ResponseError,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::{
	api::error::ApiError,
	models::{
		AnalysisResult, ChainId, ClassifyRequest, ClassifyResponse, HashQuery, TransactionBody,
		TransactionPayload,
	},
	services::{
		blockchain::ChainDispatcher, classifier::ChainClassifier, narrative::NarrativeGenerator,
	},
	utils::metrics::{API_RESPONSES, UPSTREAM_FETCH_FAILURES},
};

/// Services shared by every request
#[derive(Clone)]
pub struct AppState {
	pub classifier: ChainClassifier,
	pub dispatcher: Arc<ChainDispatcher>,
	pub narrator: NarrativeGenerator,
	pub request_deadline: Duration,
}

/// Runs `handler` under the request deadline and records the response status
async fn respond<F>(state: &AppState, route: &str, handler: F) -> Result<HttpResponse, ApiError>
where
	F: Future<Output = Result<HttpResponse, ApiError>>,
{
	let result = match tokio::time::timeout(state.request_deadline, handler).await {
		Ok(result) => result,
		Err(_) => {
			warn!(route, "request deadline exceeded");
			Err(ApiError::deadline_exceeded())
		}
	};

	let status = match &result {
		Ok(response) => response.status(),
		Err(err) => err.status_code(),
	};
	record_response(route, status);
	result
}

fn record_response(route: &str, status: StatusCode) {
	API_RESPONSES
		.with_label_values(&[route, status.as_str()])
		.inc();
}

/// Metric label of the handler serving `req`, for responses produced before
/// the handler runs
fn route_label(req: &HttpRequest) -> &'static str {
	let get = *req.method() == Method::GET;
	match req.match_pattern().as_deref() {
		Some("/classify") => "classify",
		Some("/transactions/{chain}") if get => "get_transaction",
		Some("/transactions/{chain}") => "post_transaction",
		Some("/diagram/{chain}") if get => "get_diagram",
		Some("/diagram/{chain}") => "post_diagram",
		_ => "unmatched",
	}
}

fn parse_chain(slug: &str) -> Result<ChainId, ApiError> {
	Ok(ChainId::from_str(slug)?)
}

fn required_hash(query: &HashQuery) -> Result<&str, ApiError> {
	query
		.hash
		.as_deref()
		.map(str::trim)
		.filter(|hash| !hash.is_empty())
		.ok_or_else(|| ApiError::bad_request("Transaction hash is required"))
}

fn required_transaction(body: &TransactionBody) -> Result<&TransactionPayload, ApiError> {
	body.transaction
		.as_ref()
		.filter(|tx| match tx {
			Value::Null => false,
			Value::String(s) => !s.trim().is_empty(),
			_ => true,
		})
		.ok_or_else(|| ApiError::bad_request("Transaction data is required"))
}

async fn fetch(
	state: &AppState,
	chain: ChainId,
	hash: &str,
) -> Result<TransactionPayload, ApiError> {
	let handler = state.dispatcher.handler(chain)?;
	handler.fetcher.fetch_transaction(hash).await.map_err(|err| {
		UPSTREAM_FETCH_FAILURES
			.with_label_values(&[chain.as_str()])
			.inc();
		ApiError::from(err)
	})
}

/// `POST /classify`
pub async fn classify(
	state: web::Data<AppState>,
	body: web::Json<ClassifyRequest>,
) -> Result<HttpResponse, ApiError> {
	respond(&state, "classify", async {
		let chain = state.classifier.classify(&body).await?;
		Ok(HttpResponse::Ok().json(ClassifyResponse { chain }))
	})
	.await
}

/// `GET /transactions/{chain}?hash=`
pub async fn get_transaction(
	state: web::Data<AppState>,
	path: web::Path<String>,
	query: web::Query<HashQuery>,
) -> Result<HttpResponse, ApiError> {
	respond(&state, "get_transaction", async {
		let chain = parse_chain(&path)?;
		let hash = required_hash(&query)?;
		let transaction = fetch(&state, chain, hash).await?;
		let explanation = state
			.narrator
			.explain(chain, &transaction, query.style.unwrap_or_default())
			.await?;
		Ok(HttpResponse::Ok().json(AnalysisResult::explained(chain, Some(transaction), explanation)))
	})
	.await
}

/// `POST /transactions/{chain}`
pub async fn post_transaction(
	state: web::Data<AppState>,
	path: web::Path<String>,
	body: web::Json<TransactionBody>,
) -> Result<HttpResponse, ApiError> {
	respond(&state, "post_transaction", async {
		let chain = parse_chain(&path)?;
		let transaction = required_transaction(&body)?;
		let explanation = state
			.narrator
			.explain(chain, transaction, body.style.unwrap_or_default())
			.await?;
		Ok(HttpResponse::Ok().json(AnalysisResult::explained(chain, None, explanation)))
	})
	.await
}

/// `GET /diagram/{chain}?hash=`
pub async fn get_diagram(
	state: web::Data<AppState>,
	path: web::Path<String>,
	query: web::Query<HashQuery>,
) -> Result<HttpResponse, ApiError> {
	respond(&state, "get_diagram", async {
		let chain = parse_chain(&path)?;
		let hash = required_hash(&query)?;
		let transaction = fetch(&state, chain, hash).await?;
		let diagram = state.narrator.diagram(chain, &transaction).await?;
		Ok(HttpResponse::Ok().json(AnalysisResult::diagrammed(chain, diagram)))
	})
	.await
}

/// `POST /diagram/{chain}`
pub async fn post_diagram(
	state: web::Data<AppState>,
	path: web::Path<String>,
	body: web::Json<TransactionBody>,
) -> Result<HttpResponse, ApiError> {
	respond(&state, "post_diagram", async {
		let chain = parse_chain(&path)?;
		let transaction = required_transaction(&body)?;
		let diagram = state.narrator.diagram(chain, transaction).await?;
		Ok(HttpResponse::Ok().json(AnalysisResult::diagrammed(chain, diagram)))
	})
	.await
}

pub async fn health() -> HttpResponse {
	HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Rejects unparseable JSON bodies with a 400
pub fn json_error_handler(
	err: actix_web::error::JsonPayloadError,
	req: &HttpRequest,
) -> actix_web::Error {
	debug!("rejected request body: {}", err);
	let err = ApiError::bad_request("Invalid request body");
	record_response(route_label(req), err.status_code());
	err.into()
}

/// Rejects unparseable query strings with a 400
pub fn query_error_handler(
	err: actix_web::error::QueryPayloadError,
	req: &HttpRequest,
) -> actix_web::Error {
	debug!("rejected query string: {}", err);
	let err = ApiError::bad_request("Invalid query string");
	record_response(route_label(req), err.status_code());
	err.into()
}
