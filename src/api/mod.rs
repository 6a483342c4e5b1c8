//! HTTP API.
//!
//! Routes:
//! - `POST /classify`
//! - `GET|POST /transactions/{chain}`
//! - `GET|POST /diagram/{chain}`
//! - `GET /health`

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::AppState;

use actix_web::{
	middleware::{DefaultHeaders, Logger, NormalizePath},
	web, App, HttpServer,
};
use tracing::info;

/// Registers every API route and the body/query error handlers
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
		.app_data(web::QueryConfig::default().error_handler(handlers::query_error_handler))
		.route("/health", web::get().to(handlers::health))
		.route("/classify", web::post().to(handlers::classify))
		.service(
			web::resource("/transactions/{chain}")
				.route(web::get().to(handlers::get_transaction))
				.route(web::post().to(handlers::post_transaction)),
		)
		.service(
			web::resource("/diagram/{chain}")
				.route(web::get().to(handlers::get_diagram))
				.route(web::post().to(handlers::post_diagram)),
		);
}

/// Creates the API server bound to `bind_address`
pub fn create_api_server(
	state: AppState,
	bind_address: &str,
) -> std::io::Result<actix_web::dev::Server> {
	info!("Starting API server on {}", bind_address);

	let state = web::Data::new(state);
	Ok(HttpServer::new(move || {
		App::new()
			.wrap(NormalizePath::trim())
			.wrap(DefaultHeaders::new())
			.wrap(Logger::new("%r %s %Dms"))
			.app_data(state.clone())
			.configure(configure_routes)
	})
	.bind(bind_address)?
	.shutdown_timeout(5)
	.run())
}
