use axum::{
	Json, Router, middleware,
	routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use guestvoice_core::app::App;
use guestvoice_core::route_auth::require_auth;
use guestvoice_review::handler;

async fn get_health() -> Json<serde_json::Value> {
	Json(serde_json::json!({ "status": "ok" }))
}

pub fn init(state: App) -> Router {
	let protected_router = Router::new()
		.route("/api/reviews", get(handler::get_reviews))
		.route("/api/reviews/send-requests", post(handler::post_send_requests))
		.route("/api/reviews/email-batches", get(handler::get_email_batches))
		.layer(middleware::from_fn_with_state(state.clone(), require_auth));

	let public_router = Router::new()
		.route("/api/reviews/internal", post(handler::post_internal_review))
		.route("/api/health", get(get_health));

	Router::new()
		.merge(public_router)
		.merge(protected_router)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

// vim: ts=4
