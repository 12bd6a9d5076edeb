//! HTTP handlers for the review and batch endpoints.

use axum::{Extension, Json, extract::Query, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use guestvoice_core::notify::ReviewNotification;
use guestvoice_types::auth::Auth;
use guestvoice_types::store_adapter::{EntryStatus, Review};

use crate::prelude::*;
use crate::query::BatchSummary;
use crate::submit::SubmitReviewRequest;
use crate::{batch, query, submit};

#[derive(Debug, Deserialize)]
pub struct HotelScopeQuery {
	#[serde(rename = "hotelId")]
	pub hotel_id: Option<HotelId>,
}

/// `POST /api/reviews/internal` (guest-facing, token-gated).
///
/// The created review is returned immediately; the staff notification is
/// queued afterwards and can never fail the submission.
pub async fn post_internal_review(
	State(app): State<App>,
	Json(req): Json<SubmitReviewRequest>,
) -> GvResult<(StatusCode, Json<Review>)> {
	let review = submit::submit_review(&app, req).await?;

	app.notify.push(ReviewNotification { hotel_id: review.hotel_id, review: review.clone() });

	Ok((StatusCode::CREATED, Json(review)))
}

#[derive(Debug, Deserialize)]
pub struct SendRequestsBody {
	pub emails: Vec<String>,
	#[serde(rename = "hotelId")]
	pub hotel_id: Option<HotelId>,
}

#[derive(Debug, Serialize)]
pub struct SendRequestsResults {
	pub success: usize,
	pub failed: usize,
	#[serde(rename = "batchId")]
	pub batch_id: i64,
}

#[derive(Debug, Serialize)]
pub struct SendRequestsResponse {
	pub message: String,
	pub results: SendRequestsResults,
}

/// `POST /api/reviews/send-requests`: creates and processes a batch of
/// review-request emails for one hotel.
pub async fn post_send_requests(
	State(app): State<App>,
	Extension(auth): Extension<Auth>,
	Json(body): Json<SendRequestsBody>,
) -> GvResult<Json<SendRequestsResponse>> {
	let hotel_id = query::resolve_hotel(&auth, body.hotel_id)?;

	let created = batch::create_batch(&*app.store, hotel_id, &body.emails).await?;
	let processed = batch::process_batch(&app, created).await?;

	let success =
		processed.entries.iter().filter(|e| e.status == EntryStatus::Sent).count();
	let failed = processed.entries.len() - success;

	Ok(Json(SendRequestsResponse {
		message: "Review requests processed".into(),
		results: SendRequestsResults { success, failed, batch_id: processed.id },
	}))
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
	pub reviews: Vec<Review>,
}

/// `GET /api/reviews`: internal reviews for the caller's hotel scope.
pub async fn get_reviews(
	State(app): State<App>,
	Extension(auth): Extension<Auth>,
	Query(params): Query<HotelScopeQuery>,
) -> GvResult<Json<ReviewsResponse>> {
	let reviews = query::list_reviews(&*app.store, &auth, params.hotel_id).await?;
	Ok(Json(ReviewsResponse { reviews }))
}

/// `GET /api/reviews/email-batches`: batch summaries with per-entry detail.
pub async fn get_email_batches(
	State(app): State<App>,
	Extension(auth): Extension<Auth>,
	Query(params): Query<HotelScopeQuery>,
) -> GvResult<Json<Vec<BatchSummary>>> {
	let batches = query::list_batches(&*app.store, &auth, params.hotel_id).await?;
	Ok(Json(batches))
}

// vim: ts=4
