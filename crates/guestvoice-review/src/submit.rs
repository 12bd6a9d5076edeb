//! Token-gated review submission.
//!
//! A submission either ends with a persisted review or with nothing at
//! all; there is no intermediate state. Validation and token checks run
//! before anything touches the store.

use chrono::NaiveDate;
use serde::Deserialize;

use guestvoice_types::store_adapter::{CreateReviewData, Review};
use guestvoice_types::types::Rating;

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
	#[serde(rename = "hotelId")]
	pub hotel_id: Option<HotelId>,
	#[serde(rename = "guestName")]
	pub guest_name: Option<String>,
	/// ISO date string, date-only or full RFC 3339
	#[serde(rename = "stayDate")]
	pub stay_date: Option<String>,
	/// Accepted as a bare number or a numeric string
	pub rating: Option<serde_json::Value>,
	#[serde(rename = "reviewText")]
	pub review_text: Option<String>,
	pub token: Option<String>,
}

fn parse_stay_date(raw: &str) -> GvResult<NaiveDate> {
	if let Ok(date) = raw.parse::<NaiveDate>() {
		return Ok(date);
	}
	chrono::DateTime::parse_from_rfc3339(raw)
		.map(|dt| dt.date_naive())
		.map_err(|_| Error::ValidationError("Invalid stay date".into()))
}

fn coerce_rating(raw: &serde_json::Value) -> GvResult<Rating> {
	let value = match raw {
		serde_json::Value::Number(n) => n.as_i64(),
		serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
		_ => None,
	}
	.ok_or_else(|| Error::ValidationError("Rating must be between 1 and 5".into()))?;

	Rating::try_from(value)
}

/// Runs the submission pipeline and persists the review.
///
/// The caller is responsible for queueing the staff notification after a
/// successful return; nothing here blocks on email delivery.
pub async fn submit_review(app: &AppState, req: SubmitReviewRequest) -> GvResult<Review> {
	// Without a token and a target hotel this is not a review submission
	let (Some(hotel_id), Some(token)) = (req.hotel_id, req.token.as_deref()) else {
		return Err(Error::InvalidRequest);
	};

	let guest_name = req.guest_name.as_deref().map(str::trim).unwrap_or_default();
	let review_text = req.review_text.as_deref().map(str::trim).unwrap_or_default();
	let stay_date_raw = req.stay_date.as_deref().unwrap_or_default();

	if guest_name.is_empty() || review_text.is_empty() || stay_date_raw.is_empty()
		|| req.rating.is_none()
	{
		return Err(Error::ValidationError("Missing required fields".into()));
	}

	let claims = app.tokens.verify(token)?;
	if claims.hotel_id != hotel_id {
		return Err(Error::ValidationError("Invalid hotel ID".into()));
	}

	let rating = match &req.rating {
		Some(raw) => coerce_rating(raw)?,
		None => return Err(Error::ValidationError("Missing required fields".into())),
	};
	let stay_date = parse_stay_date(stay_date_raw)?;

	// Hotel must still exist; tokens can outlive hotels
	app.store.read_hotel(hotel_id).await?;

	let data = CreateReviewData {
		hotel_id,
		guest_name: guest_name.into(),
		email: Some(claims.email.into()),
		stay_date,
		rating,
		review_text: review_text.into(),
		is_internal: true,
		email_sent: true,
	};

	let review = app.store.create_review(&data).await?;
	info!("Review {} created for hotel {}", review.id, hotel_id);
	Ok(review)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_stay_date_formats() {
		assert!(parse_stay_date("2025-06-01").is_ok());
		assert!(parse_stay_date("2025-06-01T14:30:00Z").is_ok());
		assert!(parse_stay_date("June 1st").is_err());
		assert!(parse_stay_date("").is_err());
	}

	#[test]
	fn test_coerce_rating() {
		assert_eq!(coerce_rating(&serde_json::json!(4)).ok().map(Rating::value), Some(4));
		assert_eq!(coerce_rating(&serde_json::json!("4")).ok().map(Rating::value), Some(4));
		assert!(coerce_rating(&serde_json::json!(0)).is_err());
		assert!(coerce_rating(&serde_json::json!(6)).is_err());
		assert!(coerce_rating(&serde_json::json!("five")).is_err());
		assert!(coerce_rating(&serde_json::json!(null)).is_err());
		assert!(coerce_rating(&serde_json::json!(2.7)).is_err());
	}
}

// vim: ts=4
