//! Review persistence.

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use guestvoice::prelude::*;
use guestvoice::store_adapter::{CreateReviewData, Review};
use guestvoice::types::Rating;

use crate::{collect_res, map_res};

fn row_to_review(row: &SqliteRow) -> Result<Review, sqlx::Error> {
	let stay_date: String = row.try_get("stay_date")?;
	let stay_date = stay_date
		.parse::<NaiveDate>()
		.map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
	let rating = Rating::try_from(row.try_get::<i64, _>("rating")?)
		.map_err(|_| sqlx::Error::RowNotFound)?;

	Ok(Review {
		id: row.try_get("review_id")?,
		hotel_id: HotelId(row.try_get("hotel_id")?),
		guest_name: row.try_get("guest_name")?,
		email: row.try_get("email")?,
		stay_date,
		rating,
		review_text: row.try_get("review_text")?,
		is_internal: row.try_get("is_internal")?,
		email_sent: row.try_get("email_sent")?,
		response_text: row.try_get("response_text")?,
		responded_at: row.try_get::<Option<i64>, _>("responded_at")?.map(Timestamp),
		created_at: Timestamp(row.try_get("created_at")?),
	})
}

pub(crate) async fn create_review(db: &SqlitePool, data: &CreateReviewData) -> GvResult<Review> {
	let res = sqlx::query(
		"INSERT INTO reviews (hotel_id, guest_name, email, stay_date, rating, review_text, is_internal, email_sent)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
		RETURNING review_id, hotel_id, guest_name, email, stay_date, rating, review_text,
			is_internal, email_sent, response_text, responded_at, created_at",
	)
	.bind(data.hotel_id.0)
	.bind(&data.guest_name)
	.bind(&data.email)
	.bind(data.stay_date.to_string())
	.bind(i64::from(data.rating.value()))
	.bind(&data.review_text)
	.bind(data.is_internal)
	.bind(data.email_sent)
	.fetch_one(db)
	.await;

	map_res(res, |row| row_to_review(&row))
}

pub(crate) async fn list_reviews(db: &SqlitePool, hotel_id: HotelId) -> GvResult<Vec<Review>> {
	let rows = sqlx::query(
		"SELECT review_id, hotel_id, guest_name, email, stay_date, rating, review_text,
			is_internal, email_sent, response_text, responded_at, created_at
		FROM reviews WHERE hotel_id = ?1 AND is_internal = 1
		ORDER BY created_at DESC, review_id DESC",
	)
	.bind(hotel_id.0)
	.fetch_all(db)
	.await
	.inspect_err(crate::inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(row_to_review))
}

// vim: ts=4
