//! Hotel and staff user read side.

use sqlx::{Row, SqlitePool};

use guestvoice::auth::Role;
use guestvoice::prelude::*;
use guestvoice::store_adapter::{Hotel, StaffUser};

use crate::map_res;

pub(crate) async fn read_hotel(db: &SqlitePool, hotel_id: HotelId) -> GvResult<Hotel> {
	let res = sqlx::query(
		"SELECT hotel_id, name, google_review_link, created_at FROM hotels WHERE hotel_id = ?1",
	)
	.bind(hotel_id.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| {
		Ok(Hotel {
			id: HotelId(row.try_get("hotel_id")?),
			name: row.try_get("name")?,
			google_review_link: row.try_get("google_review_link")?,
			created_at: Timestamp(row.try_get("created_at")?),
		})
	})
}

/// Reads the staff account assigned to a hotel. With several accounts the
/// earliest one wins; that account receives the notifications.
pub(crate) async fn read_staff_user(db: &SqlitePool, hotel_id: HotelId) -> GvResult<StaffUser> {
	let res = sqlx::query(
		"SELECT user_id, username, email, role, hotel_id, last_login
		FROM users WHERE hotel_id = ?1 ORDER BY user_id LIMIT 1",
	)
	.bind(hotel_id.0)
	.fetch_one(db)
	.await;

	map_res(res, |row| {
		let role = match row.try_get("role")? {
			"admin" => Role::Admin,
			"user" => Role::Staff,
			_ => return Err(sqlx::Error::RowNotFound),
		};

		Ok(StaffUser {
			id: row.try_get("user_id")?,
			username: row.try_get("username")?,
			email: row.try_get("email")?,
			role,
			hotel_id: row.try_get::<Option<i64>, _>("hotel_id")?.map(HotelId),
			last_login: Timestamp(row.try_get::<Option<i64>, _>("last_login")?.unwrap_or(0)),
		})
	})
}

// vim: ts=4
