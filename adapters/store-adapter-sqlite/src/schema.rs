//! Database schema initialization.
//!
//! Creates tables and indexes on startup; every statement is idempotent so
//! reopening an existing database is a no-op.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Hotels
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS hotels (
		hotel_id integer NOT NULL,
		name text NOT NULL,
		google_review_link text,
		created_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(hotel_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Staff users
	//*************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
		user_id integer NOT NULL,
		username text NOT NULL,
		email text NOT NULL,
		role text NOT NULL DEFAULT 'user',
		hotel_id integer,
		last_login integer DEFAULT 0,
		PRIMARY KEY(user_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_hotel ON users(hotel_id)")
		.execute(&mut *tx)
		.await?;

	// Reviews
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS reviews (
		review_id integer PRIMARY KEY AUTOINCREMENT,
		hotel_id integer NOT NULL,
		guest_name text NOT NULL,
		email text,
		stay_date text NOT NULL,
		rating integer NOT NULL,
		review_text text NOT NULL,
		is_internal integer NOT NULL DEFAULT 1,
		email_sent integer NOT NULL DEFAULT 0,
		response_text text,
		responded_at integer,
		created_at integer DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_hotel ON reviews(hotel_id, created_at)")
		.execute(&mut *tx)
		.await?;

	// Email batches
	//***************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS email_batches (
		batch_id integer PRIMARY KEY AUTOINCREMENT,
		hotel_id integer NOT NULL,
		status text NOT NULL DEFAULT 'pending',
		created_at integer DEFAULT (unixepoch()),
		completed_at integer
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_batches_hotel ON email_batches(hotel_id)")
		.execute(&mut *tx)
		.await?;

	// Entries keep their input position so a batch reads back in order
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS email_batch_entries (
		batch_id integer NOT NULL,
		position integer NOT NULL,
		email text NOT NULL,
		status text NOT NULL DEFAULT 'pending',
		sent_at integer,
		error text,
		PRIMARY KEY(batch_id, position)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
