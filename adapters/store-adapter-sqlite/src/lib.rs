//! SQLite store adapter.
//!
//! Single-file database holding hotels, staff users, reviews, and email
//! batches. The pool runs in WAL mode and the schema is initialized on
//! open.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool, SqliteRow};
use std::path::Path;

use guestvoice::prelude::*;
use guestvoice::store_adapter::{
	CreateReviewData, EmailBatch, EmailEntry, Hotel, Review, StaffUser, StoreAdapter,
};

mod batch;
mod hotel;
mod review;
mod schema;

use schema::init_db;

// Helper functions
//******************
fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> GvResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> GvResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> GvResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Hotels
	//********
	async fn read_hotel(&self, hotel_id: HotelId) -> GvResult<Hotel> {
		hotel::read_hotel(&self.db, hotel_id).await
	}

	async fn read_staff_user(&self, hotel_id: HotelId) -> GvResult<StaffUser> {
		hotel::read_staff_user(&self.db, hotel_id).await
	}

	// Reviews
	//*********
	async fn create_review(&self, data: &CreateReviewData) -> GvResult<Review> {
		review::create_review(&self.db, data).await
	}

	async fn list_reviews(&self, hotel_id: HotelId) -> GvResult<Vec<Review>> {
		review::list_reviews(&self.db, hotel_id).await
	}

	// Email batches
	//***************
	async fn create_email_batch(
		&self,
		hotel_id: HotelId,
		entries: Vec<EmailEntry>,
	) -> GvResult<EmailBatch> {
		batch::create_email_batch(&self.db, hotel_id, entries).await
	}

	async fn update_email_batch(&self, batch: &EmailBatch) -> GvResult<()> {
		batch::update_email_batch(&self.db, batch).await
	}

	async fn list_email_batches(&self, hotel_id: Option<HotelId>) -> GvResult<Vec<EmailBatch>> {
		batch::list_email_batches(&self.db, hotel_id).await
	}
}

// vim: ts=4
