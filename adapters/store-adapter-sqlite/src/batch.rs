//! Email batch persistence.
//!
//! A batch is one row plus one entry row per recipient; entries keep
//! their input position. Updates rewrite the entry rows and the batch
//! row in a single transaction.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use guestvoice::prelude::*;
use guestvoice::store_adapter::{BatchStatus, EmailBatch, EmailEntry, EntryStatus};

use crate::{collect_res, map_res};

fn entry_status_str(status: EntryStatus) -> &'static str {
	match status {
		EntryStatus::Pending => "pending",
		EntryStatus::Sent => "sent",
		EntryStatus::Failed => "failed",
	}
}

fn batch_status_str(status: BatchStatus) -> &'static str {
	match status {
		BatchStatus::Pending => "pending",
		BatchStatus::Completed => "completed",
		BatchStatus::Failed => "failed",
	}
}

fn row_to_entry(row: &SqliteRow) -> Result<EmailEntry, sqlx::Error> {
	let status = match row.try_get("status")? {
		"pending" => EntryStatus::Pending,
		"sent" => EntryStatus::Sent,
		"failed" => EntryStatus::Failed,
		_ => return Err(sqlx::Error::RowNotFound),
	};

	Ok(EmailEntry {
		email: row.try_get("email")?,
		status,
		sent_at: row.try_get::<Option<i64>, _>("sent_at")?.map(Timestamp),
		error: row.try_get("error")?,
	})
}

fn row_to_batch(row: &SqliteRow, entries: Vec<EmailEntry>) -> Result<EmailBatch, sqlx::Error> {
	let status = match row.try_get("status")? {
		"pending" => BatchStatus::Pending,
		"completed" => BatchStatus::Completed,
		"failed" => BatchStatus::Failed,
		_ => return Err(sqlx::Error::RowNotFound),
	};

	Ok(EmailBatch {
		id: row.try_get("batch_id")?,
		hotel_id: HotelId(row.try_get("hotel_id")?),
		entries,
		status,
		created_at: Timestamp(row.try_get("created_at")?),
		completed_at: row.try_get::<Option<i64>, _>("completed_at")?.map(Timestamp),
	})
}

async fn read_entries(db: &SqlitePool, batch_id: i64) -> GvResult<Vec<EmailEntry>> {
	let rows = sqlx::query(
		"SELECT email, status, sent_at, error FROM email_batch_entries
		WHERE batch_id = ?1 ORDER BY position",
	)
	.bind(batch_id)
	.fetch_all(db)
	.await
	.inspect_err(crate::inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(row_to_entry))
}

pub(crate) async fn create_email_batch(
	db: &SqlitePool,
	hotel_id: HotelId,
	entries: Vec<EmailEntry>,
) -> GvResult<EmailBatch> {
	let mut tx = db.begin().await.inspect_err(crate::inspect).map_err(|_| Error::DbError)?;

	let res = sqlx::query(
		"INSERT INTO email_batches (hotel_id, status) VALUES (?1, 'pending')
		RETURNING batch_id, hotel_id, status, created_at, completed_at",
	)
	.bind(hotel_id.0)
	.fetch_one(&mut *tx)
	.await;

	let batch = map_res(res, |row| row_to_batch(&row, vec![]))?;

	for (position, entry) in entries.iter().enumerate() {
		sqlx::query(
			"INSERT INTO email_batch_entries (batch_id, position, email, status)
			VALUES (?1, ?2, ?3, ?4)",
		)
		.bind(batch.id)
		.bind(position as i64)
		.bind(&*entry.email)
		.bind(entry_status_str(entry.status))
		.execute(&mut *tx)
		.await
		.inspect_err(crate::inspect)
		.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(crate::inspect).map_err(|_| Error::DbError)?;

	Ok(EmailBatch { entries, ..batch })
}

pub(crate) async fn update_email_batch(db: &SqlitePool, batch: &EmailBatch) -> GvResult<()> {
	let mut tx = db.begin().await.inspect_err(crate::inspect).map_err(|_| Error::DbError)?;

	let res = sqlx::query(
		"UPDATE email_batches SET status = ?2, completed_at = ?3 WHERE batch_id = ?1",
	)
	.bind(batch.id)
	.bind(batch_status_str(batch.status))
	.bind(batch.completed_at.map(|ts| ts.0))
	.execute(&mut *tx)
	.await
	.inspect_err(crate::inspect)
	.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}

	sqlx::query("DELETE FROM email_batch_entries WHERE batch_id = ?1")
		.bind(batch.id)
		.execute(&mut *tx)
		.await
		.inspect_err(crate::inspect)
		.map_err(|_| Error::DbError)?;

	for (position, entry) in batch.entries.iter().enumerate() {
		sqlx::query(
			"INSERT INTO email_batch_entries (batch_id, position, email, status, sent_at, error)
			VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
		)
		.bind(batch.id)
		.bind(position as i64)
		.bind(&*entry.email)
		.bind(entry_status_str(entry.status))
		.bind(entry.sent_at.map(|ts| ts.0))
		.bind(entry.error.as_deref())
		.execute(&mut *tx)
		.await
		.inspect_err(crate::inspect)
		.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(crate::inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

pub(crate) async fn list_email_batches(
	db: &SqlitePool,
	hotel_id: Option<HotelId>,
) -> GvResult<Vec<EmailBatch>> {
	let rows = match hotel_id {
		Some(hotel_id) => {
			sqlx::query(
				"SELECT batch_id, hotel_id, status, created_at, completed_at
				FROM email_batches WHERE hotel_id = ?1
				ORDER BY created_at DESC, batch_id DESC",
			)
			.bind(hotel_id.0)
			.fetch_all(db)
			.await
		}
		None => {
			sqlx::query(
				"SELECT batch_id, hotel_id, status, created_at, completed_at
				FROM email_batches ORDER BY created_at DESC, batch_id DESC",
			)
			.fetch_all(db)
			.await
		}
	}
	.inspect_err(crate::inspect)
	.map_err(|_| Error::DbError)?;

	let mut batches = Vec::with_capacity(rows.len());
	for row in &rows {
		let batch = row_to_batch(row, vec![]).inspect_err(crate::inspect).map_err(|_| Error::DbError)?;
		let entries = read_entries(db, batch.id).await?;
		batches.push(EmailBatch { entries, ..batch });
	}
	Ok(batches)
}

// vim: ts=4
