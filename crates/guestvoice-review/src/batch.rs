//! Email batch manager.
//!
//! A batch is created for a set of recipients, processed one entry at a
//! time in input order, and persisted once after the final aggregation
//! pass. A failed entry never aborts the rest of the batch; the batch as
//! a whole is `Completed` only when every entry went out, otherwise
//! `Failed` (no partial-success status is modeled).

use regex::Regex;
use std::sync::LazyLock;

use guestvoice_types::store_adapter::{
	BatchStatus, EmailBatch, EmailEntry, EntryStatus, StoreAdapter,
};

use crate::prelude::*;

static EMAIL_RE: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub fn is_email(email: &str) -> bool {
	EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Creates a batch for the given recipients.
///
/// Malformed addresses are filtered out silently; an empty input or one
/// with no valid address at all is rejected before any entry is created.
pub async fn create_batch(
	store: &dyn StoreAdapter,
	hotel_id: HotelId,
	emails: &[String],
) -> GvResult<EmailBatch> {
	if emails.is_empty() {
		return Err(Error::ValidationError("No email addresses provided".into()));
	}

	let entries: Vec<EmailEntry> = emails
		.iter()
		.map(|e| e.trim())
		.filter(|e| is_email(e))
		.map(EmailEntry::pending)
		.collect();

	if entries.is_empty() {
		return Err(Error::ValidationError("No valid email addresses provided".into()));
	}

	store.create_email_batch(hotel_id, entries).await
}

/// Attempts delivery for every entry, then persists entry states and the
/// aggregate batch status in a single durable update.
///
/// Entries are processed sequentially in input order. Each entry gets a
/// freshly issued review token for its (hotel, email) pair.
pub async fn process_batch(app: &AppState, mut batch: EmailBatch) -> GvResult<EmailBatch> {
	let hotel = app.store.read_hotel(batch.hotel_id).await?;

	for entry in &mut batch.entries {
		let attempt = async {
			let token = app.tokens.issue(batch.hotel_id, &entry.email)?;
			let review_link = app.review_link(batch.hotel_id, &token);
			app.mailer.send_review_request(&entry.email, &hotel, &review_link).await
		};

		match attempt.await {
			Ok(()) => {
				entry.status = EntryStatus::Sent;
				entry.sent_at = Some(now());
			}
			Err(err) => {
				warn!("Review request to {} failed: {}", entry.email, err);
				entry.status = EntryStatus::Failed;
				entry.error = Some(err.to_string().into());
			}
		}
	}

	// Final aggregation pass, evaluated once after all attempts
	let all_sent = batch.entries.iter().all(|e| e.status == EntryStatus::Sent);
	batch.status = if all_sent { BatchStatus::Completed } else { BatchStatus::Failed };
	batch.completed_at = Some(now());

	app.store.update_email_batch(&batch).await?;

	info!(
		"Email batch {} for hotel {} finished: {:?} ({} entries)",
		batch.id,
		batch.hotel_id,
		batch.status,
		batch.entries.len()
	);
	Ok(batch)
}


// vim: ts=4
