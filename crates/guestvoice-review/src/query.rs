//! Read side: hotel-scoped listing of reviews and email batches.
//!
//! Scoping rule: staff callers are always constrained to their assigned
//! hotel, whatever filter they pass; admin callers name a hotel
//! explicitly, except for batch listing where they may omit it to see
//! every hotel at once.

use serde::Serialize;

use guestvoice_types::auth::{Auth, Role};
use guestvoice_types::store_adapter::{EmailBatch, EntryStatus, Review, StoreAdapter};

use crate::prelude::*;

/// Batch plus derived per-status counts, computed at read time
#[derive(Debug, Serialize)]
pub struct BatchSummary {
	#[serde(flatten)]
	pub batch: EmailBatch,
	#[serde(rename = "emailCount")]
	pub email_count: usize,
	#[serde(rename = "sentCount")]
	pub sent_count: usize,
	#[serde(rename = "failedCount")]
	pub failed_count: usize,
}

impl From<EmailBatch> for BatchSummary {
	fn from(batch: EmailBatch) -> Self {
		let email_count = batch.entries.len();
		let sent_count =
			batch.entries.iter().filter(|e| e.status == EntryStatus::Sent).count();
		let failed_count =
			batch.entries.iter().filter(|e| e.status == EntryStatus::Failed).count();
		Self { batch, email_count, sent_count, failed_count }
	}
}

/// Resolves the hotel scope for listings that may span hotels.
///
/// `None` means "all hotels" and only admins can reach it. Staff filters
/// are ignored in favor of their assignment.
fn resolve_scope(auth: &Auth, requested: Option<HotelId>) -> GvResult<Option<HotelId>> {
	match auth.role {
		Role::Admin => Ok(requested),
		Role::Staff => match auth.hotel_id {
			Some(hotel_id) => Ok(Some(hotel_id)),
			None => Err(Error::ValidationError("No hotel assigned".into())),
		},
	}
}

/// Resolves the single hotel for per-hotel operations (review listing and
/// batch sends): admins must name one, staff use their assignment.
pub fn resolve_hotel(auth: &Auth, requested: Option<HotelId>) -> GvResult<HotelId> {
	match resolve_scope(auth, requested)? {
		Some(hotel_id) => Ok(hotel_id),
		None => Err(Error::ValidationError("Please select a hotel".into())),
	}
}

/// Internal reviews for the caller's hotel, newest first
pub async fn list_reviews(
	store: &dyn StoreAdapter,
	auth: &Auth,
	requested: Option<HotelId>,
) -> GvResult<Vec<Review>> {
	// Review listing is always per hotel, even for admins
	let hotel_id = resolve_hotel(auth, requested)?;
	store.list_reviews(hotel_id).await
}

/// Batches for the caller's hotel scope; admins may omit the hotel to
/// list across all hotels
pub async fn list_batches(
	store: &dyn StoreAdapter,
	auth: &Auth,
	requested: Option<HotelId>,
) -> GvResult<Vec<BatchSummary>> {
	let scope = resolve_scope(auth, requested)?;
	let batches = store.list_email_batches(scope).await?;
	Ok(batches.into_iter().map(BatchSummary::from).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn admin() -> Auth {
		Auth { user_id: 1, role: Role::Admin, hotel_id: None }
	}

	fn staff(hotel: Option<HotelId>) -> Auth {
		Auth { user_id: 2, role: Role::Staff, hotel_id: hotel }
	}

	#[test]
	fn test_admin_must_pick_hotel_for_single_hotel_ops() {
		assert!(matches!(resolve_hotel(&admin(), None), Err(Error::ValidationError(_))));
		assert_eq!(resolve_hotel(&admin(), Some(HotelId(3))).ok(), Some(HotelId(3)));
	}

	#[test]
	fn test_admin_may_omit_hotel_for_spanning_scope() {
		assert_eq!(resolve_scope(&admin(), None).ok(), Some(None));
	}

	#[test]
	fn test_staff_forced_to_own_hotel() {
		// An explicit filter for another hotel is ignored
		assert_eq!(
			resolve_scope(&staff(Some(HotelId(1))), Some(HotelId(9))).ok(),
			Some(Some(HotelId(1)))
		);
		assert_eq!(
			resolve_hotel(&staff(Some(HotelId(1))), Some(HotelId(9))).ok(),
			Some(HotelId(1))
		);
	}

	#[test]
	fn test_staff_without_hotel_rejected() {
		assert!(matches!(resolve_scope(&staff(None), None), Err(Error::ValidationError(_))));
		assert!(matches!(resolve_hotel(&staff(None), None), Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
