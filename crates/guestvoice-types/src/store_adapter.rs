//! Store adapter trait and persistent entities.
//!
//! The core never talks to a database directly; it goes through
//! [`StoreAdapter`], which an adapter crate implements. The trait only
//! needs basic find/create/update semantics over three collections
//! (reviews, email batches, and the hotel/user read side).

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::auth::Role;
use crate::prelude::*;
use crate::types::Rating;

#[derive(Clone, Debug, Serialize)]
pub struct Hotel {
	pub id: HotelId,
	pub name: Box<str>,
	#[serde(rename = "googleReviewLink")]
	pub google_review_link: Option<Box<str>>,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
}

/// Staff account assigned to a hotel. Read side only: account management
/// and authentication live outside this service.
#[derive(Clone, Debug, Serialize)]
pub struct StaffUser {
	pub id: i64,
	pub username: Box<str>,
	pub email: Box<str>,
	pub role: Role,
	#[serde(rename = "hotelId")]
	pub hotel_id: Option<HotelId>,
	#[serde(rename = "lastLogin")]
	pub last_login: Timestamp,
}

#[derive(Clone, Debug, Serialize)]
pub struct Review {
	pub id: i64,
	#[serde(rename = "hotelId")]
	pub hotel_id: HotelId,
	#[serde(rename = "guestName")]
	pub guest_name: Box<str>,
	pub email: Option<Box<str>>,
	#[serde(rename = "stayDate")]
	pub stay_date: NaiveDate,
	pub rating: Rating,
	#[serde(rename = "reviewText")]
	pub review_text: Box<str>,
	#[serde(rename = "isInternal")]
	pub is_internal: bool,
	#[serde(rename = "emailSent")]
	pub email_sent: bool,
	#[serde(rename = "responseText")]
	pub response_text: Option<Box<str>>,
	#[serde(rename = "respondedAt")]
	pub responded_at: Option<Timestamp>,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
}

/// Fields needed to persist a new review
#[derive(Clone, Debug)]
pub struct CreateReviewData {
	pub hotel_id: HotelId,
	pub guest_name: String,
	pub email: Option<String>,
	pub stay_date: NaiveDate,
	pub rating: Rating,
	pub review_text: String,
	pub is_internal: bool,
	pub email_sent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
	Pending,
	Sent,
	Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
	Pending,
	Completed,
	Failed,
}

#[derive(Clone, Debug, Serialize)]
pub struct EmailEntry {
	pub email: Box<str>,
	pub status: EntryStatus,
	#[serde(rename = "sentAt")]
	pub sent_at: Option<Timestamp>,
	pub error: Option<Box<str>>,
}

impl EmailEntry {
	pub fn pending(email: impl Into<Box<str>>) -> Self {
		Self { email: email.into(), status: EntryStatus::Pending, sent_at: None, error: None }
	}
}

/// One "send requests" action. Mutated in place while entries resolve,
/// then persisted once; never deleted (append-only audit trail).
#[derive(Clone, Debug, Serialize)]
pub struct EmailBatch {
	pub id: i64,
	#[serde(rename = "hotelId")]
	pub hotel_id: HotelId,
	#[serde(rename = "emails")]
	pub entries: Vec<EmailEntry>,
	pub status: BatchStatus,
	#[serde(rename = "createdAt")]
	pub created_at: Timestamp,
	#[serde(rename = "completedAt")]
	pub completed_at: Option<Timestamp>,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Hotels
	async fn read_hotel(&self, hotel_id: HotelId) -> GvResult<Hotel>;
	/// Reads the staff user assigned to a hotel
	async fn read_staff_user(&self, hotel_id: HotelId) -> GvResult<StaffUser>;

	/// # Reviews
	async fn create_review(&self, data: &CreateReviewData) -> GvResult<Review>;
	/// Internal reviews for one hotel, newest first
	async fn list_reviews(&self, hotel_id: HotelId) -> GvResult<Vec<Review>>;

	/// # Email batches
	async fn create_email_batch(
		&self,
		hotel_id: HotelId,
		entries: Vec<EmailEntry>,
	) -> GvResult<EmailBatch>;
	/// Persists entry states and aggregate status in a single update
	async fn update_email_batch(&self, batch: &EmailBatch) -> GvResult<()>;
	/// All batches, optionally filtered by hotel, newest first
	async fn list_email_batches(&self, hotel_id: Option<HotelId>) -> GvResult<Vec<EmailBatch>>;
}

// vim: ts=4
