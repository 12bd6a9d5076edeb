//! Shared in-memory test fixtures for the review crate.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

use guestvoice_core::app::{App, AppState};
use guestvoice_core::config::AppConfig;
use guestvoice_core::notify::{NotifyQueue, ReviewNotification};
use guestvoice_core::token::{NoopVerifyCache, TokenCodec};
use guestvoice_types::auth::{Auth, Role};
use guestvoice_types::mailer::ReviewMailer;
use guestvoice_types::store_adapter::{
	CreateReviewData, EmailBatch, EmailEntry, Hotel, Review, StaffUser, StoreAdapter,
};
use guestvoice_types::types::{HotelId, now};
use guestvoice_types::{Error, GvResult};

pub const TEST_SECRET: &str = "test-secret";

/// Store backed by plain vectors, newest entries at the back
#[derive(Debug, Default)]
pub struct MemoryStore {
	pub hotels: Mutex<Vec<Hotel>>,
	pub staff: Mutex<Vec<StaffUser>>,
	pub reviews: Mutex<Vec<Review>>,
	pub batches: Mutex<Vec<EmailBatch>>,
}

impl MemoryStore {
	pub fn with_hotel(self, id: i64, name: &str, google_link: Option<&str>) -> Self {
		self.hotels.lock().push(Hotel {
			id: HotelId(id),
			name: name.into(),
			google_review_link: google_link.map(Into::into),
			created_at: now(),
		});
		self
	}

	pub fn with_staff(self, hotel_id: i64, email: &str) -> Self {
		let next_id = self.staff.lock().len() as i64 + 1;
		self.staff.lock().push(StaffUser {
			id: next_id,
			username: email.split('@').next().unwrap_or("staff").into(),
			email: email.into(),
			role: Role::Staff,
			hotel_id: Some(HotelId(hotel_id)),
			last_login: now(),
		});
		self
	}

	pub fn with_review(self, hotel_id: i64, guest_name: &str, rating: i64) -> Self {
		let next_id = self.reviews.lock().len() as i64 + 1;
		self.reviews.lock().push(Review {
			id: next_id,
			hotel_id: HotelId(hotel_id),
			guest_name: guest_name.into(),
			email: None,
			stay_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
			rating: guestvoice_types::types::Rating::try_from(rating).unwrap(),
			review_text: "Fine".into(),
			is_internal: true,
			email_sent: true,
			response_text: None,
			responded_at: None,
			created_at: now(),
		});
		self
	}
}

#[async_trait]
impl StoreAdapter for MemoryStore {
	async fn read_hotel(&self, hotel_id: HotelId) -> GvResult<Hotel> {
		self.hotels
			.lock()
			.iter()
			.find(|h| h.id == hotel_id)
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn read_staff_user(&self, hotel_id: HotelId) -> GvResult<StaffUser> {
		self.staff
			.lock()
			.iter()
			.find(|u| u.hotel_id == Some(hotel_id))
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn create_review(&self, data: &CreateReviewData) -> GvResult<Review> {
		let mut reviews = self.reviews.lock();
		let review = Review {
			id: reviews.len() as i64 + 1,
			hotel_id: data.hotel_id,
			guest_name: data.guest_name.as_str().into(),
			email: data.email.as_deref().map(Into::into),
			stay_date: data.stay_date,
			rating: data.rating,
			review_text: data.review_text.as_str().into(),
			is_internal: data.is_internal,
			email_sent: data.email_sent,
			response_text: None,
			responded_at: None,
			created_at: now(),
		};
		reviews.push(review.clone());
		Ok(review)
	}

	async fn list_reviews(&self, hotel_id: HotelId) -> GvResult<Vec<Review>> {
		Ok(self
			.reviews
			.lock()
			.iter()
			.rev()
			.filter(|r| r.hotel_id == hotel_id && r.is_internal)
			.cloned()
			.collect())
	}

	async fn create_email_batch(
		&self,
		hotel_id: HotelId,
		entries: Vec<EmailEntry>,
	) -> GvResult<EmailBatch> {
		let mut batches = self.batches.lock();
		let batch = EmailBatch {
			id: batches.len() as i64 + 1,
			hotel_id,
			entries,
			status: guestvoice_types::store_adapter::BatchStatus::Pending,
			created_at: now(),
			completed_at: None,
		};
		batches.push(batch.clone());
		Ok(batch)
	}

	async fn update_email_batch(&self, batch: &EmailBatch) -> GvResult<()> {
		let mut batches = self.batches.lock();
		let slot = batches.iter_mut().find(|b| b.id == batch.id).ok_or(Error::NotFound)?;
		*slot = batch.clone();
		Ok(())
	}

	async fn list_email_batches(&self, hotel_id: Option<HotelId>) -> GvResult<Vec<EmailBatch>> {
		Ok(self
			.batches
			.lock()
			.iter()
			.rev()
			.filter(|b| hotel_id.is_none_or(|id| b.hotel_id == id))
			.cloned()
			.collect())
	}
}

/// Mailer that records every call; delivery to listed addresses fails
#[derive(Debug, Default)]
pub struct RecordingMailer {
	/// (recipient, review link) per request sent
	pub requests: Mutex<Vec<(String, String)>>,
	/// (hotel, guest name) per notification sent
	pub notifications: Mutex<Vec<(HotelId, String)>>,
	pub fail_for: Mutex<HashSet<String>>,
}

impl RecordingMailer {
	pub fn fail_address(&self, addr: &str) {
		self.fail_for.lock().insert(addr.to_string());
	}
}

#[async_trait]
impl ReviewMailer for RecordingMailer {
	async fn send_review_request(
		&self,
		to: &str,
		_hotel: &Hotel,
		review_link: &str,
	) -> GvResult<()> {
		if self.fail_for.lock().contains(to) {
			return Err(Error::EmailDeliveryError("mailbox unavailable".into()));
		}
		self.requests.lock().push((to.to_string(), review_link.to_string()));
		Ok(())
	}

	async fn send_internal_notification(
		&self,
		hotel_id: HotelId,
		review: &Review,
	) -> GvResult<()> {
		self.notifications.lock().push((hotel_id, review.guest_name.to_string()));
		Ok(())
	}
}

pub fn test_app(
	store: Arc<MemoryStore>,
	mailer: Arc<RecordingMailer>,
) -> (App, flume::Receiver<ReviewNotification>) {
	let (notify, rx) = NotifyQueue::new();
	let config = AppConfig {
		listen: "127.0.0.1:0".into(),
		db_file: ":memory:".into(),
		base_url: "http://localhost:5173".into(),
		jwt_secret: TEST_SECRET.into(),
		smtp: None,
	};
	let tokens = TokenCodec::new(&config.jwt_secret, Arc::new(NoopVerifyCache));

	let app = Arc::new(AppState { config, tokens, notify, store, mailer });
	(app, rx)
}

pub fn admin() -> Auth {
	Auth { user_id: 1, role: Role::Admin, hotel_id: None }
}

pub fn staff(hotel_id: i64) -> Auth {
	Auth { user_id: 2, role: Role::Staff, hotel_id: Some(HotelId(hotel_id)) }
}

// vim: ts=4
