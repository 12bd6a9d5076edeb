//! Email dispatch for GuestVoice
//!
//! This crate provides:
//! - Template rendering with variable substitution (Handlebars)
//! - SMTP email sending with lettre behind a transport trait
//! - The [`ReviewMailer`] implementation used by the review core

pub mod sender;
pub mod template;

pub use sender::{MailTransport, SmtpMailTransport};
pub use template::TemplateEngine;

mod prelude;

use async_trait::async_trait;
use std::sync::Arc;

use guestvoice_core::SmtpConfig;
use guestvoice_types::mailer::{EmailMessage, ReviewMailer};
use guestvoice_types::store_adapter::{Hotel, Review, StoreAdapter};

use crate::prelude::*;
use crate::template::{TPL_REVIEW_NOTIFICATION, TPL_REVIEW_REQUEST};

/// Dispatches review-request and staff-notification emails.
///
/// One send attempt per call; the caller records the outcome. Hotel and
/// staff lookups for notifications go through the store adapter.
pub struct SmtpReviewMailer {
	templates: TemplateEngine,
	transport: Arc<dyn MailTransport>,
	store: Arc<dyn StoreAdapter>,
	base_url: String,
}

impl std::fmt::Debug for SmtpReviewMailer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SmtpReviewMailer").field("base_url", &self.base_url).finish_non_exhaustive()
	}
}

impl SmtpReviewMailer {
	pub fn new(
		smtp: Option<SmtpConfig>,
		store: Arc<dyn StoreAdapter>,
		base_url: String,
	) -> GvResult<Self> {
		Ok(Self {
			templates: TemplateEngine::new()?,
			transport: Arc::new(SmtpMailTransport::new(smtp)),
			store,
			base_url,
		})
	}

	/// Same as [`SmtpReviewMailer::new`] but with an explicit transport;
	/// used by tests
	pub fn with_transport(
		transport: Arc<dyn MailTransport>,
		store: Arc<dyn StoreAdapter>,
		base_url: String,
	) -> GvResult<Self> {
		Ok(Self { templates: TemplateEngine::new()?, transport, store, base_url })
	}
}

#[async_trait]
impl ReviewMailer for SmtpReviewMailer {
	async fn send_review_request(
		&self,
		to: &str,
		hotel: &Hotel,
		review_link: &str,
	) -> GvResult<()> {
		// Positive path goes to the external review site when the hotel
		// has one, otherwise to the internal form
		let positive_link = hotel.google_review_link.as_deref().unwrap_or(review_link);

		let vars = serde_json::json!({
			"hotelName": &*hotel.name,
			"positiveLink": positive_link,
		});
		let (html_body, text_body) = self.templates.render(TPL_REVIEW_REQUEST, &vars)?;

		let message = EmailMessage {
			to: to.into(),
			subject: format!("How was your stay at {}?", hotel.name),
			text_body,
			html_body: Some(html_body),
		};

		self.transport.send(&message).await?;
		info!("Review request email sent to {}", to);
		Ok(())
	}

	async fn send_internal_notification(
		&self,
		hotel_id: HotelId,
		review: &Review,
	) -> GvResult<()> {
		let hotel = self.store.read_hotel(hotel_id).await?;
		let staff = self.store.read_staff_user(hotel_id).await?;

		let vars = serde_json::json!({
			"hotelName": &*hotel.name,
			"guestName": &*review.guest_name,
			"stayDate": review.stay_date.format("%Y-%m-%d").to_string(),
			"stars": "⭐".repeat(review.rating.value() as usize),
			"reviewText": &*review.review_text,
			"dashboardLink": format!("{}/dashboard", self.base_url),
		});
		let (html_body, text_body) = self.templates.render(TPL_REVIEW_NOTIFICATION, &vars)?;

		let message = EmailMessage {
			to: staff.email.into(),
			subject: "New Review Received".into(),
			text_body,
			html_body: Some(html_body),
		};

		self.transport.send(&message).await?;
		info!("Review notification sent for hotel {}", hotel_id);
		Ok(())
	}
}


// vim: ts=4
