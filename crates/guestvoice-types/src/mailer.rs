//! Mailer trait: the seam between the review core and SMTP delivery.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::store_adapter::{Hotel, Review};

/// Rendered email ready for the transport
#[derive(Clone, Debug)]
pub struct EmailMessage {
	pub to: String,
	pub subject: String,
	pub text_body: String,
	pub html_body: Option<String>,
}

/// Outbound review mail. One send attempt per call; retries are the
/// caller's problem (and out of scope here).
#[async_trait]
pub trait ReviewMailer: Debug + Send + Sync {
	/// Sends a review request to a guest.
	///
	/// `review_link` is the internal token-gated form URL; the positive
	/// path uses the hotel's external review link when one is configured,
	/// falling back to `review_link`.
	async fn send_review_request(
		&self,
		to: &str,
		hotel: &Hotel,
		review_link: &str,
	) -> GvResult<()>;

	/// Notifies the hotel's staff user about a freshly submitted review
	async fn send_internal_notification(&self, hotel_id: HotelId, review: &Review)
	-> GvResult<()>;
}

// vim: ts=4
