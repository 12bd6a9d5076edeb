//! App state type

use std::sync::Arc;

use guestvoice_types::mailer::ReviewMailer;
use guestvoice_types::store_adapter::StoreAdapter;

use crate::config::AppConfig;
use crate::notify::NotifyQueue;
use crate::token::TokenCodec;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub config: AppConfig,
	pub tokens: TokenCodec,
	pub notify: NotifyQueue,

	pub store: Arc<dyn StoreAdapter>,
	pub mailer: Arc<dyn ReviewMailer>,
}

pub type App = Arc<AppState>;

impl AppState {
	/// Internal review form URL for a hotel, with the guest's token
	/// embedded as query parameters
	pub fn review_link(&self, hotel_id: guestvoice_types::types::HotelId, token: &str) -> String {
		format!("{}/review?hotel={}&token={}", self.config.base_url, hotel_id, token)
	}

	/// Staff dashboard URL, linked from notification emails
	pub fn dashboard_link(&self) -> String {
		format!("{}/dashboard", self.config.base_url)
	}
}

// vim: ts=4
