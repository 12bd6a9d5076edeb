//! Startup wiring: storage, mailer, token codec, notification consumer.

use std::path::Path;
use std::sync::Arc;

use guestvoice_core::app::{App, AppState};
use guestvoice_core::config::AppConfig;
use guestvoice_core::notify::{NotifyQueue, spawn_consumer};
use guestvoice_core::token::{LruVerifyCache, TokenCodec};
use guestvoice_email::SmtpReviewMailer;
use guestvoice_store_adapter_sqlite::StoreAdapterSqlite;
use guestvoice_types::prelude::*;

pub async fn init(config: AppConfig) -> GvResult<App> {
	if let Some(dir) = Path::new(&config.db_file).parent() {
		if !dir.as_os_str().is_empty() {
			tokio::fs::create_dir_all(dir).await?;
		}
	}

	let store = Arc::new(StoreAdapterSqlite::new(&config.db_file).await?);
	let mailer = Arc::new(SmtpReviewMailer::new(
		config.smtp.clone(),
		store.clone(),
		config.base_url.clone(),
	)?);

	let tokens = TokenCodec::new(&config.jwt_secret, Arc::new(LruVerifyCache::new()));

	// The consumer task outlives this function; it stops once the queue
	// sender inside AppState is dropped
	let (notify, rx) = NotifyQueue::new();
	spawn_consumer(rx, mailer.clone());

	Ok(Arc::new(AppState { config, tokens, notify, store, mailer }))
}

// vim: ts=4
