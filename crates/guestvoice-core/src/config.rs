//! Service configuration loaded from the environment.
//!
//! SMTP settings are optional at startup: the dispatcher is only exercised
//! on demand, so a missing SMTP block surfaces as a `ConfigError` at send
//! time rather than a startup failure.

use crate::prelude::*;

const DEFAULT_LISTEN: &str = "0.0.0.0:3000";
const DEFAULT_DB_FILE: &str = "data/guestvoice.db";
const DEFAULT_BASE_URL: &str = "http://localhost:5173";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Clone, Debug)]
pub struct SmtpConfig {
	pub host: String,
	pub port: u16,
	pub username: String,
	pub password: String,
	pub from: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
	pub listen: String,
	pub db_file: String,
	/// Public base URL embedded in outbound review links
	pub base_url: String,
	/// Process-wide signing key for review and session tokens
	pub jwt_secret: String,
	pub smtp: Option<SmtpConfig>,
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
	pub fn from_env() -> Self {
		let listen = env_var("LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.into());
		let db_file = env_var("DATABASE").unwrap_or_else(|| DEFAULT_DB_FILE.into());
		let base_url = env_var("APP_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

		let jwt_secret = env_var("JWT_SECRET").unwrap_or_else(|| {
			warn!("JWT_SECRET not set, using an insecure development secret");
			"dev-secret".into()
		});

		let smtp = Self::smtp_from_env();
		if smtp.is_none() {
			warn!("SMTP not configured, outbound email will fail until it is");
		}

		Self { listen, db_file, base_url, jwt_secret, smtp }
	}

	fn smtp_from_env() -> Option<SmtpConfig> {
		let host = env_var("SMTP_HOST")?;
		let username = env_var("SMTP_USER")?;
		let password = env_var("SMTP_PASS")?;
		let port = env_var("SMTP_PORT")
			.and_then(|p| p.parse().ok())
			.unwrap_or(DEFAULT_SMTP_PORT);
		// Sender address falls back to the SMTP account
		let from = env_var("SMTP_FROM").unwrap_or_else(|| username.clone());

		Some(SmtpConfig { host, port, username, password, from })
	}
}


// vim: ts=4
