//! SMTP delivery using lettre.
//!
//! The transport sits behind the [`MailTransport`] trait so tests can
//! substitute a recording implementation. The production transport is
//! rebuilt per send from the configured SMTP block; configuration absence
//! is reported at send time, not at startup.

use async_trait::async_trait;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

use guestvoice_core::SmtpConfig;
use guestvoice_types::mailer::EmailMessage;

use crate::prelude::*;

const SMTP_TIMEOUT_SECS: u64 = 30;

#[async_trait]
pub trait MailTransport: Send + Sync {
	async fn send(&self, message: &EmailMessage) -> GvResult<()>;
}

/// SMTP transport backed by lettre
#[derive(Debug)]
pub struct SmtpMailTransport {
	config: Option<SmtpConfig>,
}

impl SmtpMailTransport {
	pub fn new(config: Option<SmtpConfig>) -> Self {
		Self { config }
	}

	fn config(&self) -> GvResult<&SmtpConfig> {
		self.config
			.as_ref()
			.ok_or_else(|| Error::ConfigError("Missing SMTP configuration".into()))
	}

	fn build_transport(&self, config: &SmtpConfig) -> GvResult<AsyncSmtpTransport<Tokio1Executor>> {
		// Port 465 means implicit TLS, anything else goes through STARTTLS
		let builder = if config.port == 465 {
			AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
		} else {
			AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
		}
		.map_err(|err| Error::ConfigError(format!("Invalid SMTP relay: {}", err)))?;

		Ok(builder
			.port(config.port)
			.credentials(Credentials::new(config.username.clone(), config.password.clone()))
			.timeout(Some(Duration::from_secs(SMTP_TIMEOUT_SECS)))
			.build())
	}
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
	async fn send(&self, message: &EmailMessage) -> GvResult<()> {
		let config = self.config()?;

		let builder = Message::builder()
			.from(
				config
					.from
					.parse()
					.map_err(|_| Error::ConfigError("Invalid from address".into()))?,
			)
			.to(message
				.to
				.parse()
				.map_err(|_| Error::ValidationError("Invalid recipient email address".into()))?)
			.subject(&message.subject);

		let email = if let Some(html_body) = &message.html_body {
			builder
				.multipart(
					MultiPart::alternative()
						.singlepart(SinglePart::plain(message.text_body.clone()))
						.singlepart(SinglePart::html(html_body.clone())),
				)
				.map_err(|err| Error::Internal(format!("Failed to build email: {}", err)))?
		} else {
			builder
				.singlepart(SinglePart::plain(message.text_body.clone()))
				.map_err(|err| Error::Internal(format!("Failed to build email: {}", err)))?
		};

		let mailer = self.build_transport(config)?;
		match mailer.send(email).await {
			Ok(_) => {
				info!("Email sent successfully to {}", message.to);
				Ok(())
			}
			Err(err) => {
				warn!("Failed to send email to {}: {}", message.to, err);
				Err(Error::EmailDeliveryError(err.to_string()))
			}
		}
	}
}


// vim: ts=4
