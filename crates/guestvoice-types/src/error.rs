//! Error type shared by every GuestVoice crate.
//!
//! Handlers return `GvResult<T>` and rely on the `IntoResponse` impl to
//! serialize failures as `{"error": <message>, "status": <code>}`. Internal
//! details are logged server side and never sent to the caller.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type GvResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Malformed or missing input
	ValidationError(String),
	/// Submission intake missing its token or hotel
	InvalidRequest,
	/// Review token failed verification (signature, shape, or expiry)
	InvalidToken,
	/// Caller is not authenticated or not allowed
	PermissionDenied,
	NotFound,
	/// Required configuration (typically SMTP) is absent or unusable
	ConfigError(String),
	/// The mail transport rejected or timed out
	EmailDeliveryError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::InvalidRequest => write!(f, "Invalid request"),
			Error::InvalidToken => write!(f, "Invalid or expired token"),
			Error::PermissionDenied => write!(f, "Authentication required"),
			Error::NotFound => write!(f, "Not found"),
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
			Error::EmailDeliveryError(msg) => write!(f, "Failed to send email: {}", msg),
			Error::DbError => write!(f, "Database error"),
			Error::Internal(msg) => write!(f, "Internal error: {}", msg),
			Error::Io(err) => write!(f, "IO error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl Error {
	/// HTTP status class for this error
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::InvalidRequest | Error::InvalidToken | Error::PermissionDenied => {
				StatusCode::UNAUTHORIZED
			}
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::ConfigError(_)
			| Error::EmailDeliveryError(_)
			| Error::DbError
			| Error::Internal(_)
			| Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Message safe to expose to the caller
	fn public_message(&self) -> String {
		match self {
			Error::ValidationError(msg) => msg.clone(),
			Error::InvalidRequest => "Invalid request".into(),
			Error::InvalidToken => "Invalid or expired token".into(),
			Error::PermissionDenied => "Authentication required".into(),
			Error::NotFound => "Not found".into(),
			// 5xx details stay in the server log
			_ => "Internal server error".into(),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status_code();
		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!("request failed: {}", self);
		}
		let body = json!({
			"error": self.public_message(),
			"status": status.as_u16(),
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
