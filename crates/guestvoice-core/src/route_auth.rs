//! Session auth middleware.
//!
//! Sessions themselves (login, password checks, cookie issuance) live
//! outside this service; what arrives here is a bearer JWT signed with the
//! process-wide secret. The middleware resolves it once into an [`Auth`]
//! request extension so handlers receive an explicit caller context
//! instead of re-parsing headers.

const SESSION_EXPIRE_HOURS: i64 = 8;

use axum::{
	body::Body,
	extract::State,
	http::{Request, response::Response},
	middleware::Next,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::prelude::*;
use guestvoice_types::auth::{Auth, Role};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SessionClaims {
	pub sub: i64,
	pub role: Role,
	pub hotel: Option<i64>,
	pub exp: i64,
}

/// Issues a session token. Used by operational tooling and tests; the
/// production login flow lives in a separate service.
pub fn generate_session_token(secret: &str, user_id: i64, role: Role, hotel: Option<HotelId>) -> GvResult<Box<str>> {
	let claims = SessionClaims {
		sub: user_id,
		role,
		hotel: hotel.map(|h| h.0),
		exp: now().0 + SESSION_EXPIRE_HOURS * 3600,
	};

	let token = jsonwebtoken::encode(
		&jsonwebtoken::Header::new(Algorithm::HS256),
		&claims,
		&jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
	)
	.map_err(|_| Error::PermissionDenied)?;

	Ok(token.into())
}

fn validate_token(secret: &str, token: &str) -> GvResult<Auth> {
	let decoding_key = DecodingKey::from_secret(secret.as_bytes());

	let token_data = decode::<SessionClaims>(
		token,
		&decoding_key,
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|_| Error::PermissionDenied)?;

	Ok(Auth {
		user_id: token_data.claims.sub,
		role: token_data.claims.role,
		hotel_id: token_data.claims.hotel.map(HotelId),
	})
}

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> GvResult<Response<Body>> {
	let auth_header = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::PermissionDenied)?;

	if !auth_header.starts_with("Bearer ") {
		return Err(Error::PermissionDenied);
	}

	let token = &auth_header[7..];
	let auth = validate_token(&app.config.jwt_secret, token)?;

	req.extensions_mut().insert(auth);

	Ok(next.run(req).await)
}


// vim: ts=4
