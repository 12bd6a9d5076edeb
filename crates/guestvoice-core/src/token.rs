//! Signed review-link tokens.
//!
//! A review token is a self-contained HS256 JWT carrying the hotel, the
//! guest email it was issued for, and a `purpose` marker, valid for seven
//! days. There is no revocation list; the token is the whole story.
//!
//! Successful verifications can be cached keyed by the raw token string.
//! The cache is a latency optimization only: the codec gives identical
//! results with or without it, and entries live no longer than the token's
//! own remaining validity.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::prelude::*;

const TOKEN_EXPIRE_DAYS: i64 = 7;
const PURPOSE_REVIEW: &str = "review";
const VERIFY_CACHE_SIZE: usize = 1024;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewClaims {
	#[serde(rename = "hotelId")]
	pub hotel_id: HotelId,
	pub email: Box<str>,
	pub purpose: Box<str>,
	pub exp: i64,
}

/// Cache for verified tokens, keyed by the raw token string
pub trait VerifyCache: Send + Sync {
	fn get(&self, token: &str) -> Option<ReviewClaims>;
	fn put(&self, token: &str, claims: &ReviewClaims);
}

/// Bounded in-memory cache. Entries past the token's own expiry are
/// treated as absent.
pub struct LruVerifyCache {
	entries: Mutex<LruCache<Box<str>, ReviewClaims>>,
}

impl LruVerifyCache {
	pub fn new() -> Self {
		let cap = NonZeroUsize::new(VERIFY_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN);
		Self { entries: Mutex::new(LruCache::new(cap)) }
	}
}

impl Default for LruVerifyCache {
	fn default() -> Self {
		Self::new()
	}
}

impl VerifyCache for LruVerifyCache {
	fn get(&self, token: &str) -> Option<ReviewClaims> {
		let mut entries = self.entries.lock();
		let claims = entries.get(token)?;
		if claims.exp <= now().0 {
			entries.pop(token);
			return None;
		}
		Some(claims.clone())
	}

	fn put(&self, token: &str, claims: &ReviewClaims) {
		self.entries.lock().put(token.into(), claims.clone());
	}
}

/// Cache that never remembers anything; used in tests
pub struct NoopVerifyCache;

impl VerifyCache for NoopVerifyCache {
	fn get(&self, _token: &str) -> Option<ReviewClaims> {
		None
	}

	fn put(&self, _token: &str, _claims: &ReviewClaims) {}
}

/// Issues and verifies review-link tokens with a process-wide secret
pub struct TokenCodec {
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	cache: Arc<dyn VerifyCache>,
}

impl std::fmt::Debug for TokenCodec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TokenCodec").finish_non_exhaustive()
	}
}

impl TokenCodec {
	pub fn new(secret: &str, cache: Arc<dyn VerifyCache>) -> Self {
		Self {
			encoding_key: EncodingKey::from_secret(secret.as_bytes()),
			decoding_key: DecodingKey::from_secret(secret.as_bytes()),
			cache,
		}
	}

	/// Issues a review token for a (hotel, guest email) pair, valid for
	/// seven days
	pub fn issue(&self, hotel_id: HotelId, email: &str) -> GvResult<Box<str>> {
		self.issue_with_ttl(hotel_id, email, TOKEN_EXPIRE_DAYS * 24 * 3600)
	}

	/// Issues a token with an explicit TTL in seconds. Negative TTLs
	/// produce already-expired tokens.
	pub fn issue_with_ttl(&self, hotel_id: HotelId, email: &str, ttl: i64) -> GvResult<Box<str>> {
		let claims = ReviewClaims {
			hotel_id,
			email: email.into(),
			purpose: PURPOSE_REVIEW.into(),
			exp: now().0 + ttl,
		};

		let token = encode(
			&jsonwebtoken::Header::new(Algorithm::HS256),
			&claims,
			&self.encoding_key,
		)
		.map_err(|err| Error::Internal(format!("Failed to sign review token: {}", err)))?;

		Ok(token.into())
	}

	/// Verifies a review token and returns its claims.
	///
	/// Every failure mode (bad signature, malformed token, elapsed expiry,
	/// wrong purpose) collapses into `Error::InvalidToken`; callers never
	/// learn which one it was.
	pub fn verify(&self, token: &str) -> GvResult<ReviewClaims> {
		if let Some(claims) = self.cache.get(token) {
			return Ok(claims);
		}

		let mut validation = Validation::new(Algorithm::HS256);
		validation.leeway = 0;

		let data = decode::<ReviewClaims>(token, &self.decoding_key, &validation)
			.map_err(|_| Error::InvalidToken)?;

		if &*data.claims.purpose != PURPOSE_REVIEW {
			return Err(Error::InvalidToken);
		}

		self.cache.put(token, &data.claims);
		Ok(data.claims)
	}
}


// vim: ts=4
