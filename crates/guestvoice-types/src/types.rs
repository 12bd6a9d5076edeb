//! Common types used throughout GuestVoice.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// HotelId //
//*********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HotelId(pub i64);

impl std::fmt::Display for HotelId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for HotelId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for HotelId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(HotelId(i64::deserialize(deserializer)?))
	}
}

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// Rating //
//********//

/// Guest rating, always within 1..=5
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rating(u8);

impl Rating {
	pub fn value(self) -> u8 {
		self.0
	}
}

impl TryFrom<i64> for Rating {
	type Error = crate::Error;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		if (1..=5).contains(&value) {
			Ok(Rating(value as u8))
		} else {
			Err(crate::Error::ValidationError("Rating must be between 1 and 5".into()))
		}
	}
}

impl<'de> Deserialize<'de> for Rating {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let raw = i64::deserialize(deserializer)?;
		Rating::try_from(raw).map_err(serde::de::Error::custom)
	}
}

impl std::fmt::Display for Rating {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}


// vim: ts=4
