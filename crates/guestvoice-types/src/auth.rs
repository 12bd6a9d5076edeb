//! Authenticated caller context.
//!
//! Resolved once at the auth boundary and carried through handlers as a
//! request extension. Handlers branch on the [`Role`] enum instead of
//! re-inspecting role strings.

use serde::{Deserialize, Serialize};

use crate::types::HotelId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
	#[serde(rename = "admin")]
	Admin,
	/// Hotel-scoped staff account (serialized as "user" on the wire)
	#[serde(rename = "user")]
	Staff,
}

#[derive(Clone, Debug)]
pub struct Auth {
	pub user_id: i64,
	pub role: Role,
	/// Assigned hotel; required for staff, unset for admins
	pub hotel_id: Option<HotelId>,
}

impl Auth {
	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_role_wire_names() {
		assert_eq!(serde_json::to_string(&Role::Admin).ok().as_deref(), Some("\"admin\""));
		assert_eq!(serde_json::to_string(&Role::Staff).ok().as_deref(), Some("\"user\""));
	}
}

// vim: ts=4
