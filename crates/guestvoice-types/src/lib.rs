//! Shared types, adapter traits, and core utilities for GuestVoice.
//!
//! This crate contains the foundational types that are shared between the
//! server crate, the feature crates, and the storage adapter. Keeping them
//! in a separate crate lets the adapter compile in parallel with the
//! feature modules.

pub mod auth;
pub mod error;
pub mod mailer;
pub mod prelude;
pub mod store_adapter;
pub mod types;

pub use error::{Error, GvResult};

// vim: ts=4
