//! Review submission, email batches, and the staff read side.
//!
//! This crate carries the domain core of GuestVoice:
//! - the token-gated review submission pipeline
//! - the email batch manager (create, process, aggregate)
//! - hotel-scoped listing of reviews and batches
//! - the axum handlers wiring all of it to the HTTP surface

pub mod batch;
pub mod handler;
pub mod query;
pub mod submit;

mod prelude;

// vim: ts=4
