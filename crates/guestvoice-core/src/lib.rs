//! Core infrastructure for the GuestVoice service.
//!
//! This crate provides:
//! - App state shared by every handler
//! - Configuration loaded from the environment
//! - The signed review-token codec with its verification cache
//! - Session auth middleware resolving the caller context
//! - The fire-and-forget notification queue

pub mod app;
pub mod config;
pub mod notify;
pub mod route_auth;
pub mod token;

mod prelude;

pub use app::{App, AppState};
pub use config::{AppConfig, SmtpConfig};

// vim: ts=4
