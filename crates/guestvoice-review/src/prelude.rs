pub use guestvoice_core::app::{App, AppState};
pub use guestvoice_types::prelude::*;

// vim: ts=4
