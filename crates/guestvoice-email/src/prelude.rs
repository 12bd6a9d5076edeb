pub use guestvoice_types::prelude::*;

// vim: ts=4
