pub use crate::error::{Error, GvResult};
pub use crate::types::{HotelId, Timestamp, now};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
