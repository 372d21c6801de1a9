//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_changed`, `last_updated` and command dispatch times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// The earliest representable timestamp, used when a record carries none.
#[must_use]
pub fn epoch() -> Timestamp {
    DateTime::<Utc>::UNIX_EPOCH
}
