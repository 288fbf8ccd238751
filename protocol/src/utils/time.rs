//! Ripple-epoch time conversion.
//!
//! Ledger time fields (`Expiration`, `CancelAfter`, `FinishAfter`) count
//! seconds since 2000-01-01T00:00:00Z in a `u32`.

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::config::RIPPLE_EPOCH_OFFSET;

/// A time that cannot be expressed in Ripple-epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("{0} is before the Ripple epoch")]
    BeforeEpoch(DateTime<Utc>),

    #[error("{0} is past the last representable Ripple time")]
    AfterRange(DateTime<Utc>),
}

/// Converts Ripple-epoch seconds to a UTC timestamp.
pub fn ripple_time_to_datetime(ripple_time: u32) -> DateTime<Utc> {
    let unix = i64::from(ripple_time) + RIPPLE_EPOCH_OFFSET;
    // Every u32 offset from 2000 lands well inside chrono's range.
    Utc.timestamp_opt(unix, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Converts a UTC timestamp to Ripple-epoch seconds, dropping sub-second
/// precision.
pub fn datetime_to_ripple_time(time: DateTime<Utc>) -> Result<u32, TimeError> {
    let seconds = time.timestamp() - RIPPLE_EPOCH_OFFSET;
    if seconds < 0 {
        return Err(TimeError::BeforeEpoch(time));
    }
    u32::try_from(seconds).map_err(|_| TimeError::AfterRange(time))
}
