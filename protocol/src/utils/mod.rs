//! Helpers around the models.

pub mod time;

pub use time::{datetime_to_ripple_time, ripple_time_to_datetime, TimeError};
