// Local Timestamp Domain Model

use crate::domain::TimezoneName;
use crate::error::{AppError, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Fixed display pattern: `YYYY-MM-DD HH:MM:SS`, 24h, zero-padded
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An instant expressed in a named IANA zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTimestamp(DateTime<Tz>);

impl LocalTimestamp {
    /// Convert `instant` into `zone` using the tz database rules in effect at
    /// that instant (DST and historical offsets included).
    pub fn at(instant: DateTime<Utc>, zone: &TimezoneName) -> Result<Self> {
        let tz: Tz = zone
            .as_str()
            .parse()
            .map_err(|_| AppError::InvalidTimezone(zone.as_str().to_string()))?;
        Ok(Self(instant.with_timezone(&tz)))
    }

    pub fn formatted(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}
