// Site Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Site identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(i64);

impl SiteId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Read the `idSite` request parameter.
    ///
    /// Absent, empty or non-integer values count as absent, so the caller
    /// falls back to the user's default site. Any integer is passed through
    /// as given; zero or negative ids then fail the site lookup.
    pub fn from_request_param(raw: Option<&str>) -> Option<Self> {
        raw?.trim().parse::<i64>().ok().map(Self)
    }
}

impl From<u32> for SiteId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// IANA timezone name as stored in the site settings (not validated here)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimezoneName(String);

impl TimezoneName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for TimezoneName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for TimezoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
