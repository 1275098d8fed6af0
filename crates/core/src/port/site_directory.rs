// Site Directory Port

use crate::domain::{SiteId, TimezoneName};
use crate::error::Result;

/// Host site registry (read-only)
#[cfg_attr(test, mockall::automock)]
pub trait SiteDirectory: Send + Sync {
    /// Configured timezone of `site`.
    ///
    /// Returns `AppError::SiteNotFound` when no site has this id.
    fn timezone(&self, site: SiteId) -> Result<TimezoneName>;
}
