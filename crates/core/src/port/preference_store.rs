// Preference Store Port

use crate::domain::SiteId;
use crate::error::Result;

/// Preferences of the current user
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Site to use when the request names none.
    ///
    /// Every user has one in a correctly configured host; failure is an
    /// `AppError::Config`.
    fn default_site_id(&self) -> Result<SiteId>;
}
