// Preference Store backed by the settings file

use crate::site_directory::ConfigSiteDirectory;
use sitetime_core::domain::SiteId;
use sitetime_core::error::{AppError, Result};
use sitetime_core::port::PreferenceStore;

/// Default site of the (single) configured user.
///
/// Without an explicit default the first configured site is used, the same
/// way the host picks the first site a user can view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigPreferenceStore {
    default_site: Option<SiteId>,
}

impl ConfigPreferenceStore {
    pub fn new(default_site: Option<SiteId>) -> Self {
        Self { default_site }
    }

    pub fn from_settings(default_site: Option<u32>, directory: &ConfigSiteDirectory) -> Self {
        Self::new(
            default_site
                .map(SiteId::from)
                .or_else(|| directory.first_site()),
        )
    }
}

impl PreferenceStore for ConfigPreferenceStore {
    fn default_site_id(&self) -> Result<SiteId> {
        self.default_site
            .ok_or_else(|| AppError::Config("no default site configured".to_string()))
    }
}
