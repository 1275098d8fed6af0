// Site Directory backed by the settings file

use crate::settings::WidgetSettings;
use sitetime_core::domain::{SiteId, TimezoneName};
use sitetime_core::error::{AppError, Result};
use sitetime_core::port::SiteDirectory;
use std::collections::BTreeMap;

/// Site id -> timezone map loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct ConfigSiteDirectory {
    sites: BTreeMap<SiteId, TimezoneName>,
}

impl ConfigSiteDirectory {
    pub fn new(sites: impl IntoIterator<Item = (SiteId, TimezoneName)>) -> Self {
        Self {
            sites: sites.into_iter().collect(),
        }
    }

    pub fn from_settings(settings: &WidgetSettings) -> Self {
        Self::new(
            settings
                .sites
                .iter()
                .map(|s| (SiteId::from(s.id), TimezoneName::new(s.timezone.clone()))),
        )
    }

    /// Lowest configured site id
    pub fn first_site(&self) -> Option<SiteId> {
        self.sites.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl SiteDirectory for ConfigSiteDirectory {
    fn timezone(&self, site: SiteId) -> Result<TimezoneName> {
        self.sites
            .get(&site)
            .cloned()
            .ok_or(AppError::SiteNotFound(site))
    }
}
