// Local Time Service - "what time is it at this site right now"

pub mod resolve;

#[cfg(test)]
mod resolve_test;

use crate::domain::{PresentationPayload, SiteId, TEMPLATE_ID};
use crate::error::Result;
use crate::port::{PreferenceStore, PresentationSink, SiteDirectory, TimeProvider, Translator};
use std::sync::Arc;
use tracing::debug;

/// Widget service: resolves the payload and renders it through the host
pub struct LocalTimeService {
    site_directory: Arc<dyn SiteDirectory>,
    preference_store: Arc<dyn PreferenceStore>,
    translator: Arc<dyn Translator>,
    time_provider: Arc<dyn TimeProvider>,
    sink: Arc<dyn PresentationSink>,
}

impl LocalTimeService {
    pub fn new(
        site_directory: Arc<dyn SiteDirectory>,
        preference_store: Arc<dyn PreferenceStore>,
        translator: Arc<dyn Translator>,
        time_provider: Arc<dyn TimeProvider>,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        Self {
            site_directory,
            preference_store,
            translator,
            time_provider,
            sink,
        }
    }

    /// Build the presentation payload for `requested` (or the user's default site)
    pub fn resolve(&self, requested: Option<SiteId>) -> Result<PresentationPayload> {
        resolve::execute(
            self.site_directory.as_ref(),
            self.preference_store.as_ref(),
            self.translator.as_ref(),
            self.time_provider.as_ref(),
            requested,
        )
    }

    /// Resolve, then render the `currentLocalTime` template
    pub fn render(&self, requested: Option<SiteId>) -> Result<String> {
        let payload = self.resolve(requested)?;
        debug!(
            requested_site = ?requested,
            site_time_zone = %payload.site_time_zone,
            template = TEMPLATE_ID,
            "Rendering local time widget"
        );
        self.sink.render(TEMPLATE_ID, &payload)
    }
}
