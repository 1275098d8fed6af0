// Dependency wiring (settings -> adapters -> service)

use anyhow::{Context, Result};
use sitetime_core::application::LocalTimeService;
use sitetime_core::port::{PresentationSink, SystemTimeProvider};
use sitetime_infra_config::{
    CatalogTranslator, ConfigPreferenceStore, ConfigSiteDirectory, WidgetSettings,
};
use std::sync::Arc;
use tracing::info;

pub fn translator(settings: &WidgetSettings) -> Result<CatalogTranslator> {
    match &settings.catalog {
        Some(path) => CatalogTranslator::with_catalog_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => CatalogTranslator::english().context("Built-in catalog is invalid"),
    }
}

pub fn build_service(
    settings: &WidgetSettings,
    sink: Arc<dyn PresentationSink>,
) -> Result<LocalTimeService> {
    let directory = ConfigSiteDirectory::from_settings(settings);
    let preferences = ConfigPreferenceStore::from_settings(settings.default_site, &directory);

    info!(sites = directory.len(), "Site directory ready");

    Ok(LocalTimeService::new(
        Arc::new(directory),
        Arc::new(preferences),
        Arc::new(translator(settings)?),
        Arc::new(SystemTimeProvider),
        sink,
    ))
}
