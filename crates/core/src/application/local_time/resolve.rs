// Resolve Use Case

use crate::domain::{message, LocalTimestamp, PresentationPayload, SiteId};
use crate::error::Result;
use crate::port::{PreferenceStore, SiteDirectory, TimeProvider, Translator};

/// Execute the local time resolution
///
/// # Arguments
///
/// * `site_directory` - Site id -> timezone lookup
/// * `preference_store` - Default site source, consulted only when `requested` is `None`
/// * `translator` - Label translation
/// * `time_provider` - Clock (injected for determinism)
/// * `requested` - Site id from the request, if any
///
/// # Errors
///
/// `SiteNotFound` and `InvalidTimezone` are returned as-is; no default zone is
/// ever substituted.
pub fn execute(
    site_directory: &dyn SiteDirectory,
    preference_store: &dyn PreferenceStore,
    translator: &dyn Translator,
    time_provider: &dyn TimeProvider,
    requested: Option<SiteId>,
) -> Result<PresentationPayload> {
    let site = match requested {
        Some(site) => site,
        None => preference_store.default_site_id()?,
    };

    let zone = site_directory.timezone(site)?;
    let timestamp = LocalTimestamp::at(time_provider.now(), &zone)?;

    Ok(PresentationPayload {
        site_date_time: timestamp.formatted(),
        site_time_zone: zone.into_inner(),
        local_label: translator.translate(message::LOCAL_LABEL),
        site_label: translator.translate(message::SITE_LABEL),
    })
}
