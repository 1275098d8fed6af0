//! Unit tests for local time resolution

use super::resolve;
use super::LocalTimeService;
use crate::domain::{message, PresentationPayload, SiteId, TimezoneName, TEMPLATE_ID};
use crate::error::AppError;
use crate::port::preference_store::MockPreferenceStore;
use crate::port::presentation_sink::MockPresentationSink;
use crate::port::site_directory::MockSiteDirectory;
use crate::port::translator::MockTranslator;
use crate::port::{FixedTimeProvider, TimeProvider};
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use mockall::predicate::eq;
use std::sync::Arc;

fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn directory_with(site: i64, zone: &'static str) -> MockSiteDirectory {
    let mut sites = MockSiteDirectory::new();
    sites
        .expect_timezone()
        .with(eq(SiteId::new(site)))
        .returning(move |_| Ok(TimezoneName::new(zone)));
    sites
}

fn unused_preferences() -> MockPreferenceStore {
    let mut prefs = MockPreferenceStore::new();
    prefs.expect_default_site_id().never();
    prefs
}

fn echo_translator() -> MockTranslator {
    let mut translator = MockTranslator::new();
    translator
        .expect_translate()
        .returning(|key| format!("[{key}]"));
    translator
}

fn resolve_at(
    sites: &MockSiteDirectory,
    prefs: &MockPreferenceStore,
    clock: &dyn TimeProvider,
    requested: Option<SiteId>,
) -> crate::Result<PresentationPayload> {
    resolve::execute(sites, prefs, &echo_translator(), clock, requested)
}

fn assert_fixed_pattern(s: &str) {
    assert_eq!(s.len(), 19, "unexpected length: {s}");
    for (i, c) in s.char_indices() {
        match i {
            4 | 7 => assert_eq!(c, '-', "{s}"),
            10 => assert_eq!(c, ' ', "{s}"),
            13 | 16 => assert_eq!(c, ':', "{s}"),
            _ => assert!(c.is_ascii_digit(), "{s}"),
        }
    }
    assert!(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_utc_site_example() {
    let sites = directory_with(1, "UTC");
    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));

    let payload = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(1))).unwrap();

    assert_eq!(payload.site_time_zone, "UTC");
    assert_eq!(payload.site_date_time, "2024-03-10 12:00:00");
}

#[test]
fn test_new_york_site_during_daylight_time() {
    let sites = directory_with(2, "America/New_York");
    let now = instant("2024-07-04T18:15:30Z");
    let clock = FixedTimeProvider::new(now);

    let payload = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(2))).unwrap();

    let local = NaiveDateTime::parse_from_str(&payload.site_date_time, "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(now.naive_utc() - local, Duration::hours(4));
    assert_eq!(payload.site_date_time, "2024-07-04 14:15:30");
    assert_eq!(payload.site_time_zone, "America/New_York");
}

#[test]
fn test_payload_zone_equals_directory_value() {
    for (id, zone) in [
        (1, "UTC"),
        (2, "America/New_York"),
        (3, "Europe/Paris"),
        (4, "Asia/Kathmandu"),
        (5, "Pacific/Chatham"),
    ] {
        let sites = directory_with(id, zone);
        let clock = FixedTimeProvider::new(instant("2024-11-03T06:30:00Z"));

        let payload =
            resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(id))).unwrap();

        assert_eq!(payload.site_time_zone, zone);
        assert_fixed_pattern(&payload.site_date_time);
    }
}

#[test]
fn test_omitted_site_uses_default_from_preferences() {
    let mut prefs = MockPreferenceStore::new();
    prefs
        .expect_default_site_id()
        .times(1)
        .returning(|| Ok(SiteId::new(7)));

    let mut sites = MockSiteDirectory::new();
    sites
        .expect_timezone()
        .with(eq(SiteId::new(7)))
        .times(1)
        .returning(|_| Ok(TimezoneName::new("Europe/Paris")));

    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));
    let payload = resolve_at(&sites, &prefs, &clock, None).unwrap();

    assert_eq!(payload.site_time_zone, "Europe/Paris");
    assert_eq!(payload.site_date_time, "2024-03-10 13:00:00");
}

#[test]
fn test_explicit_site_skips_preferences() {
    let mut sites = MockSiteDirectory::new();
    sites
        .expect_timezone()
        .with(eq(SiteId::new(3)))
        .times(1)
        .returning(|_| Ok(TimezoneName::new("UTC")));

    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));
    assert!(resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(3))).is_ok());
}

#[test]
fn test_unknown_site_is_not_found() {
    let mut sites = MockSiteDirectory::new();
    sites
        .expect_timezone()
        .returning(|site| Err(AppError::SiteNotFound(site)));

    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));
    let err = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(999))).unwrap_err();

    assert_eq!(err, AppError::SiteNotFound(SiteId::new(999)));
}

#[test]
fn test_invalid_timezone_is_propagated() {
    let sites = directory_with(4, "Atlantis/Capital");
    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));

    let err = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(4))).unwrap_err();

    assert_eq!(err, AppError::InvalidTimezone("Atlantis/Capital".to_string()));
}

#[test]
fn test_missing_default_site_is_config_error() {
    let mut prefs = MockPreferenceStore::new();
    prefs
        .expect_default_site_id()
        .returning(|| Err(AppError::Config("no default site".to_string())));

    let mut sites = MockSiteDirectory::new();
    sites.expect_timezone().never();

    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));
    let err = resolve_at(&sites, &prefs, &clock, None).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_labels_come_from_fixed_message_keys() {
    let sites = directory_with(1, "UTC");
    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));

    let payload = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(1))).unwrap();

    assert_eq!(payload.local_label, format!("[{}]", message::LOCAL_LABEL));
    assert_eq!(payload.site_label, format!("[{}]", message::SITE_LABEL));
}

#[test]
fn test_each_label_translated_once() {
    let mut translator = MockTranslator::new();
    translator
        .expect_translate()
        .withf(|key| key == message::LOCAL_LABEL)
        .times(1)
        .returning(|_| "Your local time".to_string());
    translator
        .expect_translate()
        .withf(|key| key == message::SITE_LABEL)
        .times(1)
        .returning(|_| "Site time".to_string());

    let sites = directory_with(1, "UTC");
    let clock = FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"));
    let payload = resolve::execute(
        &sites,
        &unused_preferences(),
        &translator,
        &clock,
        Some(SiteId::new(1)),
    )
    .unwrap();

    assert_eq!(payload.local_label, "Your local time");
    assert_eq!(payload.site_label, "Site time");
}

#[test]
fn test_same_second_gives_same_timestamp() {
    let sites = directory_with(2, "America/New_York");
    let clock = FixedTimeProvider::new(Utc.timestamp_millis_opt(1_720_000_000_100).unwrap());

    let first = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(2))).unwrap();
    clock.advance(Duration::milliseconds(800));
    let second = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(2))).unwrap();

    assert_eq!(first.site_date_time, second.site_date_time);
}

#[test]
fn test_timestamp_never_decreases_across_seconds() {
    let sites = directory_with(3, "Europe/Paris");
    let clock = FixedTimeProvider::new(instant("2024-06-01T09:59:58Z"));

    let mut previous = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(3)))
        .unwrap()
        .site_date_time;
    for _ in 0..5 {
        clock.advance(Duration::milliseconds(700));
        let current = resolve_at(&sites, &unused_preferences(), &clock, Some(SiteId::new(3)))
            .unwrap()
            .site_date_time;
        assert!(current >= previous, "{current} < {previous}");
        previous = current;
    }
}

#[test]
fn test_service_renders_current_local_time_template() {
    let mut sink = MockPresentationSink::new();
    sink.expect_render()
        .withf(|template, payload| {
            template == TEMPLATE_ID
                && payload.site_time_zone == "UTC"
                && payload.site_date_time == "2024-03-10 12:00:00"
        })
        .times(1)
        .returning(|_, payload| Ok(format!("<div>{}</div>", payload.site_date_time)));

    let service = LocalTimeService::new(
        Arc::new(directory_with(1, "UTC")),
        Arc::new(unused_preferences()),
        Arc::new(echo_translator()),
        Arc::new(FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"))),
        Arc::new(sink),
    );

    let html = service.render(Some(SiteId::new(1))).unwrap();
    assert_eq!(html, "<div>2024-03-10 12:00:00</div>");
}

#[test]
fn test_service_does_not_render_unknown_site() {
    let mut sites = MockSiteDirectory::new();
    sites
        .expect_timezone()
        .returning(|site| Err(AppError::SiteNotFound(site)));

    let mut sink = MockPresentationSink::new();
    sink.expect_render().never();

    let service = LocalTimeService::new(
        Arc::new(sites),
        Arc::new(unused_preferences()),
        Arc::new(echo_translator()),
        Arc::new(FixedTimeProvider::new(instant("2024-03-10T12:00:00Z"))),
        Arc::new(sink),
    );

    let err = service.render(Some(SiteId::new(999))).unwrap_err();
    assert_eq!(err, AppError::SiteNotFound(SiteId::new(999)));
}
