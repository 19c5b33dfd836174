use super::*;
use crate::util::analytics::RecordingAnalytics;

fn draft(name: &str, timezone: &str) -> OrganizationDraft {
    OrganizationDraft { name: name.to_owned(), timezone: timezone.to_owned(), ..OrganizationDraft::default() }
}

#[test]
fn timezone_list_starts_with_utc() {
    assert_eq!(TIMEZONES.len(), 10);
    assert_eq!(TIMEZONES[0].0, "UTC");
    assert!(TIMEZONES.iter().any(|(zone, _)| *zone == "Australia/Sydney"));
}

#[test]
fn short_name_reports_validation_error() {
    let analytics = RecordingAnalytics::default();
    let mut errors = BasicsErrors::default();
    errors.check_name("A", &analytics);
    assert_eq!(errors.name, Some("Organization name must be at least 2 characters"));
    assert_eq!(analytics.take(), vec!["invalid:name:Organization name must be at least 2 characters"]);
}

#[test]
fn fixing_name_clears_message_silently() {
    let analytics = RecordingAnalytics::default();
    let mut errors = BasicsErrors::default();
    errors.check_name("", &analytics);
    assert_eq!(errors.name, Some("Organization name is required"));
    analytics.take();
    errors.check_name("Acme", &analytics);
    assert_eq!(errors.name, None);
    assert!(analytics.take().is_empty());
}

#[test]
fn empty_timezone_is_flagged() {
    let analytics = RecordingAnalytics::default();
    let mut errors = BasicsErrors::default();
    errors.check_timezone("", &analytics);
    assert_eq!(errors.timezone, Some("Timezone is required"));
}

#[test]
fn untouched_form_is_not_clear() {
    assert!(!BasicsErrors::default().is_clear(&draft("", "UTC")));
    assert!(BasicsErrors::default().is_clear(&draft("Acme", "UTC")));
}

#[test]
fn ready_requires_valid_name_and_timezone() {
    assert!(basics_ready(&draft("Acme", "UTC")));
    assert!(!basics_ready(&draft("A", "UTC")));
    assert!(!basics_ready(&draft("   ", "UTC")));
    assert!(!basics_ready(&draft("Acme", "")));
    assert!(!basics_ready(&draft(&"x".repeat(256), "UTC")));
}
