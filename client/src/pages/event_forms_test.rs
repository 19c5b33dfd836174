use super::*;

#[test]
fn parse_event_id_accepts_numeric_segment() {
    assert_eq!(parse_event_id(Some("42")), Some(42));
}

#[test]
fn parse_event_id_rejects_garbage_and_zero() {
    assert_eq!(parse_event_id(Some("abc")), None);
    assert_eq!(parse_event_id(Some("0")), None);
    assert_eq!(parse_event_id(None), None);
}

#[test]
fn slug_label_falls_back() {
    let mut form = FormItem { id: 1, name: "Signup".to_owned(), public_slug: None };
    assert_eq!(slug_label(&form), "no-slug");
    form.public_slug = Some(String::new());
    assert_eq!(slug_label(&form), "no-slug");
    form.public_slug = Some("spring-expo".to_owned());
    assert_eq!(slug_label(&form), "spring-expo");
}
