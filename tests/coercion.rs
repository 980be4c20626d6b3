use chrono::{NaiveDate, NaiveTime};
use url::Url;

use metaleaf::coerce::coerce;
use metaleaf::datatype::{Content, DataKind, RawContent};
use metaleaf::error::MetaleafError;

fn text(s: &str) -> RawContent {
    RawContent::from(s)
}

#[test]
fn integer_from_string_truncates_at_decimal_separator() {
    assert_eq!(
        coerce(&text("12.7"), DataKind::Int).unwrap(),
        Content::Int(12)
    );
    assert_eq!(
        coerce(&text("12,7"), DataKind::Int).unwrap(),
        Content::Int(12)
    );
    assert_eq!(coerce(&text("42"), DataKind::Int).unwrap(), Content::Int(42));
    assert_eq!(
        coerce(&text("-17"), DataKind::Int).unwrap(),
        Content::Int(-17)
    );
}

#[test]
fn integer_rejects_non_numeric_string() {
    assert!(coerce(&text("abc"), DataKind::Int).is_err());
}

#[test]
fn integer_narrows_float_by_truncation() {
    assert_eq!(
        coerce(&RawContent::Float(12.9), DataKind::Int).unwrap(),
        Content::Int(12)
    );
    assert_eq!(
        coerce(&RawContent::Float(-3.7), DataKind::Int).unwrap(),
        Content::Int(-3)
    );
}

#[test]
fn float_widens_and_parses() {
    assert_eq!(
        coerce(&text("3"), DataKind::Float).unwrap(),
        Content::Float(3.0)
    );
    assert_eq!(
        coerce(&RawContent::Int(3), DataKind::Float).unwrap(),
        Content::Float(3.0)
    );
    assert!(coerce(&text("x"), DataKind::Float).is_err());
}

#[test]
fn string_promotes_single_character() {
    assert_eq!(
        coerce(&RawContent::Char('x'), DataKind::String).unwrap(),
        Content::Text(String::from("x"))
    );
    assert!(coerce(&RawContent::Int(1), DataKind::String).is_err());
}

#[test]
fn n_tuple_requires_semicolon_separated_integers() {
    assert_eq!(
        coerce(&text("1;2"), DataKind::NTuple).unwrap(),
        Content::NTuple(1, 2)
    );
    assert!(coerce(&text("1,2"), DataKind::NTuple).is_err());
    assert!(coerce(&text("1;"), DataKind::NTuple).is_err());
    assert!(coerce(&RawContent::Int(1), DataKind::NTuple).is_err());
}

#[test]
fn date_parses_exact_pattern() {
    let expected = NaiveDate::from_ymd_opt(2021, 5, 1).unwrap();
    assert_eq!(
        coerce(&text("2021-05-01"), DataKind::Date).unwrap(),
        Content::Date(expected)
    );
    assert!(coerce(&text("2021-13-40"), DataKind::Date).is_err());
    assert!(coerce(&text("01.05.2021"), DataKind::Date).is_err());
}

#[test]
fn date_from_datetime_drops_time_component() {
    let dt = NaiveDate::from_ymd_opt(2021, 5, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();
    assert_eq!(
        coerce(&RawContent::Datetime(dt), DataKind::Date).unwrap(),
        Content::Date(dt.date())
    );
}

#[test]
fn time_parses_exact_pattern() {
    let expected = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
    assert_eq!(
        coerce(&text("12:30:00"), DataKind::Time).unwrap(),
        Content::Time(expected)
    );
    assert!(coerce(&text("noonish"), DataKind::Time).is_err());
}

#[test]
fn datetime_parses_exact_pattern() {
    let expected = NaiveDate::from_ymd_opt(2021, 5, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap();
    assert_eq!(
        coerce(&text("2021-05-01 12:30:00"), DataKind::Datetime).unwrap(),
        Content::Datetime(expected)
    );
    assert!(coerce(&text("2021-05-01"), DataKind::Datetime).is_err());
}

#[test]
fn boolean_string_coercion_never_rejects() {
    assert_eq!(
        coerce(&text("true"), DataKind::Boolean).unwrap(),
        Content::Boolean(true)
    );
    assert_eq!(
        coerce(&text("TRUE"), DataKind::Boolean).unwrap(),
        Content::Boolean(true)
    );
    assert_eq!(
        coerce(&text("false"), DataKind::Boolean).unwrap(),
        Content::Boolean(false)
    );
    // documented asymmetry: anything else is false, not a rejection
    assert_eq!(
        coerce(&text("maybe"), DataKind::Boolean).unwrap(),
        Content::Boolean(false)
    );
    assert!(coerce(&RawContent::Int(1), DataKind::Boolean).is_err());
}

#[test]
fn url_requires_absolute_url() {
    let u = Url::parse("https://example.org/data").unwrap();
    assert_eq!(
        coerce(&text("https://example.org/data"), DataKind::Url).unwrap(),
        Content::Url(u)
    );
    assert!(coerce(&text("not a url"), DataKind::Url).is_err());
    assert!(coerce(&RawContent::Int(1), DataKind::Url).is_err());
}

#[test]
fn person_accepts_strings_only() {
    assert_eq!(
        coerce(&text("Jane Doe"), DataKind::Person).unwrap(),
        Content::Text(String::from("Jane Doe"))
    );
    assert!(coerce(&RawContent::Int(1), DataKind::Person).is_err());
}

#[test]
fn binary_passes_the_raw_reference_through() {
    assert_eq!(
        coerce(&text("file:///tmp/data.dat"), DataKind::Binary).unwrap(),
        Content::Binary(String::from("file:///tmp/data.dat"))
    );
    assert!(coerce(&RawContent::Int(1), DataKind::Binary).is_err());
}

#[test]
fn empty_content_is_a_warning_not_a_rejection() {
    assert_eq!(coerce(&text(""), DataKind::Int).unwrap(), Content::Empty);
    assert!(coerce(&text(""), DataKind::Date).unwrap().is_empty());
}

#[test]
fn rejections_name_both_sides() {
    let e = coerce(&RawContent::Boolean(true), DataKind::Date).unwrap_err();
    match e {
        MetaleafError::Conversion { found, requested } => {
            assert_eq!(found, "Boolean");
            assert_eq!(requested, "date");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn canonical_literals_round_trip() {
    let cases = [
        ("string", "word"),
        ("text", "word"),
        ("int", "42"),
        ("boolean", "true"),
        ("date", "2021-05-01"),
        ("time", "12:30:00"),
        ("datetime", "2021-05-01 12:30:00"),
        ("n-tuple", "1;2"),
        ("url", "https://example.org/data"),
        ("person", "Jane Doe"),
    ];
    for (tag, literal) in cases {
        let kind = DataKind::parse(tag).unwrap();
        let content = coerce(&text(literal), kind).unwrap();
        assert_eq!(content.to_string(), literal, "round trip for {tag}");
    }
}
