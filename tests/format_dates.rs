use chrono::{NaiveDate, NaiveDateTime};
use ldmlfmt::{DateFormat, DatePartKind, FormatOptions, Localization, NameContext, NameWidth};

fn sample() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 3, 2)
        .unwrap()
        .and_hms_milli_opt(3, 4, 5, 6)
        .unwrap()
}

fn format(l10n: &Localization, value: &NaiveDateTime, format: &str) -> String {
    l10n.format_date(Some(value), format).unwrap()
}

#[test]
fn test_named_formats() {
    let l10n = Localization::new();
    let date = sample();

    let cases = [
        ("day", "2"),
        ("dayofweek", "Monday"),
        ("hour", "03"),
        ("longdate", "Monday, March 2, 2015"),
        ("longdatelongtime", "Monday, March 2, 2015, 3:04:05 AM"),
        ("longtime", "3:04:05 AM"),
        ("millisecond", "006"),
        ("minute", "04"),
        ("month", "March"),
        ("monthandday", "March 2"),
        ("monthandyear", "March 2015"),
        ("quarterandyear", "Q1 2015"),
        ("second", "05"),
        ("shortdate", "3/2/2015"),
        ("shortdateshorttime", "3/2/2015, 3:04 AM"),
        ("shorttime", "3:04 AM"),
        ("shortyear", "15"),
        ("year", "2015"),
        ("datetime-local", "2015-03-02T03:04:05"),
    ];
    for (name, expected) in cases {
        assert_eq!(format(&l10n, &date, name), expected, "{name}");
    }
}

#[test]
fn test_named_formats_ignore_case() {
    let l10n = Localization::new();
    assert_eq!(format(&l10n, &sample(), "shortDate"), "3/2/2015");
    assert_eq!(format(&l10n, &sample(), "LongDate"), "Monday, March 2, 2015");
}

#[test]
fn test_quarters() {
    let l10n = Localization::new();
    let expected = ["Q1", "Q1", "Q1", "Q2", "Q2", "Q2", "Q3", "Q3", "Q3", "Q4", "Q4", "Q4"];
    for (month, quarter) in (1..=12).zip(expected) {
        let date = NaiveDate::from_ymd_opt(2015, month, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format(&l10n, &date, "quarter"), quarter, "month {month}");
    }
}

#[test]
fn test_ldml_patterns() {
    let l10n = Localization::new();
    let date = sample();
    assert_eq!(format(&l10n, &date, "dd/MM/yyyy HH:mm:ss"), "02/03/2015 03:04:05");
    assert_eq!(format(&l10n, &date, "d MMMM yyyy"), "2 March 2015");
    assert_eq!(format(&l10n, &date, "yyyy MMMM d"), "2015 March 2");
    assert_eq!(format(&l10n, &date, "ss SSS"), "05 006");
    assert_eq!(format(&l10n, &date, "E"), "Mon");
    assert_eq!(format(&l10n, &date, "EEE"), "Mon");
    assert_eq!(format(&l10n, &date, "EEEEE"), "M");
    assert_eq!(format(&l10n, &date, "MMMMM"), "M");
    assert_eq!(format(&l10n, &date, "h 'o''clock' a"), "3 o'clock AM");
}

#[test]
fn test_explicit_pattern_is_not_a_name() {
    let l10n = Localization::new();
    assert_eq!(
        l10n.format_date(Some(&sample()), DateFormat::pattern("day")).as_deref(),
        Some("2AM2015")
    );
}

#[test]
fn test_options_syntax() {
    let l10n = Localization::new();
    let format: DateFormat = FormatOptions::new().kind("longdate").into();
    assert_eq!(
        l10n.format_date(Some(&sample()), format).as_deref(),
        Some("Monday, March 2, 2015")
    );
}

#[test]
fn test_without_format_or_value() {
    let l10n = Localization::new();
    assert_eq!(
        l10n.format_date(Some(&sample()), DateFormat::Default).as_deref(),
        Some("2015-03-02 03:04:05.006")
    );
    assert_eq!(l10n.format_date(None, "shortdate"), None);
}

#[test]
fn test_russian_month_contexts() {
    let mut l10n = Localization::new();
    l10n.set_locale("ru");
    assert_eq!(format(&l10n, &sample(), "d MMMM"), "2 марта");
    assert_eq!(format(&l10n, &sample(), "LLLL"), "март");
    assert_eq!(format(&l10n, &sample(), "month"), "март");
}

#[test]
fn test_time_separator_follows_locale() {
    let mut l10n = Localization::new();
    assert_eq!(l10n.get_time_separator(), ':');

    l10n.set_locale("da");
    let date = NaiveDate::from_ymd_opt(2021, 2, 1)
        .unwrap()
        .and_hms_opt(12, 34, 0)
        .unwrap();
    let text = format(&l10n, &date, "shorttime");
    assert_eq!(text, "12.34");
    assert!(text.find(l10n.get_time_separator()).is_some_and(|i| i > 0));
}

#[test]
fn test_format_uses_month_name() {
    let l10n = Localization::new();
    assert!(l10n.format_uses_month_name("monthAndDay"));
    assert!(l10n.format_uses_month_name("monthAndYear"));
    assert!(l10n.format_uses_month_name("y MMMM d"));
    assert!(!l10n.format_uses_month_name("y MMM d"));
    assert!(!l10n.format_uses_month_name("month"));
}

#[test]
fn test_format_uses_day_name() {
    let l10n = Localization::new();
    assert!(l10n.format_uses_day_name("dayofweek"));
    assert!(l10n.format_uses_day_name("longdate"));
    assert!(l10n.format_uses_day_name("longdatelongtime"));
    assert!(l10n.format_uses_day_name("EEEE"));
    assert!(!l10n.format_uses_day_name("EEE"));
    assert!(!l10n.format_uses_day_name("day"));
    assert!(!l10n.format_uses_day_name("shortDate"));
}

#[test]
fn test_format_parts() {
    use DatePartKind::*;

    let l10n = Localization::new();
    assert!(l10n.get_format_parts("dayofweek").is_empty());
    assert_eq!(l10n.get_format_parts("shortdate"), vec![Month, Day, Year]);
    assert_eq!(
        l10n.get_format_parts("longDateLongTime"),
        vec![Month, Day, Year, Hours, Minutes, Seconds]
    );
    assert_eq!(
        l10n.get_format_parts("d - M - y, hh:mm:ss [SSS]"),
        vec![Day, Month, Year, Hours, Minutes, Seconds, Milliseconds]
    );
    let joined: Vec<&str> = l10n
        .get_format_parts("shortdate")
        .into_iter()
        .map(DatePartKind::as_str)
        .collect();
    assert_eq!(joined.join(" "), "month day year");
}

#[test]
fn test_calendar_names() {
    let mut l10n = Localization::new();
    assert_eq!(
        l10n.get_month_names(NameWidth::Wide, NameContext::Format),
        [
            "January", "February", "March", "April", "May", "June", "July", "August", "September",
            "October", "November", "December"
        ]
    );
    assert_eq!(
        l10n.get_day_names(NameWidth::Wide),
        ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
    );
    assert_eq!(l10n.get_period_names(), ["AM", "PM"]);
    assert_eq!(l10n.get_quarter_names(NameWidth::Abbreviated), ["Q1", "Q2", "Q3", "Q4"]);

    l10n.set_locale("ru");
    assert_eq!(l10n.get_month_names(NameWidth::Wide, NameContext::Standalone)[2], "март");
    assert_eq!(l10n.get_month_names(NameWidth::Wide, NameContext::Format)[2], "марта");
}

#[test]
fn test_first_day_of_week() {
    let mut l10n = Localization::new();
    assert_eq!(l10n.first_day_of_week_index(), 0);
    l10n.set_locale("ru");
    assert_eq!(l10n.first_day_of_week_index(), 1);
    l10n.set_locale("en-US");
    assert_eq!(l10n.first_day_of_week_index(), 0);
}
