use ldmlfmt::{Config, FormatOptions, Localization, NumberFormat};

const GROUPED: &str = "#,##0.##;(#,##0.##)";

#[test]
fn test_plain_text() {
    let l10n = Localization::new();
    assert_eq!(l10n.parse_number("1.2", NumberFormat::Default), Some(1.2));
    assert_eq!(l10n.parse_number(".2", "#0.#"), Some(0.2));
    assert_eq!(l10n.parse_number("12,000", NumberFormat::Default), Some(12000.0));
    assert_eq!(l10n.parse_number("$ 1.2", NumberFormat::Default), Some(1.2));
    assert_eq!(l10n.parse_number("1.2 руб.", NumberFormat::Default), Some(1.2));
    assert_eq!(l10n.parse_number("-10", NumberFormat::Default), Some(-10.0));
}

#[test]
fn test_nothing_to_parse() {
    let l10n = Localization::new();
    assert_eq!(l10n.parse_number("", NumberFormat::Default), None);
    assert_eq!(l10n.parse_number(".", NumberFormat::Default), None);
    assert_eq!(l10n.parse_number("abc", "#0"), None);
    assert_eq!(l10n.parse_number("1234567890123456", NumberFormat::Default), None);
}

#[test]
fn test_negative_sub_pattern() {
    let l10n = Localization::new();
    assert_eq!(l10n.parse_number("(10)", "#0;(#0)"), Some(-10.0));
    assert_eq!(l10n.parse_number("12,345", GROUPED), Some(12345.0));
    assert_eq!(l10n.parse_number("(12,345)", GROUPED), Some(-12345.0));
    assert_eq!(l10n.parse_number("12,34", GROUPED), Some(1234.0));
    assert_eq!(l10n.parse_number("(12,34)", GROUPED), Some(-1234.0));
    assert_eq!(l10n.parse_number("(01)", GROUPED), Some(-1.0));
    assert_eq!(l10n.parse_number("(12,34.56)", GROUPED), Some(-1234.56));
    assert_eq!(l10n.parse_number("<<1.0>>", "#0.00;<<#0.00>>"), Some(-1.0));
}

#[test]
fn test_negative_marker_with_special_characters() {
    let l10n = Localization::new();
    let pattern = "##,##0.##;$*/\\?||(?)^   & [({#,##0.##])}";
    assert_eq!(l10n.parse_number("12,345", pattern), Some(12345.0));
    assert_eq!(l10n.parse_number("$*/\\?||(?)^   & [({12,345])}", pattern), Some(-12345.0));

    let minus = "##,##0.##;$minus^ {##,##0}";
    assert_eq!(l10n.parse_number("$minus^ {12,345}", minus), Some(-12345.0));
    assert_eq!(l10n.parse_number("$minus {12,345}", minus), Some(12345.0));
}

#[test]
fn test_named_formats() {
    let l10n = Localization::new();
    assert_eq!(l10n.parse_number("4B", "largeNumber"), Some(4000000000.0));
    assert_eq!(l10n.parse_number("41K", "thousands"), Some(41000.0));
    assert_eq!(l10n.parse_number("4,120M", "miLLions"), Some(4120000000.0));
    assert_eq!(l10n.parse_number("4B", "biLLions"), Some(4000000000.0));
    assert_eq!(l10n.parse_number("4T", "triLLions"), Some(4000000000000.0));
    assert_eq!(l10n.parse_number("15.5%", "percent"), Some(0.155));
    assert_eq!(l10n.parse_number("1K %", "thousands percent"), Some(10.0));
    assert_eq!(
        l10n.parse_number("1.2M %", FormatOptions::new().kind("percent largeNumber")),
        Some(12000.0)
    );
    assert_eq!(l10n.parse_number("1.2E+4", "exponential"), Some(12000.0));
}

#[test]
fn test_currency() {
    let l10n = Localization::new();
    let currency = || FormatOptions::new().kind("currency").precision(2);
    assert_eq!(l10n.parse_number("$1.00", currency()), Some(1.0));
    assert_eq!(l10n.parse_number("-$1.00", currency()), Some(-1.0));
    assert_eq!(l10n.parse_number("($1.00)", currency()), Some(-1.0));
}

#[test]
fn test_custom_separators() {
    let mut l10n = Localization::new();
    l10n.configure(Config::with_separators(',', '.'));
    l10n.set_locale("de");

    assert_eq!(l10n.parse_number("1,2", NumberFormat::Default), Some(1.2));
    assert_eq!(l10n.parse_number("1.2", NumberFormat::Default), Some(12.0));
    assert_eq!(l10n.parse_number("12.000", NumberFormat::Default), Some(12000.0));
}

#[test]
fn test_round_trip_through_fixed_point() {
    let l10n = Localization::new();
    let format = || FormatOptions::new().kind("fixedPoint").precision(2);
    for value in [0.0, 1.5, -1234.56, 987654.32] {
        let text = l10n.format_number(value, format());
        assert_eq!(l10n.parse_number(&text, format()), Some(value), "{text}");
    }
}
