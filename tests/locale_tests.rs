use chrono::NaiveDate;
use ldmlfmt::locale::fallback_chain;
use ldmlfmt::{BuiltinLocales, LocaleData, LocaleProvider, Localization, NameContext, NameWidth};

/// Built-in tables plus one extra locale with a comma decimal separator and
/// dotted time separator.
struct ExtraLocale {
    builtin: BuiltinLocales,
    extra: LocaleData,
}

impl ExtraLocale {
    fn new() -> Self {
        let builtin = BuiltinLocales::new();
        let mut extra = *builtin.data("en").unwrap();
        extra.decimal_separator = ',';
        extra.thousands_separator = ' ';
        extra.time_separator = '.';
        extra.currency_symbol = "¤";
        extra.first_day_of_week = 6;
        ExtraLocale { builtin, extra }
    }
}

impl LocaleProvider for ExtraLocale {
    fn data(&self, tag: &str) -> Option<&LocaleData> {
        match tag {
            "xx" => Some(&self.extra),
            _ => self.builtin.data(tag),
        }
    }

    fn parent(&self, tag: &str) -> Option<&str> {
        match tag {
            "xx-YY" => Some("xx"),
            _ => self.builtin.parent(tag),
        }
    }
}

#[test]
fn test_fallback_chains() {
    let provider = BuiltinLocales::new();
    assert_eq!(fallback_chain(&provider, "pt-AO"), vec!["pt-AO", "pt-PT", "pt", "en"]);
    assert_eq!(fallback_chain(&provider, "de-CH"), vec!["de-CH", "de", "en"]);
    assert_eq!(fallback_chain(&provider, "zz"), vec!["zz", "en"]);
}

#[test]
fn test_unknown_locale_uses_default_tables() {
    let mut l10n = Localization::new();
    l10n.set_locale("zz");
    assert_eq!(l10n.get_decimal_separator(), '.');
    assert_eq!(l10n.get_currency_symbol(None), "$");
    assert_eq!(l10n.get_month_names(NameWidth::Wide, NameContext::Format)[0], "January");
}

#[test]
fn test_separators_per_locale() {
    let mut l10n = Localization::new();
    let cases = [
        ("en", '.', ',', ':'),
        ("de", ',', '.', ':'),
        ("ru", ',', '\u{a0}', ':'),
        ("da", ',', '.', '.'),
        ("pt-PT", ',', '\u{a0}', ':'),
    ];
    for (locale, decimal, thousands, time) in cases {
        l10n.set_locale(locale);
        assert_eq!(l10n.get_decimal_separator(), decimal, "{locale}");
        assert_eq!(l10n.get_thousands_separator(), thousands, "{locale}");
        assert_eq!(l10n.get_time_separator(), time, "{locale}");
    }
}

#[test]
fn test_currency_symbols() {
    let mut l10n = Localization::new();
    assert_eq!(l10n.get_currency_symbol(None), "$");
    assert_eq!(l10n.get_currency_symbol(Some("RUB")), "₽");
    assert_eq!(l10n.get_currency_symbol(Some("USD")), "$");

    l10n.set_locale("ru");
    assert_eq!(l10n.get_currency_symbol(None), "₽");
    l10n.set_locale("pt-AO");
    assert_eq!(l10n.get_currency_symbol(None), "€");
}

#[test]
fn test_names_follow_locale() {
    let mut l10n = Localization::new();
    assert_eq!(l10n.get_period_names(), ["AM", "PM"]);
    assert_eq!(l10n.get_day_names(NameWidth::Wide)[0], "Sunday");

    l10n.set_locale("ru");
    assert_eq!(l10n.get_month_names(NameWidth::Wide, NameContext::Format)[2], "марта");
    assert_eq!(l10n.get_month_names(NameWidth::Wide, NameContext::Standalone)[2], "март");
}

#[test]
fn test_custom_provider() {
    let mut l10n = Localization::new().with_provider(ExtraLocale::new());
    l10n.set_locale("xx-YY");
    assert_eq!(l10n.locale_chain(), vec!["xx-YY", "xx", "en"]);
    assert_eq!(l10n.get_decimal_separator(), ',');
    assert_eq!(l10n.first_day_of_week_index(), 6);
    assert_eq!(l10n.get_currency_symbol(None), "¤");
    assert_eq!(l10n.format_number(1234.5, "#,##0.0"), "1 234,5");
    assert_eq!(l10n.parse_number("1 234,5", "#,##0.0"), Some(1234.5));

    let date = NaiveDate::from_ymd_opt(2015, 3, 2).unwrap().and_hms_opt(12, 34, 0).unwrap();
    assert_eq!(l10n.format_date(Some(&date), "MMMM d").as_deref(), Some("March 2"));

    l10n.set_locale("de");
    assert_eq!(l10n.get_decimal_separator(), ',');
    assert_eq!(l10n.get_thousands_separator(), '.');
}
