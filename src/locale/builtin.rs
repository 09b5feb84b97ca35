//! Built-in locale data.

use super::{DatePatterns, LocaleData, LocaleProvider, Names};

/// Locales shipped with the crate together with CLDR parent relations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

impl BuiltinLocales {
    pub fn new() -> Self {
        BuiltinLocales
    }
}

impl LocaleProvider for BuiltinLocales {
    fn data(&self, tag: &str) -> Option<&LocaleData> {
        match tag {
            "en" => Some(&EN),
            "de" => Some(&DE),
            "ru" => Some(&RU),
            "da" => Some(&DA),
            "pt" => Some(&PT),
            "pt-PT" => Some(&PT_PT),
            _ => None,
        }
    }

    fn parent(&self, tag: &str) -> Option<&str> {
        PARENT_LOCALES
            .iter()
            .find(|(child, _)| *child == tag)
            .map(|(_, parent)| *parent)
    }
}

/// Subset of CLDR `parentLocales`.
const PARENT_LOCALES: &[(&str, &str)] = &[
    ("en-150", "en-001"),
    ("en-AU", "en-001"),
    ("en-CA", "en-001"),
    ("en-GB", "en-001"),
    ("en-IE", "en-001"),
    ("en-IN", "en-001"),
    ("en-NZ", "en-001"),
    ("en-SG", "en-001"),
    ("en-ZA", "en-001"),
    ("es-AR", "es-419"),
    ("es-CL", "es-419"),
    ("es-CO", "es-419"),
    ("es-MX", "es-419"),
    ("es-US", "es-419"),
    ("pt-AO", "pt-PT"),
    ("pt-CH", "pt-PT"),
    ("pt-CV", "pt-PT"),
    ("pt-GQ", "pt-PT"),
    ("pt-GW", "pt-PT"),
    ("pt-LU", "pt-PT"),
    ("pt-MO", "pt-PT"),
    ("pt-MZ", "pt-PT"),
    ("pt-ST", "pt-PT"),
    ("pt-TL", "pt-PT"),
    ("az-Arab", "root"),
    ("sr-Latn", "root"),
    ("zh-Hant", "root"),
];

const EN_MONTHS: Names<12> = Names {
    abbreviated: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    wide: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
};

pub(super) const EN: LocaleData = LocaleData {
    months: EN_MONTHS,
    months_standalone: EN_MONTHS,
    days: Names {
        abbreviated: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        wide: [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        narrow: ["S", "M", "T", "W", "T", "F", "S"],
    },
    quarters: Names {
        abbreviated: ["Q1", "Q2", "Q3", "Q4"],
        wide: ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"],
        narrow: ["1", "2", "3", "4"],
    },
    periods: ["AM", "PM"],
    date_patterns: DatePatterns {
        short_date: "M/d/y",
        short_time: "h:mm a",
        long_date: "EEEE, MMMM d, y",
        long_time: "h:mm:ss a",
        month_and_day: "MMMM d",
        month_and_year: "MMMM y",
        quarter_and_year: "QQQ y",
        short_date_short_time: "M/d/y, h:mm a",
        long_date_long_time: "EEEE, MMMM d, y, h:mm:ss a",
    },
    first_day_of_week: 0,
    currency_symbol: "$",
    decimal_separator: '.',
    thousands_separator: ',',
    time_separator: ':',
};

const DE: LocaleData = LocaleData {
    months: Names {
        abbreviated: [
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
            "Dez.",
        ],
        wide: [
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    },
    months_standalone: Names {
        abbreviated: [
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ],
        wide: [
            "Januar",
            "Februar",
            "März",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    },
    days: Names {
        abbreviated: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
        wide: [
            "Sonntag",
            "Montag",
            "Dienstag",
            "Mittwoch",
            "Donnerstag",
            "Freitag",
            "Samstag",
        ],
        narrow: ["S", "M", "D", "M", "D", "F", "S"],
    },
    quarters: Names {
        abbreviated: ["Q1", "Q2", "Q3", "Q4"],
        wide: ["1. Quartal", "2. Quartal", "3. Quartal", "4. Quartal"],
        narrow: ["1", "2", "3", "4"],
    },
    periods: ["AM", "PM"],
    date_patterns: DatePatterns {
        short_date: "dd.MM.y",
        short_time: "HH:mm",
        long_date: "EEEE, d. MMMM y",
        long_time: "HH:mm:ss",
        month_and_day: "d. MMMM",
        month_and_year: "MMMM y",
        quarter_and_year: "QQQ y",
        short_date_short_time: "dd.MM.y, HH:mm",
        long_date_long_time: "EEEE, d. MMMM y 'um' HH:mm:ss",
    },
    first_day_of_week: 1,
    currency_symbol: "€",
    decimal_separator: ',',
    thousands_separator: '.',
    time_separator: ':',
};

const RU: LocaleData = LocaleData {
    months: Names {
        abbreviated: [
            "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        wide: [
            "января",
            "февраля",
            "марта",
            "апреля",
            "мая",
            "июня",
            "июля",
            "августа",
            "сентября",
            "октября",
            "ноября",
            "декабря",
        ],
        narrow: ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"],
    },
    months_standalone: Names {
        abbreviated: [
            "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.",
            "нояб.", "дек.",
        ],
        wide: [
            "январь",
            "февраль",
            "март",
            "апрель",
            "май",
            "июнь",
            "июль",
            "август",
            "сентябрь",
            "октябрь",
            "ноябрь",
            "декабрь",
        ],
        narrow: ["Я", "Ф", "М", "А", "М", "И", "И", "А", "С", "О", "Н", "Д"],
    },
    days: Names {
        abbreviated: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
        wide: [
            "воскресенье",
            "понедельник",
            "вторник",
            "среда",
            "четверг",
            "пятница",
            "суббота",
        ],
        narrow: ["В", "П", "В", "С", "Ч", "П", "С"],
    },
    quarters: Names {
        abbreviated: ["1-й кв.", "2-й кв.", "3-й кв.", "4-й кв."],
        wide: ["1-й квартал", "2-й квартал", "3-й квартал", "4-й квартал"],
        narrow: ["1", "2", "3", "4"],
    },
    periods: ["AM", "PM"],
    date_patterns: DatePatterns {
        short_date: "dd.MM.y",
        short_time: "HH:mm",
        long_date: "EEEE, d MMMM y 'г'.",
        long_time: "HH:mm:ss",
        month_and_day: "d MMMM",
        month_and_year: "LLLL y 'г'.",
        quarter_and_year: "QQQ y 'г'.",
        short_date_short_time: "dd.MM.y, HH:mm",
        long_date_long_time: "EEEE, d MMMM y 'г'., HH:mm:ss",
    },
    first_day_of_week: 1,
    currency_symbol: "₽",
    decimal_separator: ',',
    thousands_separator: '\u{a0}',
    time_separator: ':',
};

const DA_MONTHS_WIDE: [&str; 12] = [
    "januar",
    "februar",
    "marts",
    "april",
    "maj",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "december",
];

const DA: LocaleData = LocaleData {
    months: Names {
        abbreviated: [
            "jan.", "feb.", "mar.", "apr.", "maj", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.",
            "dec.",
        ],
        wide: DA_MONTHS_WIDE,
        narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    },
    months_standalone: Names {
        abbreviated: [
            "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
        ],
        wide: DA_MONTHS_WIDE,
        narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    },
    days: Names {
        abbreviated: ["søn.", "man.", "tirs.", "ons.", "tors.", "fre.", "lør."],
        wide: [
            "søndag", "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag",
        ],
        narrow: ["S", "M", "T", "O", "T", "F", "L"],
    },
    quarters: Names {
        abbreviated: ["1. kvt.", "2. kvt.", "3. kvt.", "4. kvt."],
        wide: ["1. kvartal", "2. kvartal", "3. kvartal", "4. kvartal"],
        narrow: ["1", "2", "3", "4"],
    },
    periods: ["AM", "PM"],
    date_patterns: DatePatterns {
        short_date: "dd.MM.y",
        short_time: "HH.mm",
        long_date: "EEEE 'den' d. MMMM y",
        long_time: "HH.mm.ss",
        month_and_day: "d. MMMM",
        month_and_year: "MMMM y",
        quarter_and_year: "QQQ y",
        short_date_short_time: "dd.MM.y HH.mm",
        long_date_long_time: "EEEE 'den' d. MMMM y HH.mm.ss",
    },
    first_day_of_week: 1,
    currency_symbol: "kr.",
    decimal_separator: ',',
    thousands_separator: '.',
    time_separator: '.',
};

const PT_MONTHS: Names<12> = Names {
    abbreviated: [
        "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.",
        "dez.",
    ],
    wide: [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ],
    narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
};

const PT_DAYS: Names<7> = Names {
    abbreviated: ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."],
    wide: [
        "domingo",
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
    ],
    narrow: ["D", "S", "T", "Q", "Q", "S", "S"],
};

const PT_QUARTERS: Names<4> = Names {
    abbreviated: ["T1", "T2", "T3", "T4"],
    wide: ["1º trimestre", "2º trimestre", "3º trimestre", "4º trimestre"],
    narrow: ["1", "2", "3", "4"],
};

const PT_PATTERNS: DatePatterns = DatePatterns {
    short_date: "dd/MM/y",
    short_time: "HH:mm",
    long_date: "EEEE, d 'de' MMMM 'de' y",
    long_time: "HH:mm:ss",
    month_and_day: "d 'de' MMMM",
    month_and_year: "MMMM 'de' y",
    quarter_and_year: "QQQ 'de' y",
    short_date_short_time: "dd/MM/y HH:mm",
    long_date_long_time: "EEEE, d 'de' MMMM 'de' y HH:mm:ss",
};

const PT: LocaleData = LocaleData {
    months: PT_MONTHS,
    months_standalone: PT_MONTHS,
    days: PT_DAYS,
    quarters: PT_QUARTERS,
    periods: ["AM", "PM"],
    date_patterns: PT_PATTERNS,
    first_day_of_week: 0,
    currency_symbol: "R$",
    decimal_separator: ',',
    thousands_separator: '.',
    time_separator: ':',
};

const PT_PT: LocaleData = LocaleData {
    first_day_of_week: 1,
    currency_symbol: "€",
    thousands_separator: '\u{a0}',
    periods: ["da manhã", "da tarde"],
    ..PT
};
