//! Message catalog and template substitution.
//!
//! Messages are kept per locale and looked up along a fallback chain, so a
//! `pt-AO` context sees `pt-PT` messages before `pt` ones and falls back to
//! the built-in English defaults last.

use std::collections::HashMap;

use crate::locale::DEFAULT_LOCALE;

/// English messages every catalog starts with.
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("Loading", "Loading..."),
    ("Yes", "Yes"),
    ("No", "No"),
    ("Cancel", "Cancel"),
    ("OK", "OK"),
    ("Select", "Select..."),
    ("Search", "Search"),
    ("Clear", "Clear"),
    ("Done", "Done"),
    ("Back", "Back"),
];

/// Messages per locale tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Catalog holding the built-in English defaults.
    pub fn new() -> Self {
        let defaults = DEFAULT_MESSAGES
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        let mut locales = HashMap::new();
        locales.insert(DEFAULT_LOCALE.to_string(), defaults);
        MessageCatalog { locales }
    }

    /// Merge `entries` into `locale`. Existing keys are overwritten, other
    /// keys of the locale are kept.
    pub fn load<I, K, V>(&mut self, locale: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let messages = self.locales.entry(locale.to_string()).or_default();
        for (key, value) in entries {
            messages.insert(key.into(), value.into());
        }
    }

    /// Merge several locales at once.
    pub fn load_all(&mut self, messages: HashMap<String, HashMap<String, String>>) {
        for (locale, entries) in messages {
            self.load(&locale, entries);
        }
    }

    /// Template for `key` from the first chain member that has it.
    pub fn lookup<S: AsRef<str>>(&self, key: &str, chain: &[S]) -> Option<&str> {
        chain.iter().find_map(|tag| {
            self.locales
                .get(tag.as_ref())
                .and_then(|messages| messages.get(key))
                .map(String::as_str)
        })
    }

    /// Messages loaded for exactly `locale`.
    pub fn locale_messages(&self, locale: &str) -> Option<&HashMap<String, String>> {
        self.locales.get(locale)
    }

    pub fn by_locale(&self) -> &HashMap<String, HashMap<String, String>> {
        &self.locales
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolved template, reusable with different arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormatter {
    template: String,
}

impl MessageFormatter {
    pub(crate) fn new(template: impl Into<String>) -> Self {
        MessageFormatter {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn format(&self, args: &[&str]) -> String {
        substitute(&self.template, args)
    }
}

/// Replace `{0}`, `{1}` ... with `args`. Placeholders without an argument
/// are left as written.
///
/// # Examples
/// ```
/// use ldmlfmt::message::substitute;
///
/// assert_eq!(substitute("Hello, {0} {1}", &["Ivan", "Ivanov"]), "Hello, Ivan Ivanov");
/// assert_eq!(substitute("{0} of {2}", &["one"]), "one of {2}");
/// ```
pub fn substitute(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let closed = digits > 0 && after[digits..].starts_with('}');
        let arg = if closed {
            after[..digits].parse::<usize>().ok().and_then(|index| args.get(index))
        } else {
            None
        };
        match arg {
            Some(arg) => {
                result.push_str(arg);
                rest = &after[digits + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Readable caption for a message key: `"unknownKey"` becomes
/// `"Unknown key"`.
pub fn humanize(key: &str) -> String {
    let mut caption = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        match ch {
            '_' | '.' | '-' | ' ' => {
                if !caption.is_empty() && !caption.ends_with(' ') {
                    caption.push(' ');
                }
                prev = Some(' ');
                continue;
            }
            _ => {}
        }
        let word_start =
            ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if word_start && !caption.ends_with(' ') {
            caption.push(' ');
        }
        if caption.is_empty() {
            caption.extend(ch.to_uppercase());
        } else {
            caption.extend(ch.to_lowercase());
        }
        prev = Some(ch);
    }
    caption.trim_end().to_string()
}

/// Replace every `<prefix>key` marker in `text` using `lookup`.
///
/// `<prefix><prefix>key` renders as `<prefix>key`. A prefix that follows a
/// word character, `-` or another prefix is plain text, so e-mail addresses
/// pass through. Keys `lookup` does not resolve stay as written.
pub(crate) fn localize<F>(text: &str, prefix: char, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        rest = &rest[ch.len_utf8()..];

        let is_marker = ch == prefix
            && !prev.is_some_and(|p| is_word_char(p) || p == '-' || p == prefix);
        if !is_marker {
            result.push(ch);
            prev = Some(ch);
            continue;
        }

        if let Some(escaped) = rest.strip_prefix(prefix) {
            let key_len = key_length(escaped);
            result.push(prefix);
            result.push_str(&escaped[..key_len]);
            rest = &escaped[key_len..];
            prev = escaped[..key_len].chars().next_back().or(Some(prefix));
            continue;
        }

        let key_len = key_length(rest);
        let key = &rest[..key_len];
        match (key_len > 0).then(|| lookup(key)).flatten() {
            Some(message) => result.push_str(&message),
            None => {
                result.push(prefix);
                result.push_str(key);
            }
        }
        prev = key.chars().next_back().or(Some(prefix));
        rest = &rest[key_len..];
    }
    result
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn key_length(text: &str) -> usize {
    text.char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(text.len(), |(index, _)| index)
}
