use std::collections::HashMap;

use super::Localization;
use crate::message::{humanize, localize, MessageFormatter};

impl Localization {
    /// Message for `key` in the current locale with `{n}` placeholders
    /// replaced by `args`.
    ///
    /// An unknown key yields a humanized caption of the key, which is also
    /// recorded in the missing-message dictionary.
    ///
    /// # Examples
    /// ```
    /// use ldmlfmt::Localization;
    ///
    /// let mut l10n = Localization::new();
    /// l10n.load_locale_messages("en", [("hello", "Hello, {0} {1}")]);
    /// assert_eq!(l10n.format_message("hello", &["Ivan", "Ivanov"]), "Hello, Ivan Ivanov");
    /// assert_eq!(l10n.format_message("unknownKey", &[]), "Unknown key");
    /// ```
    pub fn format_message(&self, key: &str, args: &[&str]) -> String {
        match self.get_formatter(key) {
            Some(formatter) => formatter.format(args),
            None => self.record_missing(key),
        }
    }

    /// Template for `key` resolved along the current fallback chain.
    pub fn get_formatter(&self, key: &str) -> Option<MessageFormatter> {
        self.catalog
            .lookup(key, &self.locale_chain())
            .map(MessageFormatter::new)
    }

    /// Merge messages for several locales into the catalog.
    pub fn load_messages(&mut self, messages: HashMap<String, HashMap<String, String>>) {
        self.catalog.load_all(messages);
    }

    /// Merge messages for one locale into the catalog.
    pub fn load_locale_messages<I, K, V>(&mut self, locale: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.catalog.load(locale, entries);
    }

    /// Replace every `@key` marker in `text` with its message.
    pub fn localize_string(&self, text: &str) -> String {
        let chain = self.locale_chain();
        localize(text, self.localizable_prefix, |key| {
            match self.catalog.lookup(key, &chain) {
                Some(template) => Some(template.to_string()),
                None => {
                    self.record_missing(key);
                    None
                }
            }
        })
    }

    /// Change the character that marks keys in [`Self::localize_string`].
    pub fn set_localizable_prefix(&mut self, prefix: char) {
        self.localizable_prefix = prefix;
    }

    /// Messages visible in the current locale.
    ///
    /// With `only_missing` just the keys that were requested but never
    /// loaded; otherwise those overlaid with every loaded message of the
    /// current fallback chain.
    pub fn get_dictionary(&self, only_missing: bool) -> HashMap<String, String> {
        let mut dictionary = match self.missing.lock() {
            Ok(missing) => missing.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        if only_missing {
            return dictionary;
        }

        for tag in self.locale_chain().iter().rev() {
            if let Some(messages) = self.catalog.locale_messages(tag) {
                dictionary.extend(messages.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        dictionary
    }

    pub fn messages_by_locale(&self) -> &HashMap<String, HashMap<String, String>> {
        self.catalog.by_locale()
    }

    fn record_missing(&self, key: &str) -> String {
        let caption = humanize(key);
        match self.missing.lock() {
            Ok(mut missing) => {
                missing.insert(key.to_string(), caption.clone());
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(key.to_string(), caption.clone());
            }
        }
        caption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_tracks_missing_keys() {
        let mut l10n = Localization::new();
        l10n.load_locale_messages("en", [("freshAddedKey", "testValue")]);
        l10n.localize_string("@unknownKey");
        l10n.localize_string("@freshAddedKey");

        let all = l10n.get_dictionary(false);
        assert_eq!(all.get("Loading").map(String::as_str), Some("Loading..."));
        assert_eq!(all.get("freshAddedKey").map(String::as_str), Some("testValue"));
        assert_eq!(all.get("unknownKey").map(String::as_str), Some("Unknown key"));

        let missing = l10n.get_dictionary(true);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.get("unknownKey").map(String::as_str), Some("Unknown key"));
    }

    #[test]
    fn test_custom_prefix() {
        let mut l10n = Localization::new();
        l10n.load_locale_messages("en", [("addedKey", "testValue")]);
        assert_eq!(l10n.localize_string("@addedKey #addedKey"), "testValue #addedKey");

        l10n.set_localizable_prefix('#');
        assert_eq!(l10n.localize_string("@addedKey #addedKey"), "@addedKey testValue");
    }
}
