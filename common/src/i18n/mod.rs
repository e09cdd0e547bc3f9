//! Bilingual (Georgian / English) string tables.
//!
//! Translations arrive as a nested JSON tree keyed by language code. They are
//! flattened into a [`Dictionary`] per language and rejected unless every
//! [`MessageKey`] resolves to a string, so a lookup never misses at render time.

mod keys;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::I18nError;
pub use keys::MessageKey;

/// Local storage key holding the preferred language code.
pub const LANGUAGE_STORAGE_KEY: &str = "martev-language";

/// Translation tree compiled into the binaries; served by the development API too.
pub const BUNDLED_TRANSLATIONS_JSON: &str = include_str!("../../locales/translations.json");

static BUNDLED: LazyLock<Translations> = LazyLock::new(|| {
    Translations::from_json_str(BUNDLED_TRANSLATIONS_JSON)
        .expect("bundled translations cover every message key")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ka,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ka, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ka => "ka",
            Language::En => "en",
        }
    }

    /// Parses a stored preference. Anything unrecognised falls back to Georgian.
    pub fn from_code(code: Option<&str>) -> Language {
        match code.map(str::trim) {
            Some("en") => Language::En,
            _ => Language::Ka,
        }
    }

    /// Label used by the language switcher.
    pub fn switcher_label(self) -> &'static str {
        match self {
            Language::Ka => "ქარ",
            Language::En => "ENG",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Either a localized key or a literal string coming from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Key(MessageKey),
    Raw(String),
}

impl Text {
    pub fn resolve<'a>(&'a self, dictionary: &'a Dictionary) -> &'a str {
        match self {
            Text::Key(key) => dictionary.get(*key),
            Text::Raw(raw) => raw,
        }
    }
}

impl From<MessageKey> for Text {
    fn from(key: MessageKey) -> Self {
        Text::Key(key)
    }
}

/// Complete set of strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<MessageKey, String>,
}

impl Dictionary {
    /// Flattens a language subtree, failing on the first key that is absent
    /// or not a string.
    pub fn from_tree(language: Language, tree: &Value) -> Result<Self, I18nError> {
        let mut entries = BTreeMap::new();
        for &key in MessageKey::ALL {
            let text = lookup(tree, key.path())
                .and_then(Value::as_str)
                .ok_or(I18nError::MissingKey {
                    language,
                    path: key.path(),
                })?;
            entries.insert(key, text.to_string());
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: MessageKey) -> &str {
        self.entries
            .get(&key)
            .map(String::as_str)
            .unwrap_or(key.path())
    }
}

fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, |node, segment| node.get(segment))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    ka: Dictionary,
    en: Dictionary,
}

impl Translations {
    /// The compiled-in tables. Used until (and unless) remote ones load.
    pub fn bundled() -> &'static Translations {
        &BUNDLED
    }

    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| I18nError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Builds tables from a `{ "ka": {...}, "en": {...} }` tree. Both languages
    /// must be complete.
    pub fn from_value(value: &Value) -> Result<Self, I18nError> {
        let root = value.as_object().ok_or(I18nError::NotAnObject)?;
        let subtree = |language: Language| {
            root.get(language.code())
                .ok_or(I18nError::MissingLanguage(language))
        };
        Ok(Self {
            ka: Dictionary::from_tree(Language::Ka, subtree(Language::Ka)?)?,
            en: Dictionary::from_tree(Language::En, subtree(Language::En)?)?,
        })
    }

    pub fn dictionary(&self, language: Language) -> &Dictionary {
        match language {
            Language::Ka => &self.ka,
            Language::En => &self.en,
        }
    }

    pub fn text(&self, language: Language, key: MessageKey) -> &str {
        self.dictionary(language).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundled_tables_are_complete() {
        let translations = Translations::from_json_str(BUNDLED_TRANSLATIONS_JSON).unwrap();
        assert_eq!(
            translations.text(Language::En, MessageKey::VerificationIncorrectCode),
            "Incorrect code"
        );
        assert_eq!(
            translations.text(Language::Ka, MessageKey::ErrorCategoriesLoadFailed),
            "ვერ ჩაიტვირთა კატეგორიები"
        );
    }

    #[test]
    fn stored_language_defaults_to_georgian() {
        assert_eq!(Language::from_code(None), Language::Ka);
        assert_eq!(Language::from_code(Some("fr")), Language::Ka);
        assert_eq!(Language::from_code(Some("en")), Language::En);
        assert_eq!(Language::from_code(Some("ka")), Language::Ka);
    }

    #[test]
    fn incomplete_language_is_rejected_with_its_path() {
        let mut tree: Value = serde_json::from_str(BUNDLED_TRANSLATIONS_JSON).unwrap();
        tree["en"]["verification"]
            .as_object_mut()
            .unwrap()
            .remove("resendFailed");

        let err = Translations::from_value(&tree).unwrap_err();
        assert_eq!(
            err,
            I18nError::MissingKey {
                language: Language::En,
                path: "verification.resendFailed"
            }
        );
    }

    #[test]
    fn non_string_leaf_counts_as_missing() {
        let mut tree: Value = serde_json::from_str(BUNDLED_TRANSLATIONS_JSON).unwrap();
        tree["ka"]["footer"]["contact"] = json!(42);

        assert!(matches!(
            Translations::from_value(&tree),
            Err(I18nError::MissingKey { language: Language::Ka, path: "footer.contact" })
        ));
    }

    #[test]
    fn missing_language_and_wrong_shape() {
        assert_eq!(
            Translations::from_value(&json!({ "ka": {} , "de": {} })).unwrap_err(),
            I18nError::MissingKey { language: Language::Ka, path: MessageKey::ALL[0].path() }
        );
        assert_eq!(
            Translations::from_value(&json!({ "ka": {} })).unwrap_err(),
            I18nError::MissingLanguage(Language::En)
        );
        assert_eq!(Translations::from_value(&json!([])).unwrap_err(), I18nError::NotAnObject);
    }

    #[test]
    fn raw_text_bypasses_the_dictionary() {
        let dictionary = Translations::bundled().dictionary(Language::En);
        assert_eq!(Text::Raw("taken".into()).resolve(dictionary), "taken");
        assert_eq!(Text::from(MessageKey::FormSubmit).resolve(dictionary), "Activate");
    }
}
