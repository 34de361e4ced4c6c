/// The official toponym lists, one per [`Language`].
///
/// Membership is exact: byte-for-byte string equality, no trimming, case
/// folding, Unicode normalization, or transliteration. `"Tbilisi "` and
/// `"tbilisi"` are not `"Tbilisi"`.
use std::collections::{BTreeMap, HashSet};

use crate::config::ConfigError;
use crate::enums::Language;

/// Immutable set of official names per language.
///
/// Construct with [`ToponymRegistry::new`]; every language in
/// [`Language::ALL`] must be supplied with at least one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToponymRegistry {
    names: BTreeMap<Language, HashSet<String>>,
}

impl ToponymRegistry {
    /// Builds a registry from per-language name lists.
    ///
    /// Duplicate entries collapse. A language supplied more than once has
    /// its lists merged.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingLanguage`] if a required language is absent.
    /// - [`ConfigError::EmptyLanguage`] if a required language has no names.
    /// - [`ConfigError::InvalidName`] if an entry is empty or carries
    ///   leading or trailing whitespace.
    pub fn new<I, S>(lists: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Language, Vec<S>)>,
        S: Into<String>,
    {
        let mut names: BTreeMap<Language, HashSet<String>> = BTreeMap::new();
        for (language, list) in lists {
            let set = names.entry(language).or_default();
            for name in list {
                let name: String = name.into();
                if name.is_empty() || name.trim() != name {
                    return Err(ConfigError::InvalidName { language, name });
                }
                set.insert(name);
            }
        }

        for language in Language::ALL {
            match names.get(&language) {
                None => return Err(ConfigError::MissingLanguage(language)),
                Some(set) if set.is_empty() => return Err(ConfigError::EmptyLanguage(language)),
                Some(_) => {}
            }
        }

        Ok(Self { names })
    }

    /// Returns `true` if `name` is an official toponym in `language`.
    pub fn contains(&self, language: Language, name: &str) -> bool {
        self.names
            .get(&language)
            .is_some_and(|set| set.contains(name))
    }

    /// Number of distinct names registered for `language`.
    pub fn len(&self, language: Language) -> usize {
        self.names.get(&language).map_or(0, HashSet::len)
    }

    /// Official names for `language`, sorted.
    pub fn names(&self, language: Language) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .names
            .get(&language)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn registry() -> ToponymRegistry {
        ToponymRegistry::new([
            (Language::Ka, vec!["თბილისი", "ბათუმი"]),
            (Language::En, vec!["Tbilisi", "Batumi", "Tbilisi"]),
        ])
        .expect("valid lists")
    }

    #[test]
    fn exact_match_only() {
        let r = registry();
        assert!(r.contains(Language::En, "Tbilisi"));
        assert!(!r.contains(Language::En, "Tbilisi "));
        assert!(!r.contains(Language::En, " Tbilisi"));
        assert!(!r.contains(Language::En, "tbilisi"));
        assert!(!r.contains(Language::En, "Tiflis"));
    }

    #[test]
    fn languages_are_independent() {
        let r = registry();
        assert!(r.contains(Language::Ka, "თბილისი"));
        assert!(!r.contains(Language::En, "თბილისი"));
        assert!(!r.contains(Language::Ka, "Tbilisi"));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(registry().len(Language::En), 2);
        assert_eq!(registry().names(Language::En), vec!["Batumi", "Tbilisi"]);
    }

    #[test]
    fn missing_language_fails() {
        let err = ToponymRegistry::new([(Language::En, vec!["Tbilisi"])])
            .expect_err("ka is required");
        assert_eq!(err, ConfigError::MissingLanguage(Language::Ka));
    }

    #[test]
    fn empty_language_fails() {
        let err = ToponymRegistry::new([
            (Language::Ka, vec!["თბილისი"]),
            (Language::En, Vec::<&str>::new()),
        ])
        .expect_err("en must not be empty");
        assert_eq!(err, ConfigError::EmptyLanguage(Language::En));
    }

    #[test]
    fn padded_entry_fails() {
        let err = ToponymRegistry::new([
            (Language::Ka, vec!["თბილისი"]),
            (Language::En, vec!["Gori "]),
        ])
        .expect_err("padded entry is malformed");
        assert_eq!(
            err,
            ConfigError::InvalidName {
                language: Language::En,
                name: "Gori ".to_owned()
            }
        );
    }

    #[test]
    fn empty_entry_fails() {
        let err = ToponymRegistry::new([(Language::Ka, vec![""]), (Language::En, vec!["Gori"])])
            .expect_err("empty entry is malformed");
        assert!(matches!(err, ConfigError::InvalidName { language: Language::Ka, .. }));
    }
}
