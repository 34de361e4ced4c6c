/// The toponym dataset and the rule configuration derived from it.
///
/// # Dataset
///
/// A [`Dataset`] is one versioned artifact bundling everything the rule
/// needs that is not code: the country boundary to test against, the
/// `place=*` values that trigger the check, and the official name list per
/// language. The official artifact is compiled into the crate from
/// `data/georgia.json` and parsed on first use by [`Dataset::official`].
/// Alternative artifacts of the same shape load with [`Dataset::from_json`].
///
/// Loading fails fast: a dataset that would validate nothing (a missing or
/// empty language, no place types, a blank boundary) is rejected with a
/// [`ConfigError`] instead of being accepted silently.
///
/// # Rule configuration
///
/// [`ValidationConfig`] starts from the dataset defaults and can be narrowed
/// or widened by the caller, e.g. from CLI flags.
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use crate::containment::CountryBoundary;
use crate::enums::{Language, PlaceType};
use crate::registry::ToponymRegistry;

/// The official dataset, embedded at compile time.
const OFFICIAL_JSON: &str = include_str!("../data/georgia.json");

static OFFICIAL: LazyLock<Result<Dataset, ConfigError>> =
    LazyLock::new(|| Dataset::from_json(OFFICIAL_JSON));

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// A dataset could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The artifact is not valid JSON or does not have the dataset shape.
    #[error("malformed dataset at line {line}, column {column}: {detail}")]
    Malformed {
        /// One-based line of the failure.
        line: usize,
        /// One-based column of the failure.
        column: usize,
        /// The underlying parser message.
        detail: String,
    },
    /// A required language has no list at all.
    #[error("dataset has no name list for language {0}")]
    MissingLanguage(Language),
    /// A required language has an empty list.
    #[error("dataset name list for language {0} is empty")]
    EmptyLanguage(Language),
    /// A list entry is empty or padded with whitespace.
    #[error("invalid {language} name {name:?}")]
    InvalidName {
        /// The list the entry belongs to.
        language: Language,
        /// The offending entry.
        name: String,
    },
    /// The dataset recognizes no place types, so the rule would never fire.
    #[error("dataset lists no place types")]
    NoPlaceTypes,
    /// The boundary `int_name` or `admin_level` is blank.
    #[error("dataset country boundary is incomplete")]
    IncompleteBoundary,
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// On-disk shape of a dataset artifact.
#[derive(Deserialize)]
struct DatasetFile {
    revision: String,
    country: CountryBoundary,
    place_types: Vec<PlaceType>,
    names: BTreeMap<Language, Vec<String>>,
}

/// A loaded, validated toponym dataset. Immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    revision: String,
    boundary: CountryBoundary,
    place_types: BTreeSet<PlaceType>,
    registry: ToponymRegistry,
}

impl Dataset {
    /// Returns the embedded official dataset, parsing it on first call.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] produced by the embedded artifact. The
    /// same error is returned on every call.
    pub fn official() -> Result<&'static Dataset, ConfigError> {
        OFFICIAL.as_ref().map_err(Clone::clone)
    }

    /// Parses and validates a dataset artifact.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Malformed`] for invalid JSON, unknown languages or
    ///   place types, or missing keys.
    /// - [`ConfigError::IncompleteBoundary`] for a blank boundary.
    /// - [`ConfigError::NoPlaceTypes`] for an empty place-type list.
    /// - Any error of [`ToponymRegistry::new`].
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let raw: DatasetFile = serde_json::from_str(content)?;

        if raw.country.int_name.trim().is_empty() || raw.country.admin_level.trim().is_empty() {
            return Err(ConfigError::IncompleteBoundary);
        }
        let place_types: BTreeSet<PlaceType> = raw.place_types.into_iter().collect();
        if place_types.is_empty() {
            return Err(ConfigError::NoPlaceTypes);
        }
        let registry = ToponymRegistry::new(raw.names)?;

        debug!(
            revision = %raw.revision,
            ka = registry.len(Language::Ka),
            en = registry.len(Language::En),
            place_types = place_types.len(),
            "toponym dataset loaded"
        );

        Ok(Self {
            revision: raw.revision,
            boundary: raw.country,
            place_types,
            registry,
        })
    }

    /// The artifact's revision label.
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// The country boundary the dataset applies to.
    pub fn boundary(&self) -> &CountryBoundary {
        &self.boundary
    }

    /// The place types the dataset recommends checking.
    pub fn place_types(&self) -> &BTreeSet<PlaceType> {
        &self.place_types
    }

    /// The official name lists.
    pub fn registry(&self) -> &ToponymRegistry {
        &self.registry
    }
}

// ---------------------------------------------------------------------------
// ValidationConfig
// ---------------------------------------------------------------------------

/// Controls which nodes the toponym rule inspects and which tags it checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// `place=*` values that make a node a candidate.
    pub place_types: BTreeSet<PlaceType>,
    /// Boundary a candidate must lie within.
    pub boundary: CountryBoundary,
    /// Languages whose `name:<lang>` tag is checked.
    pub languages: BTreeSet<Language>,
}

impl ValidationConfig {
    /// Uses the dataset's boundary and place types and checks every language.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            place_types: dataset.place_types.clone(),
            boundary: dataset.boundary.clone(),
            languages: Language::ALL.into_iter().collect(),
        }
    }

    /// Replaces the candidate place types.
    #[must_use]
    pub fn with_place_types(mut self, place_types: impl IntoIterator<Item = PlaceType>) -> Self {
        self.place_types = place_types.into_iter().collect();
        self
    }

    /// Replaces the checked languages.
    #[must_use]
    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    /// Replaces the boundary.
    #[must_use]
    pub fn with_boundary(mut self, boundary: CountryBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns `true` if a `place=<value>` tag makes a node a candidate.
    ///
    /// Values outside [`PlaceType`] are never candidates.
    pub fn is_candidate_place(&self, value: &str) -> bool {
        value
            .parse::<PlaceType>()
            .is_ok_and(|p| self.place_types.contains(&p))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    const SMALL: &str = r#"{
        "revision": "test",
        "country": { "int_name": "Georgia", "admin_level": "2" },
        "place_types": ["city", "town"],
        "names": { "ka": ["თბილისი"], "en": ["Tbilisi"] }
    }"#;

    #[test]
    fn official_dataset_loads() {
        let ds = Dataset::official().expect("embedded dataset is valid");
        assert_eq!(ds.boundary(), &CountryBoundary::new("Georgia", "2"));
        assert!(ds.registry().contains(Language::En, "Tbilisi"));
        assert!(ds.registry().contains(Language::Ka, "თბილისი"));
        assert!(!ds.registry().contains(Language::En, "Tiflis"));
        assert_eq!(ds.registry().len(Language::Ka), 1152);
        assert_eq!(ds.registry().len(Language::En), 1120);
    }

    #[test]
    fn official_dataset_place_types() {
        let ds = Dataset::official().expect("embedded dataset is valid");
        let expected: BTreeSet<PlaceType> = [
            PlaceType::City,
            PlaceType::Town,
            PlaceType::Village,
            PlaceType::Neighbourhood,
            PlaceType::Quarter,
        ]
        .into_iter()
        .collect();
        assert_eq!(ds.place_types(), &expected);
    }

    #[test]
    fn official_is_loaded_once() {
        let a = Dataset::official().expect("valid");
        let b = Dataset::official().expect("valid");
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn small_dataset_loads() {
        let ds = Dataset::from_json(SMALL).expect("valid");
        assert_eq!(ds.revision(), "test");
        assert_eq!(ds.place_types().len(), 2);
        assert_eq!(ds.registry().len(Language::En), 1);
    }

    #[test]
    fn malformed_json_is_reported_with_position() {
        let err = Dataset::from_json("{\n \"revision\": ]").expect_err("not json");
        match err {
            ConfigError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn unknown_place_type_is_malformed() {
        let json = SMALL.replace("\"town\"", "\"metropolis\"");
        assert!(matches!(
            Dataset::from_json(&json),
            Err(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn missing_language_fails() {
        let json = SMALL.replace(r#", "en": ["Tbilisi"]"#, "");
        assert_eq!(
            Dataset::from_json(&json),
            Err(ConfigError::MissingLanguage(Language::En))
        );
    }

    #[test]
    fn empty_language_fails() {
        let json = SMALL.replace(r#"["თბილისი"]"#, "[]");
        assert_eq!(
            Dataset::from_json(&json),
            Err(ConfigError::EmptyLanguage(Language::Ka))
        );
    }

    #[test]
    fn empty_place_types_fail() {
        let json = SMALL.replace(r#"["city", "town"]"#, "[]");
        assert_eq!(Dataset::from_json(&json), Err(ConfigError::NoPlaceTypes));
    }

    #[test]
    fn blank_boundary_fails() {
        let json = SMALL.replace(r#""int_name": "Georgia""#, r#""int_name": " ""#);
        assert_eq!(
            Dataset::from_json(&json),
            Err(ConfigError::IncompleteBoundary)
        );
    }

    #[test]
    fn config_defaults_from_dataset() {
        let ds = Dataset::from_json(SMALL).expect("valid");
        let cfg = ValidationConfig::from_dataset(&ds);
        assert!(cfg.is_candidate_place("city"));
        assert!(cfg.is_candidate_place("town"));
        assert!(!cfg.is_candidate_place("village"));
        assert!(!cfg.is_candidate_place("CITY"));
        assert!(!cfg.is_candidate_place("megacity"));
        assert_eq!(cfg.languages.len(), 2);
    }

    #[test]
    fn config_overrides() {
        let ds = Dataset::from_json(SMALL).expect("valid");
        let cfg = ValidationConfig::from_dataset(&ds)
            .with_place_types([PlaceType::Village])
            .with_languages([Language::En])
            .with_boundary(CountryBoundary::new("Armenia", "2"));
        assert!(cfg.is_candidate_place("village"));
        assert!(!cfg.is_candidate_place("city"));
        assert_eq!(cfg.languages.iter().copied().collect::<Vec<_>>(), vec![Language::En]);
        assert_eq!(cfg.boundary.int_name, "Armenia");
    }
}
