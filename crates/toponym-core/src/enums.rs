/// Enumerations shared across the toponym validator: primitive kinds, name
/// languages, and the `place=*` values the rule can be configured to inspect.
///
/// Every enum round-trips through `snake_case` strings, both via serde and
/// via [`std::str::FromStr`] so that the CLI can accept the same spelling
/// that appears in OSM tags and in the embedded dataset.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {got:?}")]
pub struct UnknownVariant {
    /// Which enum rejected the input (e.g. `"place type"`).
    pub kind: &'static str,
    /// The rejected input.
    pub got: String,
}

// ---------------------------------------------------------------------------
// PrimitiveKind
// ---------------------------------------------------------------------------

/// The three OSM primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// A single point.
    Node,
    /// An ordered list of nodes.
    Way,
    /// A group of members with roles; administrative boundaries are relations.
    Relation,
}

impl PrimitiveKind {
    /// Returns the lowercase OSM spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A name language checked against the official lists.
///
/// The Georgian-script (`ka`) and Latin (`en`) lists are curated separately,
/// so neither is ever derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Georgian script, tag `name:ka`.
    Ka,
    /// Latin transliteration, tag `name:en`.
    En,
}

impl Language {
    /// All languages the registry must carry.
    pub const ALL: [Language; 2] = [Language::Ka, Language::En];

    /// Returns the BCP 47 language subtag (`"ka"` or `"en"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Ka => "ka",
            Self::En => "en",
        }
    }

    /// Returns the OSM tag key holding the name in this language.
    pub fn name_key(self) -> &'static str {
        match self {
            Self::Ka => "name:ka",
            Self::En => "name:en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ka" => Ok(Self::Ka),
            "en" => Ok(Self::En),
            other => Err(UnknownVariant {
                kind: "language",
                got: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// PlaceType
// ---------------------------------------------------------------------------

/// A `place=*` value the rule may be configured to inspect.
///
/// Which of these actually trigger the check is configuration; see
/// [`crate::ValidationConfig::place_types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceType {
    /// `place=city`
    City,
    /// `place=town`
    Town,
    /// `place=village`
    Village,
    /// `place=hamlet`
    Hamlet,
    /// `place=isolated_dwelling`
    IsolatedDwelling,
    /// `place=suburb`
    Suburb,
    /// `place=neighbourhood`
    Neighbourhood,
    /// `place=quarter`
    Quarter,
}

impl PlaceType {
    /// Returns the tag value as it appears in OSM data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Town => "town",
            Self::Village => "village",
            Self::Hamlet => "hamlet",
            Self::IsolatedDwelling => "isolated_dwelling",
            Self::Suburb => "suburb",
            Self::Neighbourhood => "neighbourhood",
            Self::Quarter => "quarter",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Self::City),
            "town" => Ok(Self::Town),
            "village" => Ok(Self::Village),
            "hamlet" => Ok(Self::Hamlet),
            "isolated_dwelling" => Ok(Self::IsolatedDwelling),
            "suburb" => Ok(Self::Suburb),
            "neighbourhood" => Ok(Self::Neighbourhood),
            "quarter" => Ok(Self::Quarter),
            other => Err(UnknownVariant {
                kind: "place type",
                got: other.to_owned(),
            }),
        }
    }
}
