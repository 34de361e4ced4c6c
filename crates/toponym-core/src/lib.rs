#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod containment;
pub mod enums;
pub mod file;
pub mod graph;
pub mod newtypes;
pub mod primitive;
pub mod registry;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{ConfigError, Dataset, ValidationConfig};
pub use containment::{ADMIN_LEVEL_KEY, ContainmentChecker, CountryBoundary, INT_NAME_KEY};
pub use enums::{Language, PlaceType, PrimitiveKind, UnknownVariant};
pub use file::{
    Element, MapFile, Member, NodeElement, ParseError, RelationElement, Tags, WayElement,
};
pub use graph::{GraphBuildError, MapGraph, PrimitiveRef, build_graph};
pub use newtypes::PrimitiveId;
pub use primitive::Primitive;
pub use registry::ToponymRegistry;
pub use validation::toponyms::{GeorgianToponymRule, PLACE_KEY, TITLE};
pub use validation::{
    Finding, Location, RuleId, Severity, ValidationResult, ValidationRule, validate,
};

/// Returns the current version of the toponym-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
