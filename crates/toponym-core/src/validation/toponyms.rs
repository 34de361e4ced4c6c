/// Official Georgian toponym check for populated-place nodes.
///
/// A node is checked when all of the following hold:
/// 1. it carries `place=<value>` with a value in
///    [`ValidationConfig::place_types`];
/// 2. it lies within [`ValidationConfig::boundary`] (see
///    [`ContainmentChecker`]).
///
/// For each configured language whose `name:<lang>` tag is present, the
/// value is looked up in the [`ToponymRegistry`]. Each miss produces one
/// [`Severity::Warning`] finding, so a node yields zero, one, or two
/// findings. The geographic scope is resolved only after the cheap tag
/// filter passes.
use tracing::debug;

use crate::config::{ConfigError, Dataset, ValidationConfig};
use crate::containment::ContainmentChecker;
use crate::enums::PrimitiveKind;
use crate::primitive::Primitive;
use crate::registry::ToponymRegistry;

use super::{Finding, Location, RuleId, Severity, ValidationResult, ValidationRule};

/// Tag key holding the kind of populated place.
pub const PLACE_KEY: &str = "place";

/// Headline shared by every finding of this rule.
pub const TITLE: &str = "Invalid Georgian name";

const NAME: &str = "Georgian Toponym Validator";
const DESCRIPTION: &str = "Checks whether city/town name is an official Georgian name.";

/// The toponym rule, bound to one registry and one configuration.
#[derive(Debug, Clone)]
pub struct GeorgianToponymRule<'d> {
    registry: &'d ToponymRegistry,
    config: ValidationConfig,
}

impl<'d> GeorgianToponymRule<'d> {
    /// Creates the rule with the dataset's default configuration.
    pub fn new(dataset: &'d Dataset) -> Self {
        Self {
            registry: dataset.registry(),
            config: ValidationConfig::from_dataset(dataset),
        }
    }

    /// Creates the rule with an explicit configuration.
    pub fn with_config(registry: &'d ToponymRegistry, config: ValidationConfig) -> Self {
        Self { registry, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Returns `true` if `primitive` is a node the rule should check by tags
    /// alone, before any containment lookup.
    fn is_candidate<P: Primitive>(&self, primitive: &P) -> bool {
        primitive.kind() == PrimitiveKind::Node
            && primitive
                .tag(PLACE_KEY)
                .is_some_and(|value| self.config.is_candidate_place(value))
    }
}

impl GeorgianToponymRule<'static> {
    /// Creates the rule over the embedded official dataset.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] of [`Dataset::official`].
    pub fn official() -> Result<Self, ConfigError> {
        Ok(Self::new(Dataset::official()?))
    }
}

impl<P: Primitive> ValidationRule<P> for GeorgianToponymRule<'_> {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn visit(&self, primitive: &P, result: &mut ValidationResult) {
        if !self.is_candidate(primitive) {
            return;
        }
        if !ContainmentChecker::new(&self.config.boundary).is_contained(primitive) {
            return;
        }

        for &language in &self.config.languages {
            let key = language.name_key();
            let Some(value) = primitive.tag(key) else {
                continue;
            };
            if self.registry.contains(language, value) {
                continue;
            }

            let id = primitive.id();
            debug!(%id, %language, value, "unofficial toponym");
            result.push(Finding {
                rule_id: RuleId::for_language(language),
                severity: Severity::Warning,
                location: Location::Primitive {
                    id,
                    field: Some(key.to_owned()),
                },
                title: TITLE.to_owned(),
                message: format!(
                    "{key} {value} does not seem to be an official Georgian city/town name."
                ),
                value: value.to_owned(),
            });
        }
    }
}
