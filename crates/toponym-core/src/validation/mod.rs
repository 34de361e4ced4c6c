/// Finding types, the rule trait, and the validation driver.
///
/// This module defines [`Finding`], [`Severity`], [`RuleId`], [`Location`],
/// and [`ValidationResult`], the types that describe every problem a rule
/// reports, plus the [`ValidationRule`] trait and the [`validate`] driver
/// that visits every node of a [`MapGraph`].
///
/// The toponym rule itself lives in [`toponyms`].
pub mod toponyms;

use std::fmt;

use crate::enums::Language;
use crate::graph::{MapGraph, PrimitiveRef};
use crate::newtypes::PrimitiveId;
use crate::primitive::Primitive;


/// The severity of a finding, on the scale editors use for validator
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Data is broken and should not be uploaded.
    Error,
    /// Data is suspect and deserves a look.
    Warning,
    /// Informational remark.
    Other,
}

impl Severity {
    /// Lowercase name used in machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::Warning => f.write_str("Warning"),
            Self::Other => f.write_str("Other"),
        }
    }
}

/// Machine-readable category of a finding.
///
/// The numeric [`RuleId::code`] values are stable and safe to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    /// `name:ka` is not an official Georgian-script toponym.
    WrongNameKa,
    /// `name:en` is not an official Latin-script toponym.
    WrongNameEn,
}

impl RuleId {
    /// The stable numeric code (`4300` for `ka`, `4301` for `en`).
    pub fn code(self) -> u32 {
        match self {
            Self::WrongNameKa => 4300,
            Self::WrongNameEn => 4301,
        }
    }

    /// The category for a wrong name in `language`.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Ka => Self::WrongNameKa,
            Language::En => Self::WrongNameEn,
        }
    }

    /// The language this category is about.
    pub fn language(self) -> Language {
        match self {
            Self::WrongNameKa => Language::Ka,
            Self::WrongNameEn => Language::En,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Where a finding was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A primitive, or one of its tags.
    Primitive {
        /// The offending primitive.
        id: PrimitiveId,
        /// The tag key responsible, if applicable.
        field: Option<String>,
    },
}

impl Location {
    /// The primitive the finding refers to.
    pub fn primitive_id(&self) -> PrimitiveId {
        match self {
            Self::Primitive { id, .. } => *id,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive { id, field: None } => write!(f, "{id}"),
            Self::Primitive {
                id,
                field: Some(field),
            } => write!(f, "{id} tag \"{field}\""),
        }
    }
}

/// A single problem reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The category of the problem.
    pub rule_id: RuleId,
    /// How serious it is.
    pub severity: Severity,
    /// The primitive (and tag) at fault.
    pub location: Location,
    /// Short headline, shared by every finding of the same kind.
    pub title: String,
    /// Explanation with the offending value interpolated.
    pub message: String,
    /// The offending tag value, verbatim.
    pub value: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_char = match self.severity {
            Severity::Error => 'E',
            Severity::Warning => 'W',
            Severity::Other => 'O',
        };
        write!(
            f,
            "[{level_char}] {} {}: {}",
            self.rule_id, self.location, self.message
        )
    }
}

/// Caller-owned collection of findings from one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    findings: Vec<Finding>,
}

impl ValidationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// All findings, in the order they were reported.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consumes the result, returning the findings.
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    /// Findings with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Error)
    }

    /// Findings with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Warning)
    }

    /// Findings with [`Severity::Other`].
    pub fn others(&self) -> impl Iterator<Item = &Finding> {
        self.with_severity(Severity::Other)
    }

    /// Findings of the given category.
    pub fn by_rule(&self, rule: RuleId) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.rule_id == rule)
    }

    /// Returns `true` if any finding has [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Total number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

/// A per-primitive validation rule.
///
/// The host calls [`visit`][ValidationRule::visit] once per primitive. A
/// rule reads the primitive (and whatever it can reach through
/// [`Primitive::referrers`]), appends zero or more findings to `result`, and
/// mutates nothing else. Rules hold only immutable configuration, so one
/// instance may be shared across threads that validate different
/// primitives.
pub trait ValidationRule<P: Primitive> {
    /// Short display name.
    fn name(&self) -> &str;

    /// One-sentence description of what the rule checks.
    fn description(&self) -> &str;

    /// Inspects one primitive and appends any findings.
    fn visit(&self, primitive: &P, result: &mut ValidationResult);
}

/// Runs `rule` over every node of `graph`, in ascending id order.
pub fn validate<'g, R>(graph: &'g MapGraph, rule: &R) -> ValidationResult
where
    R: ValidationRule<PrimitiveRef<'g>> + ?Sized,
{
    let mut result = ValidationResult::new();
    for node in graph.nodes() {
        rule.visit(&node, &mut result);
    }
    result
}
