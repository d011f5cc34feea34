use crate::input::ModuleInput;
use serde::{Deserialize, Serialize};

/// Disposition reported when required input is missing or unrecognised.
pub const INCOMPLETE: &str = "Incomplete";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

/// A validation, feasibility or scope message attached to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Flag {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }
}

/// A recommended action. Order within a result is significant: the most
/// urgent action comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub label: String,
    pub detail: String,
    /// Class of recommendation, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    pub level: Severity,
    /// Opaque path to another module's entry point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl NextStep {
    pub fn new(level: Severity, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            strength: None,
            level,
            link: None,
            info: None,
        }
    }

    pub fn info(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Info, label, detail)
    }

    pub fn warning(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, label, detail)
    }

    pub fn strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = Some(strength.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultValues {
    pub pathway_id: String,
    pub version: String,
    pub input_summary: ModuleInput,
    /// Every discriminating decision evaluated, as `field=value`, in order.
    pub branches_taken: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub disposition: String,
    pub summary: String,
    pub next_steps: Vec<NextStep>,
}

/// The complete output of one module evaluation.
///
/// A fresh value is produced for every call; nothing is shared between
/// evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub values: ResultValues,
    pub flags: Vec<Flag>,
    pub interpretation: Interpretation,
}

impl EvaluationResult {
    pub fn is_incomplete(&self) -> bool {
        self.interpretation.disposition == INCOMPLETE
    }

    pub fn disposition(&self) -> &str {
        &self.interpretation.disposition
    }

    pub fn next_steps(&self) -> &[NextStep] {
        &self.interpretation.next_steps
    }

    pub fn branches_taken(&self) -> &[String] {
        &self.values.branches_taken
    }

    /// Flags carrying the given severity, in emission order.
    pub fn flags_with(&self, severity: Severity) -> impl Iterator<Item = &Flag> {
        self.flags.iter().filter(move |f| f.severity == severity)
    }

    pub fn has_flag(&self, code: &str) -> bool {
        self.flags.iter().any(|f| f.code == code)
    }
}
