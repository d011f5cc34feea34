use super::Condition;
use crate::evaluator::{Flag, NextStep};
use crate::input::{FieldSpec, FieldValue};
use std::fmt;

/// A clinical module expressed as data: field contract, feasibility guidance,
/// a tree of branch points and orthogonal cross-module suggestions.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    pub id: &'static str,
    pub title: &'static str,
    pub version: &'static str,
    /// Text of the leading `SCOPE` flag.
    pub scope: &'static str,
    pub fields: &'static [FieldSpec],
    pub feasibility: Option<Feasibility>,
    pub root: DecisionNode,
    pub cross_links: Vec<CrossLink>,
}

impl DecisionTable {
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Human label for a field, falling back to its id.
    pub fn label_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.field(id).map_or(id, |f| f.label)
    }
}

#[derive(Debug, Clone)]
pub enum DecisionNode {
    Switch(Switch),
    Outcome(Outcome),
}

impl From<Switch> for DecisionNode {
    fn from(switch: Switch) -> Self {
        DecisionNode::Switch(switch)
    }
}

impl From<Outcome> for DecisionNode {
    fn from(outcome: Outcome) -> Self {
        DecisionNode::Outcome(outcome)
    }
}

/// A branch point on one discriminating field.
#[derive(Debug, Clone)]
pub struct Switch {
    pub field: &'static str,
    /// Further fields that must be answered before this layer can branch.
    pub also_requires: Vec<&'static str>,
    pub arms: Vec<Arm>,
}

impl Switch {
    pub fn on(field: &'static str) -> Self {
        Self {
            field,
            also_requires: Vec::new(),
            arms: Vec::new(),
        }
    }

    pub fn requires(mut self, field: &'static str) -> Self {
        self.also_requires.push(field);
        self
    }

    pub fn when(self, value: impl Into<ArmValue>, then: impl Into<DecisionNode>) -> Self {
        self.when_with(value, Vec::new(), then)
    }

    /// Adds an arm whose effects are applied before descending into `then`.
    pub fn when_with(
        mut self,
        value: impl Into<ArmValue>,
        effects: Vec<Effect>,
        then: impl Into<DecisionNode>,
    ) -> Self {
        self.arms.push(Arm {
            value: value.into(),
            effects,
            then: then.into(),
        });
        self
    }

    /// Every field this layer needs, discriminator first.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.field).chain(self.also_requires.iter().copied())
    }

    pub fn arm_for(&self, value: &FieldValue) -> Option<&Arm> {
        self.arms.iter().find(|arm| arm.value.matches(value))
    }
}

#[derive(Debug, Clone)]
pub struct Arm {
    pub value: ArmValue,
    pub effects: Vec<Effect>,
    pub then: DecisionNode,
}

/// The value an arm is selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmValue {
    Code(&'static str),
    Bool(bool),
}

impl ArmValue {
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (ArmValue::Code(code), FieldValue::Text(text)) => code == text,
            (ArmValue::Bool(expected), FieldValue::Bool(actual)) => expected == actual,
            _ => false,
        }
    }
}

impl From<&'static str> for ArmValue {
    fn from(code: &'static str) -> Self {
        ArmValue::Code(code)
    }
}

impl From<bool> for ArmValue {
    fn from(value: bool) -> Self {
        ArmValue::Bool(value)
    }
}

impl fmt::Display for ArmValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmValue::Code(code) => write!(f, "{}", code),
            ArmValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Where a step is inserted into the accumulated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// A change applied to the result when an arm is taken.
#[derive(Debug, Clone)]
pub enum Effect {
    Step(Placement, NextStep),
    Flag(Flag),
}

impl Effect {
    pub fn push(step: NextStep) -> Self {
        Effect::Step(Placement::Back, step)
    }

    pub fn unshift(step: NextStep) -> Self {
        Effect::Step(Placement::Front, step)
    }
}

/// A terminal branch: fixed disposition and summary plus its steps.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub disposition: &'static str,
    pub summary: &'static str,
    pub steps: Vec<(Placement, NextStep)>,
    pub flags: Vec<Flag>,
}

impl Outcome {
    pub fn new(disposition: &'static str, summary: &'static str) -> Self {
        Self {
            disposition,
            summary,
            steps: Vec::new(),
            flags: Vec::new(),
        }
    }

    pub fn push(mut self, step: NextStep) -> Self {
        self.steps.push((Placement::Back, step));
        self
    }

    pub fn unshift(mut self, step: NextStep) -> Self {
        self.steps.push((Placement::Front, step));
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }
}

/// Non-blocking guidance raised when the chosen test may not be feasible.
///
/// When the limitation field is `true`, the first matching rule (or the
/// fallback) produces exactly one warning flag and one alternative step.
#[derive(Debug, Clone)]
pub struct Feasibility {
    pub limitation_field: &'static str,
    pub note_field: &'static str,
    pub rules: Vec<FeasibilityRule>,
    pub fallback: FeasibilityRule,
}

#[derive(Debug, Clone)]
pub struct FeasibilityRule {
    pub when: Condition,
    pub code: &'static str,
    /// Warning text; a non-empty note is appended as `" Note: <note>"`.
    pub message: &'static str,
    pub alternative: NextStep,
}

impl Feasibility {
    pub fn rule_for(&self, input: &crate::input::ModuleInput) -> &FeasibilityRule {
        self.rules
            .iter()
            .find(|r| r.when.holds(input))
            .unwrap_or(&self.fallback)
    }
}

/// A suggestion to consult another module, appended whenever `when` holds.
#[derive(Debug, Clone)]
pub struct CrossLink {
    pub when: Condition,
    pub step: NextStep,
}
