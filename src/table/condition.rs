use crate::input::{FieldValue, ModuleInput};
use itertools::Itertools;
use std::fmt;

/// A boolean predicate over module input, used by feasibility rules and
/// cross-module links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Always,
    /// The tri-state field is answered `true`.
    IsTrue(&'static str),
    /// The field holds any value other than unset.
    IsSet(&'static str),
    /// The field holds exactly this enumerated code.
    Equals(&'static str, &'static str),
    Not(Box<Condition>),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    pub fn holds(&self, input: &ModuleInput) -> bool {
        match self {
            Condition::Always => true,
            Condition::IsTrue(field) => input.is_true(field),
            Condition::IsSet(field) => input.is_set(field),
            Condition::Equals(field, code) => {
                matches!(input.get(field), FieldValue::Text(s) if s == code)
            }
            Condition::Not(inner) => !inner.holds(input),
            Condition::All(all) => all.iter().all(|c| c.holds(input)),
            Condition::Any(any) => any.iter().any(|c| c.holds(input)),
        }
    }

    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::All(mut all) => {
                all.push(other);
                Condition::All(all)
            }
            first => Condition::All(vec![first, other]),
        }
    }

    pub fn negate(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "always"),
            Condition::IsTrue(field) => write!(f, "${} is yes", field),
            Condition::IsSet(field) => write!(f, "${} is set", field),
            Condition::Equals(field, code) => write!(f, "${} == {}", field, code),
            Condition::Not(inner) => write!(f, "NOT ({})", inner),
            Condition::All(all) => write!(f, "({})", all.iter().join(" AND ")),
            Condition::Any(any) => write!(f, "({})", any.iter().join(" OR ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_only_matches_text_codes() {
        let input = ModuleInput::new().with("indexTest", "ccta").with("flag", true);
        assert!(Condition::Equals("indexTest", "ccta").holds(&input));
        assert!(!Condition::Equals("indexTest", "stress").holds(&input));
        assert!(!Condition::Equals("flag", "true").holds(&input));
    }

    #[test]
    fn composite_conditions() {
        let input = ModuleInput::new().with("limited", true);
        let cond = Condition::IsTrue("limited").and(Condition::IsSet("indexTest").negate());
        assert!(cond.holds(&input));
        assert_eq!(cond.to_string(), "($limited is yes AND NOT ($indexTest is set))");
    }
}
