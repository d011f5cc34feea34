//! Declarative decision tables.
//!
//! Every procedural clinical module shares one shape: a scope flag,
//! feasibility guidance, required-field validation and nested branching on
//! enumerated answers. A [`DecisionTable`] captures that shape as data so a
//! single interpreter (see [`crate::evaluator`]) can run every module.

pub mod condition;
pub mod decision;
pub mod display;

pub use condition::*;
pub use decision::*;
pub use display::*;

/// Converts a camelCase field id into the upper snake case used in flag
/// codes, e.g. `indexTest` -> `INDEX_TEST`.
pub fn code_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in field.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}
