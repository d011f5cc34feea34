//! The generic decision-table interpreter.
//!
//! Every procedural module is evaluated by the same engine. The contract:
//!
//! 1. A leading `info` flag with code `SCOPE` is always emitted.
//! 2. Feasibility guidance runs first and never blocks a disposition.
//! 3. Only the fields of the branch currently being evaluated are required;
//!    each missing one yields a `REQ_<FIELD>` warning and an
//!    [`INCOMPLETE`] disposition.
//! 4. Each branch taken is recorded in `branchesTaken` as `field=value`.
//! 5. An unrecognised value yields an `UNKNOWN_<FIELD>` warning and an
//!    [`INCOMPLETE`] disposition. Evaluation never fails.
//! 6. Cross-module suggestions are appended whenever their condition holds.

mod engine;
pub mod result;

pub use result::*;

use crate::input::ModuleInput;
use crate::table::DecisionTable;
use engine::TableEngine;

/// Evaluates module input against one decision table.
///
/// An `Evaluator` holds no mutable state and can be reused for any number of
/// inputs; identical inputs always produce identical results.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'t> {
    table: &'t DecisionTable,
}

impl<'t> Evaluator<'t> {
    pub fn new(table: &'t DecisionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t DecisionTable {
        self.table
    }

    /// Runs the table against `input`. Always returns a well-formed result.
    pub fn eval(&self, input: &ModuleInput) -> EvaluationResult {
        TableEngine::new(self.table, input).run()
    }
}

/// Shorthand for `Evaluator::new(table).eval(input)`.
pub fn evaluate(table: &DecisionTable, input: &ModuleInput) -> EvaluationResult {
    Evaluator::new(table).eval(input)
}
