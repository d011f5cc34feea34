//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load pathways, walk them and
//! evaluate procedural modules.
//!
//! # Example
//!
//! ```rust,no_run
//! use cardiopath::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/input.json")?;
//! let input = ModuleInput::from_json(&json)?;
//! let module: ModuleId = "prior_cabg".parse()?;
//!
//! let result = evaluate(module, &input);
//! println!("{}", ReportFormatter::format_result(&result));
//! # Ok(())
//! # }
//! ```

// Graph pathways
pub use crate::pathway::{
    IntoPathway, Pathway, PathwayDefinition, PathwayNode, PathwayRegistry, build_page_index,
};
pub use crate::runner::{Advance, Back, Choice, GraphRunner, RecordedActions, RunnerView};

// Procedural modules
pub use crate::evaluator::{EvaluationResult, Evaluator, Flag, INCOMPLETE, NextStep, Severity};
pub use crate::input::{FieldValue, FormReader, ModuleInput};
pub use crate::modules::{ModuleId, evaluate};
pub use crate::table::{DecisionTable, DisplayTable};

// Presentation boundary
pub use crate::report::ReportFormatter;
pub use crate::session::{FormSession, ResourceKind, Route};

// Error types
pub use crate::error::{InputError, PathwayIntegrityError, PathwayLoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
