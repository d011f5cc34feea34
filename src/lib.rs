//! # Cardiopath - Chest Pain Pathway Engine
//!
//! **Cardiopath** evaluates clinical decision-support pathways for chest pain.
//! Two kinds of pathway are supported:
//!
//! - **Graph pathways** (`acute`, `stable`): screens linked by explicit
//!   `next` pointers, loaded from JSON, validated once and walked
//!   interactively by a [`runner::GraphRunner`].
//! - **Procedural modules** (no known CAD, prior CABG, INOCA, ...): static
//!   [`table::DecisionTable`]s interpreted by one generic
//!   [`evaluator::Evaluator`] that turns a [`input::ModuleInput`] into an
//!   [`evaluator::EvaluationResult`].
//!
//! ## Core Workflow
//!
//! 1.  **Load pathways**: [`pathway::PathwayRegistry::builtin`] loads the bundled
//!     graphs, or use the builder to add your own JSON or any type implementing
//!     [`pathway::IntoPathway`]. Structural errors are reported at load time.
//! 2.  **Walk a graph**: start a [`runner::GraphRunner`] and `advance`/`back`
//!     through it, rendering whatever [`runner::GraphRunner::view`] reports.
//! 3.  **Evaluate a module**: build a [`input::ModuleInput`] (by hand, from
//!     JSON, or from raw form values with [`input::FormReader`]) and call
//!     [`modules::evaluate`]. Evaluation never fails; missing or unrecognised
//!     answers produce an `Incomplete` result with explanatory flags.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardiopath::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = PathwayRegistry::builtin()?;
//!     let mut runner = GraphRunner::new(&registry);
//!     runner.start("acute", None);
//!     assert!(!runner.can_go_back());
//!
//!     let input = ModuleInput::new()
//!         .with("riskCat", "low")
//!         .with("lowRiskChoice", "no_testing");
//!     let result = evaluate(ModuleId::NoKnownCad, &input);
//!
//!     assert_eq!(result.disposition(), "No testing recommended");
//!     assert_eq!(
//!         result.branches_taken(),
//!         ["riskCat=low", "lowRiskChoice=no_testing"]
//!     );
//!     println!("{}", ReportFormatter::format_result(&result));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod evaluator;
pub mod input;
pub mod modules;
pub mod pathway;
pub mod prelude;
pub mod report;
pub mod runner;
pub mod session;
pub mod table;
