use super::result::{EvaluationResult, Flag, INCOMPLETE, Interpretation, NextStep, ResultValues};
use crate::input::ModuleInput;
use crate::table::{DecisionNode, DecisionTable, Effect, Outcome, Placement, Switch, code_name};
use itertools::Itertools;

/// Walks one decision table against one input, building the result as it goes.
pub(super) struct TableEngine<'t, 'i> {
    table: &'t DecisionTable,
    input: &'i ModuleInput,
    result: EvaluationResult,
}

impl<'t, 'i> TableEngine<'t, 'i> {
    pub(super) fn new(table: &'t DecisionTable, input: &'i ModuleInput) -> Self {
        let result = EvaluationResult {
            values: ResultValues {
                pathway_id: table.id.to_string(),
                version: table.version.to_string(),
                input_summary: input.clone(),
                branches_taken: Vec::new(),
            },
            flags: Vec::new(),
            interpretation: Interpretation {
                disposition: INCOMPLETE.to_string(),
                summary: String::new(),
                next_steps: Vec::new(),
            },
        };
        Self {
            table,
            input,
            result,
        }
    }

    pub(super) fn run(mut self) -> EvaluationResult {
        let table = self.table;
        self.result.flags.push(Flag::info("SCOPE", table.scope));
        self.apply_feasibility();

        let mut node = &table.root;
        loop {
            match node {
                DecisionNode::Switch(switch) => match self.branch(switch) {
                    Some(next) => node = next,
                    None => break,
                },
                DecisionNode::Outcome(outcome) => {
                    self.finish(outcome);
                    break;
                }
            }
        }

        self.apply_cross_links();
        self.result
    }

    /// Runs before any validation so guidance appears even on incomplete input.
    fn apply_feasibility(&mut self) {
        let (table, input) = (self.table, self.input);
        let Some(feasibility) = &table.feasibility else {
            return;
        };
        if !input.is_true(feasibility.limitation_field) {
            return;
        }

        let rule = feasibility.rule_for(input);
        let message = match input.note(feasibility.note_field) {
            Some(note) => format!("{} Note: {}", rule.message, note),
            None => rule.message.to_string(),
        };
        tracing::debug!(module = table.id, code = rule.code, "Feasibility guidance raised");
        self.result.flags.push(Flag::warning(rule.code, message));
        self.result
            .interpretation
            .next_steps
            .push(rule.alternative.clone());
    }

    /// Validates and evaluates one branch point. Returns the node to descend
    /// into, or `None` once the result has been closed as incomplete.
    fn branch(&mut self, switch: &'t Switch) -> Option<&'t DecisionNode> {
        let (table, input) = (self.table, self.input);

        let missing: Vec<&str> = switch
            .required_fields()
            .filter(|field| !input.is_set(field))
            .collect();
        if !missing.is_empty() {
            for field in &missing {
                self.result.flags.push(Flag::warning(
                    format!("REQ_{}", code_name(field)),
                    format!("Missing required input: {}.", table.label_of(field)),
                ));
            }
            let labels = missing.iter().map(|f| table.label_of(f)).join(", ");
            self.close_incomplete(format!("Answer the following to continue: {}.", labels));
            return None;
        }

        let value = input.get(switch.field);
        let Some(arm) = switch.arm_for(value) else {
            tracing::warn!(
                module = table.id,
                field = switch.field,
                value = %value,
                "Unrecognized value at branch point"
            );
            let label = table.label_of(switch.field);
            self.result.flags.push(Flag::warning(
                format!("UNKNOWN_{}", code_name(switch.field)),
                format!("Unrecognized value '{}' for {}.", value, label),
            ));
            self.close_incomplete(format!("Select a valid option for {}.", label));
            return None;
        };

        let taken = format!("{}={}", switch.field, arm.value);
        tracing::debug!(module = table.id, branch = %taken, "Branch taken");
        self.result.values.branches_taken.push(taken);

        for effect in &arm.effects {
            match effect {
                Effect::Step(placement, step) => self.place_step(*placement, step.clone()),
                Effect::Flag(flag) => self.result.flags.push(flag.clone()),
            }
        }
        Some(&arm.then)
    }

    fn finish(&mut self, outcome: &Outcome) {
        let interpretation = &mut self.result.interpretation;
        interpretation.disposition = outcome.disposition.to_string();
        interpretation.summary = outcome.summary.to_string();
        self.result.flags.extend(outcome.flags.iter().cloned());
        for (placement, step) in &outcome.steps {
            self.place_step(*placement, step.clone());
        }
    }

    fn close_incomplete(&mut self, summary: String) {
        self.result.interpretation.disposition = INCOMPLETE.to_string();
        self.result.interpretation.summary = summary;
    }

    fn place_step(&mut self, placement: Placement, step: NextStep) {
        let steps = &mut self.result.interpretation.next_steps;
        match placement {
            Placement::Front => steps.insert(0, step),
            Placement::Back => steps.push(step),
        }
    }

    /// Cross-module suggestions are orthogonal to the branch outcome and are
    /// appended on every exit, complete or not.
    fn apply_cross_links(&mut self) {
        let (table, input) = (self.table, self.input);
        for link in &table.cross_links {
            if link.when.holds(input) {
                self.result
                    .interpretation
                    .next_steps
                    .push(link.step.clone());
            }
        }
    }
}
