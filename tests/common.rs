//! Common test utilities for building pathways and module inputs.
use cardiopath::prelude::*;
use cardiopath::table::DecisionNode;
use serde_json::{Value, json};

/// Loads the bundled pathways.
#[allow(dead_code)]
pub fn registry() -> PathwayRegistry {
    PathwayRegistry::builtin().expect("Bundled pathways should load")
}

/// Builds module input from a JSON object literal.
#[allow(dead_code)]
pub fn input(value: Value) -> ModuleInput {
    ModuleInput::from_json(&value.to_string()).expect("Test input should be a JSON object")
}

/// Wraps a node list into a pathway document with id `test`.
#[allow(dead_code)]
pub fn pathway_json(nodes: Value) -> String {
    json!({
        "id": "test",
        "title": "Test pathway",
        "nodes": nodes,
    })
    .to_string()
}

/// Attempts to load a single pathway document into a fresh registry.
#[allow(dead_code)]
pub fn load_single(json: &str) -> std::result::Result<PathwayRegistry, PathwayLoadError> {
    PathwayRegistry::builder().with_json(json)?.build()
}

/// A minimal valid graph: `start` -> `choice` -> (`yes` | `no`).
#[allow(dead_code)]
pub fn simple_nodes() -> Value {
    json!([
        { "id": "start", "type": "step", "title": "Start", "next": "choice" },
        { "id": "choice", "type": "decision", "title": "Choose", "options": [
            { "label": "Yes", "next": "yes" },
            { "label": "No", "next": "no" },
            { "label": "Calculator", "action": { "type": "openUrl", "url": "https://example.org/calc" } }
        ]},
        { "id": "yes", "type": "terminal", "title": "Yes", "disposition": "Admit" },
        { "id": "no", "type": "terminal", "title": "No", "disposition": "Discharge" }
    ])
}

/// Every disposition a table can produce, in tree order.
#[allow(dead_code)]
pub fn documented_dispositions(table: &DecisionTable) -> Vec<&'static str> {
    fn collect(node: &DecisionNode, out: &mut Vec<&'static str>) {
        match node {
            DecisionNode::Switch(switch) => {
                for arm in &switch.arms {
                    collect(&arm.then, out);
                }
            }
            DecisionNode::Outcome(outcome) => out.push(outcome.disposition),
        }
    }
    let mut out = Vec::new();
    collect(&table.root, &mut out);
    out
}

/// Warning flags of a result, in order.
#[allow(dead_code)]
pub fn warnings(result: &EvaluationResult) -> Vec<&Flag> {
    result.flags_with(Severity::Warning).collect()
}
