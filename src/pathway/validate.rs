use super::definition::PathwayDefinition;
use crate::error::PathwayIntegrityError;
use ahash::{AHashMap, AHashSet};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Checks the graph-level integrity of a pathway and returns its start node id.
///
/// Node-local shape (a step without `next`, an empty decision, ...) is already
/// enforced when a document is converted; this pass covers what needs the
/// whole graph: unique ids, resolvable links, a single start and no cycles.
pub fn validate(definition: &PathwayDefinition) -> Result<String, PathwayIntegrityError> {
    let pathway = definition.id.as_str();

    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(definition.nodes.len());
    for (i, node) in definition.nodes.iter().enumerate() {
        if index.insert(node.id.as_str(), i).is_some() {
            return Err(PathwayIntegrityError::DuplicateNodeId {
                pathway: pathway.to_string(),
                node_id: node.id.clone(),
            });
        }
    }

    let mut has_incoming: AHashSet<&str> = AHashSet::new();
    for node in &definition.nodes {
        for target in node.successors() {
            if !index.contains_key(target) {
                return Err(PathwayIntegrityError::DanglingNext {
                    pathway: pathway.to_string(),
                    node_id: node.id.clone(),
                    missing_target: target.to_string(),
                });
            }
            has_incoming.insert(target);
        }
    }

    let candidates: Vec<&str> = definition
        .nodes
        .iter()
        .map(|n| n.id.as_str())
        .filter(|id| !has_incoming.contains(id))
        .collect();

    let start = match candidates.as_slice() {
        [] => {
            return Err(PathwayIntegrityError::MissingStart {
                pathway: pathway.to_string(),
            });
        }
        [only] => *only,
        many => {
            return Err(PathwayIntegrityError::MultipleStarts {
                pathway: pathway.to_string(),
                candidates: many.iter().map(|s| s.to_string()).collect(),
            });
        }
    };

    if let Some(declared) = &definition.start {
        if declared != start {
            return Err(PathwayIntegrityError::StartMismatch {
                pathway: pathway.to_string(),
                declared: declared.clone(),
                candidate: start.to_string(),
            });
        }
    }

    // Nodes off the start path can still be entered through a start override.
    let mut visits: AHashMap<&str, Visit> = AHashMap::new();
    detect_cycle(definition, &index, start, &mut visits)?;
    for node in &definition.nodes {
        detect_cycle(definition, &index, node.id.as_str(), &mut visits)?;
    }

    Ok(start.to_string())
}

fn detect_cycle<'a>(
    definition: &'a PathwayDefinition,
    index: &AHashMap<&'a str, usize>,
    node_id: &'a str,
    visits: &mut AHashMap<&'a str, Visit>,
) -> Result<(), PathwayIntegrityError> {
    match visits.get(node_id) {
        Some(Visit::Done) => return Ok(()),
        Some(Visit::InProgress) => {
            return Err(PathwayIntegrityError::Cycle {
                pathway: definition.id.clone(),
                node_id: node_id.to_string(),
            });
        }
        None => {}
    }

    visits.insert(node_id, Visit::InProgress);
    // Links were resolved above, so the lookup cannot miss.
    if let Some(&i) = index.get(node_id) {
        for target in definition.nodes[i].successors() {
            detect_cycle(definition, index, target, visits)?;
        }
    }
    visits.insert(node_id, Visit::Done);
    Ok(())
}
