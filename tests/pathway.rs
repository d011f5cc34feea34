//! Loading, validation and page numbering of graph pathways.
mod common;
use cardiopath::prelude::*;
use common::*;
use serde_json::json;

fn integrity_error(json: &str) -> PathwayIntegrityError {
    match load_single(json) {
        Err(PathwayLoadError::Integrity(e)) => e,
        Err(other) => panic!("Expected an integrity error, got {}", other),
        Ok(_) => panic!("Expected the pathway to be rejected"),
    }
}

#[test]
fn test_builtin_pathways_load() {
    let registry = registry();
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["acute", "stable"]);

    let acute = registry.get("acute").unwrap();
    assert_eq!(acute.start_id(), "start");
    assert_eq!(acute.start_node().title, acute.node("start").unwrap().title);

    let stable = registry.get("stable").unwrap();
    assert_eq!(stable.start_id(), "stable_intro");
    assert!(registry.get("unknown").is_none());
}

#[test]
fn test_simple_pathway_loads_without_declared_start() {
    let registry = load_single(&pathway_json(simple_nodes())).unwrap();
    let pathway = registry.get("test").unwrap();
    assert_eq!(pathway.start_id(), "start");
    assert_eq!(pathway.len(), 4);
    assert_eq!(pathway.version(), "1");
}

#[test]
fn test_dangling_next_is_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "step", "title": "Start", "next": "nowhere" }
    ]));
    assert_eq!(
        integrity_error(&json),
        PathwayIntegrityError::DanglingNext {
            pathway: "test".into(),
            node_id: "start".into(),
            missing_target: "nowhere".into(),
        }
    );
}

#[test]
fn test_empty_decision_is_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "decision", "title": "Choose", "options": [] }
    ]));
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::EmptyDecision { node_id, .. } if node_id == "start"
    ));
}

#[test]
fn test_option_needs_exactly_one_target() {
    let both = pathway_json(json!([
        { "id": "start", "type": "decision", "title": "Choose", "options": [
            { "label": "Ok", "next": "end" },
            { "label": "Both", "next": "end", "action": { "type": "openUrl", "url": "x" } }
        ]},
        { "id": "end", "type": "terminal", "title": "End" }
    ]));
    assert!(matches!(
        integrity_error(&both),
        PathwayIntegrityError::InvalidOptionTarget { option_index: 1, .. }
    ));

    let neither = pathway_json(json!([
        { "id": "start", "type": "decision", "title": "Choose", "options": [ { "label": "Nothing" } ] }
    ]));
    assert!(matches!(
        integrity_error(&neither),
        PathwayIntegrityError::InvalidOptionTarget { option_index: 0, .. }
    ));
}

#[test]
fn test_terminal_with_transitions_is_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "step", "title": "Start", "next": "end" },
        { "id": "end", "type": "terminal", "title": "End", "next": "start" }
    ]));
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::TerminalHasTransitions { node_id, .. } if node_id == "end"
    ));
}

#[test]
fn test_step_without_next_is_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "step", "title": "Start" }
    ]));
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::StepWithoutNext { .. }
    ));
}

#[test]
fn test_start_candidates_must_be_unique() {
    let two = pathway_json(json!([
        { "id": "a", "type": "terminal", "title": "A" },
        { "id": "b", "type": "terminal", "title": "B" }
    ]));
    assert_eq!(
        integrity_error(&two),
        PathwayIntegrityError::MultipleStarts {
            pathway: "test".into(),
            candidates: vec!["a".into(), "b".into()],
        }
    );

    let none = pathway_json(json!([
        { "id": "a", "type": "step", "title": "A", "next": "b" },
        { "id": "b", "type": "step", "title": "B", "next": "a" }
    ]));
    assert!(matches!(
        integrity_error(&none),
        PathwayIntegrityError::MissingStart { .. }
    ));
}

#[test]
fn test_declared_start_must_match_candidate() {
    let json = json!({
        "id": "test",
        "title": "Test",
        "start": "choice",
        "nodes": simple_nodes(),
    })
    .to_string();
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::StartMismatch { declared, candidate, .. }
            if declared == "choice" && candidate == "start"
    ));
}

#[test]
fn test_cycles_are_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "step", "title": "Start", "next": "a" },
        { "id": "a", "type": "decision", "title": "A", "options": [
            { "label": "Loop", "next": "b" }
        ]},
        { "id": "b", "type": "step", "title": "B", "next": "a" }
    ]));
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::Cycle { node_id, .. } if node_id == "a"
    ));
}

#[test]
fn test_cycles_unreachable_from_start_are_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "step", "title": "Start", "next": "end" },
        { "id": "end", "type": "terminal", "title": "End" },
        { "id": "a", "type": "step", "title": "A", "next": "b" },
        { "id": "b", "type": "step", "title": "B", "next": "a" }
    ]));
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::Cycle { node_id, .. } if node_id == "a"
    ));
}

#[test]
fn test_duplicate_node_ids_are_rejected() {
    let json = pathway_json(json!([
        { "id": "start", "type": "step", "title": "Start", "next": "end" },
        { "id": "end", "type": "terminal", "title": "End" },
        { "id": "end", "type": "terminal", "title": "Again" }
    ]));
    assert!(matches!(
        integrity_error(&json),
        PathwayIntegrityError::DuplicateNodeId { node_id, .. } if node_id == "end"
    ));
}

#[test]
fn test_malformed_json_and_duplicate_pathways() {
    assert!(matches!(
        load_single("{ not json"),
        Err(PathwayLoadError::JsonParseError(_))
    ));

    let json = pathway_json(simple_nodes());
    let result = PathwayRegistry::builder()
        .with_json(&json)
        .and_then(|b| b.with_json(&json))
        .and_then(|b| b.build());
    assert!(matches!(result, Err(PathwayLoadError::DuplicatePathway(id)) if id == "test"));
}

#[test]
fn test_page_index_follows_definition_order() {
    let registry = registry();
    let acute = registry.get("acute").unwrap();
    let pages = build_page_index(acute);

    assert_eq!(pages.len(), acute.len());
    assert_eq!(pages[0].label, "A-001");
    assert_eq!(pages[0].node_id, "start");
    assert_eq!(pages[1].label, "A-002");
    assert_eq!(pages[1].node_id, "ecg");

    let ids: Vec<_> = acute.nodes().map(|n| n.id.clone()).collect();
    let indexed: Vec<_> = pages.iter().map(|p| p.node_id.clone()).collect();
    assert_eq!(ids, indexed);

    let stable = build_page_index(registry.get("stable").unwrap());
    assert_eq!(stable[0].label, "S-001");
}

#[test]
fn test_page_index_is_reproducible() {
    let first = build_page_index(registry().get("acute").unwrap());
    let second = build_page_index(registry().get("acute").unwrap());
    assert_eq!(first, second);
}
