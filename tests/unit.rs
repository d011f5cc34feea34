//! Unit tests for input handling, presentation helpers and rendering.
mod common;
use ahash::AHashMap;
use cardiopath::modules::no_known_cad;
use cardiopath::prelude::*;
use cardiopath::session::FieldSnapshot;
use common::*;

#[test]
fn test_field_value_display() {
    assert_eq!(format!("{}", FieldValue::Bool(true)), "true");
    assert_eq!(format!("{}", FieldValue::from("ccta")), "ccta");
    assert_eq!(format!("{}", FieldValue::Unset), "unset");
    assert_eq!(FieldValue::from(None::<bool>), FieldValue::Unset);
}

#[test]
fn test_module_input_from_json_rejects_bad_shapes() {
    assert!(matches!(
        ModuleInput::from_json("[1, 2]"),
        Err(InputError::NotAnObject(_))
    ));
    assert!(matches!(
        ModuleInput::from_json(r#"{ "riskCat": 3 }"#),
        Err(InputError::UnsupportedValue { field, .. }) if field == "riskCat"
    ));
    assert!(matches!(
        ModuleInput::from_json("{"),
        Err(InputError::JsonParseError(_))
    ));

    let input = ModuleInput::from_json(r#"{ "a": true, "b": "x", "c": null }"#).unwrap();
    assert_eq!(input.len(), 3);
    assert!(input.is_true("a"));
    assert!(!input.is_set("c"));
}

#[test]
fn test_module_id_parsing() {
    assert_eq!("prior_cabg".parse::<ModuleId>().unwrap(), ModuleId::PriorCabg);
    assert!(matches!(
        "nope".parse::<ModuleId>(),
        Err(InputError::UnknownModule(name)) if name == "nope"
    ));
    assert_eq!(
        serde_json::to_string(&ModuleId::KnownNonobstructiveCad).unwrap(),
        "\"known_nonobstructive_cad\""
    );
}

#[test]
fn test_form_reader_feeds_the_evaluator() {
    let mut form = AHashMap::new();
    form.insert("nk-risk-cat".to_string(), "low".to_string());
    form.insert("nk-low-risk-choice".to_string(), "no_testing".to_string());
    form.insert("nk-test-limitation".to_string(), "".to_string());
    form.insert("nk-inoca-suspected".to_string(), "no".to_string());

    let input = FormReader::new(no_known_cad::FIELDS).read(&form);
    assert!(!input.is_set("testLimitation"));
    assert_eq!(input.get("inocaSuspected"), &FieldValue::Bool(false));

    let result = evaluate(ModuleId::NoKnownCad, &input);
    assert_eq!(result.disposition(), "No testing recommended");
}

#[test]
fn test_form_session_round_trip_with_reader() {
    let mut session = FormSession::new();
    let before: FieldSnapshot = [("nk-risk-cat", "low")].into_iter().collect();
    session.capture(before.clone());

    let mut restored = AHashMap::new();
    assert!(session.restore(|snapshot| restored = snapshot.values.clone()));
    assert_eq!(restored, before.values);

    let input = FormReader::new(no_known_cad::FIELDS).read(&restored);
    assert_eq!(input.get("riskCat"), &FieldValue::from("low"));
    assert!(!session.can_go_back());
}

#[test]
fn test_resource_kinds_of_bundled_nodes() {
    let registry = registry();
    let node = registry.get("acute").unwrap().node("hs_troponin").unwrap();
    let kinds: Vec<_> = node
        .resources
        .iter()
        .map(|r| ResourceKind::detect(&r.url))
        .collect();
    assert_eq!(kinds, vec![ResourceKind::Pdf, ResourceKind::Image]);
    assert!(kinds.iter().all(ResourceKind::is_embeddable));
}

#[test]
fn test_display_table_renders_tree() {
    let text = DisplayTable {
        table: ModuleId::NoKnownCad.table(),
    }
    .to_string();

    assert!(text.starts_with("Stable chest pain: no known CAD [no_known_cad v2021.1]"));
    assert!(text.contains("switch $riskCat"));
    assert!(text.contains("= intermediate_high"));
    assert!(text.contains("=> No testing recommended"));
    assert!(text.contains("otherwise -> TEST_LIMITATION"));
    assert!(text.contains("cross-link: $inocaSuspected"));
}

#[test]
fn test_report_formats_nodes_and_results() {
    let registry = registry();
    let acute = registry.get("acute").unwrap();
    let pages = build_page_index(acute);
    let node = acute.node("troponin_result").unwrap();
    let page = pages.iter().find(|p| p.node_id == node.id);

    let text = ReportFormatter::format_node(node, page);
    assert!(text.starts_with('['));
    assert!(text.contains("1) "));
    assert!(text.contains("(opens)"));

    let result = evaluate(
        ModuleId::InocaManagement,
        &ModuleInput::new()
            .with("phenotype", "cmd")
            .with("refractorySymptoms", true),
    );
    let report = ReportFormatter::format_result(&result);
    assert!(report.contains("Disposition: Microvascular dysfunction therapy"));
    assert!(report.contains("[!] Refer to a specialized INOCA center"));
}
