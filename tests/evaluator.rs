//! The generic table interpreter: scope, feasibility, validation, branching
//! and cross-links.
mod common;
use cardiopath::input::FieldSpec;
use cardiopath::prelude::*;
use cardiopath::table::{Condition, CrossLink, Effect, Feasibility, FeasibilityRule, Outcome, Switch};
use common::*;
use serde_json::json;

fn labels(result: &EvaluationResult) -> Vec<&str> {
    result.next_steps().iter().map(|s| s.label.as_str()).collect()
}

#[test]
fn test_low_risk_no_testing_branch_trace() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({ "riskCat": "low", "lowRiskChoice": "no_testing" })),
    );

    assert_eq!(
        result.branches_taken(),
        ["riskCat=low", "lowRiskChoice=no_testing"]
    );
    assert_eq!(result.disposition(), "No testing recommended");
    assert!(!result.is_incomplete());
    assert!(warnings(&result).is_empty());
}

#[test]
fn test_scope_flag_always_leads() {
    for value in [json!({}), json!({ "riskCat": "low", "lowRiskChoice": "cac" })] {
        let result = evaluate(ModuleId::NoKnownCad, &input(value));
        let first = &result.flags[0];
        assert_eq!(first.code, "SCOPE");
        assert_eq!(first.severity, Severity::Info);
    }
}

#[test]
fn test_missing_index_test_reports_one_warning() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({ "riskCat": "intermediate_high" })),
    );

    let warnings = warnings(&result);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, "REQ_INDEX_TEST");
    assert_eq!(result.disposition(), INCOMPLETE);
    assert_eq!(result.branches_taken(), ["riskCat=intermediate_high"]);
    assert!(result.interpretation.summary.contains("Index test"));
}

#[test]
fn test_explicit_null_counts_as_missing() {
    let result = evaluate(ModuleId::NoKnownCad, &input(json!({ "riskCat": null })));
    assert!(result.has_flag("REQ_RISK_CAT"));
    assert!(result.is_incomplete());
    assert!(result.branches_taken().is_empty());
}

#[test]
fn test_blank_string_counts_as_missing() {
    for blank in ["", "   "] {
        let result = evaluate(ModuleId::NoKnownCad, &input(json!({ "riskCat": blank })));
        let codes: Vec<_> = result.flags.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, ["SCOPE", "REQ_RISK_CAT"]);
        assert!(result.is_incomplete());
    }
}

#[test]
fn test_unknown_value_is_flagged_not_thrown() {
    let result = evaluate(ModuleId::NoKnownCad, &input(json!({ "riskCat": "medium" })));

    let warnings = warnings(&result);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, "UNKNOWN_RISK_CAT");
    assert!(warnings[0].message.contains("medium"));
    assert_eq!(result.disposition(), INCOMPLETE);
}

#[test]
fn test_type_mismatch_is_an_unknown_value() {
    let result = evaluate(
        ModuleId::KnownNonobstructiveCad,
        &input(json!({ "persistentSymptoms": "yes" })),
    );
    assert!(result.has_flag("UNKNOWN_PERSISTENT_SYMPTOMS"));
    assert!(result.is_incomplete());

    let result = evaluate(ModuleId::NoKnownCad, &input(json!({ "riskCat": true })));
    assert!(result.has_flag("UNKNOWN_RISK_CAT"));
}

#[test]
fn test_boolean_branch_labels() {
    let result = evaluate(
        ModuleId::KnownNonobstructiveCad,
        &input(json!({ "persistentSymptoms": false })),
    );
    assert_eq!(result.branches_taken(), ["persistentSymptoms=false"]);
    assert_eq!(result.disposition(), "Continue preventive therapy");
}

#[test]
fn test_feasibility_note_is_appended() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({
            "riskCat": "intermediate_high",
            "indexTest": "ccta",
            "testLimitation": true,
            "testLimitationNote": "  eGFR 25  ",
        })),
    );

    let flag = result
        .flags
        .iter()
        .find(|f| f.code == "CCTA_LIMITATION")
        .expect("feasibility flag");
    assert_eq!(flag.severity, Severity::Warning);
    assert!(flag.message.ends_with(" Note: eGFR 25"));

    // Feasibility runs even though cctaResult is still missing.
    assert!(result.has_flag("REQ_CCTA_RESULT"));
    assert_eq!(result.disposition(), INCOMPLETE);
    assert_eq!(
        labels(&result),
        ["Index test: CCTA", "Consider stress imaging instead"]
    );
}

#[test]
fn test_feasibility_without_note_or_selection() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({ "testLimitation": true, "testLimitationNote": "" })),
    );

    let flag = result
        .flags
        .iter()
        .find(|f| f.code == "TEST_LIMITATION")
        .expect("fallback feasibility flag");
    assert!(!flag.message.contains("Note:"));
    assert!(result.has_flag("REQ_RISK_CAT"));
    assert_eq!(labels(&result), ["Consider an alternative test"]);
}

#[test]
fn test_feasibility_does_not_change_disposition() {
    let base = json!({
        "riskCat": "intermediate_high",
        "indexTest": "stress_imaging",
        "stressResult": "normal",
    });
    let mut limited = base.clone();
    limited["testLimitation"] = json!(true);

    let without = evaluate(ModuleId::NoKnownCad, &input(base));
    let with = evaluate(ModuleId::NoKnownCad, &input(limited));

    assert_eq!(with.disposition(), without.disposition());
    assert_eq!(warnings(&with).len(), warnings(&without).len() + 1);
    assert_eq!(with.next_steps().len(), without.next_steps().len() + 1);
    assert!(with.has_flag("STRESS_LIMITATION"));
}

#[test]
fn test_index_test_is_unshifted_before_escalation() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({
            "riskCat": "intermediate_high",
            "indexTest": "stress_imaging",
            "stressResult": "moderate_severe_ischemia",
        })),
    );

    assert_eq!(result.disposition(), "Invasive coronary angiography");
    let steps = result.next_steps();
    assert_eq!(steps[0].label, "Index test: stress imaging");
    assert_eq!(steps[1].label, "Refer for invasive coronary angiography");
    assert_eq!(steps[1].level, Severity::Warning);
    assert_eq!(steps[1].strength.as_deref(), Some("COR 1"));
}

#[test]
fn test_cross_link_is_appended_on_every_exit() {
    let complete = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({
            "riskCat": "intermediate_high",
            "indexTest": "ccta",
            "cctaResult": "nonobstructive",
            "inocaSuspected": true,
        })),
    );
    assert_eq!(complete.disposition(), "Nonobstructive CAD");
    let last = complete.next_steps().last().unwrap();
    assert_eq!(last.link.as_deref(), Some("#/module/inoca_chooser"));

    let incomplete = evaluate(ModuleId::NoKnownCad, &input(json!({ "inocaSuspected": true })));
    assert!(incomplete.is_incomplete());
    assert_eq!(
        incomplete.next_steps().last().unwrap().link.as_deref(),
        Some("#/module/inoca_chooser")
    );

    let escalated = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({
            "riskCat": "intermediate_high",
            "indexTest": "ccta",
            "cctaResult": "obstructive_high_risk",
            "inocaSuspected": true,
        })),
    );
    assert_eq!(escalated.disposition(), "Invasive coronary angiography");
    assert!(escalated
        .next_steps()
        .iter()
        .any(|s| s.link.as_deref() == Some("#/module/inoca_chooser")));
}

#[test]
fn test_no_cross_link_when_not_suspected() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({
            "riskCat": "intermediate_high",
            "indexTest": "ccta",
            "cctaResult": "nonobstructive",
            "inocaSuspected": false,
        })),
    );
    assert!(result.next_steps().iter().all(|s| s.link.is_none()));
}

#[test]
fn test_values_echo_the_input() {
    let input = input(json!({ "riskCat": "low", "lowRiskChoice": "cac", "extra": null }));
    let result = evaluate(ModuleId::NoKnownCad, &input);

    assert_eq!(result.values.input_summary, input);
    assert_eq!(result.values.pathway_id, "no_known_cad");
    assert_eq!(result.values.version, "2021.1");
}

#[test]
fn test_result_serializes_to_camel_case() {
    let result = evaluate(
        ModuleId::NoKnownCad,
        &input(json!({ "riskCat": "low", "lowRiskChoice": "no_testing" })),
    );
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["values"]["pathwayId"], "no_known_cad");
    assert_eq!(
        value["values"]["branchesTaken"],
        json!(["riskCat=low", "lowRiskChoice=no_testing"])
    );
    assert_eq!(value["values"]["inputSummary"]["riskCat"], "low");
    assert_eq!(value["flags"][0]["severity"], "info");
    assert_eq!(
        value["interpretation"]["disposition"],
        "No testing recommended"
    );
    let step = &value["interpretation"]["nextSteps"][0];
    assert_eq!(step["level"], "info");
    assert!(step.get("link").is_none());

    let back: EvaluationResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}

// A table exercising interpreter features no shipped module uses.

const TEST_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("kind", "t-kind", "Kind", &["a", "b"]),
    FieldSpec::tristate("confirmed", "t-confirmed", "Confirmed"),
    FieldSpec::tristate("limited", "t-limited", "Limited"),
    FieldSpec::text("note", "t-note", "Note"),
];

fn test_table() -> DecisionTable {
    let rule = |code| FeasibilityRule {
        when: Condition::Always,
        code,
        message: "Limited.",
        alternative: NextStep::info("Alternative", "Use another test."),
    };
    DecisionTable {
        id: "test_table",
        title: "Test table",
        version: "0",
        scope: "Test scope.",
        fields: TEST_FIELDS,
        feasibility: Some(Feasibility {
            limitation_field: "limited",
            note_field: "note",
            rules: vec![rule("FIRST"), rule("SECOND")],
            fallback: rule("FALLBACK"),
        }),
        root: Switch::on("kind")
            .requires("confirmed")
            .when_with(
                "a",
                vec![
                    Effect::push(NextStep::info("Pushed", "")),
                    Effect::Flag(Flag::new(Severity::Danger, "ARM_FLAG", "From arm.")),
                ],
                Outcome::new("A", "Picked a.")
                    .unshift(NextStep::warning("Urgent", ""))
                    .push(NextStep::info("Later", "")),
            )
            .when("b", Outcome::new("B", "Picked b."))
            .into(),
        cross_links: vec![CrossLink {
            when: Condition::Equals("kind", "b").negate(),
            step: NextStep::info("Cross", "").link("#/module/x"),
        }],
    }
}

#[test]
fn test_every_missing_field_of_a_layer_is_reported() {
    let table = test_table();
    let result = Evaluator::new(&table).eval(&ModuleInput::new());

    let codes: Vec<_> = warnings(&result).iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, ["REQ_KIND", "REQ_CONFIRMED"]);
    assert!(result.interpretation.summary.contains("Kind, Confirmed"));
}

#[test]
fn test_first_matching_feasibility_rule_wins() {
    let table = test_table();
    let result = Evaluator::new(&table).eval(&ModuleInput::new().with("limited", true));
    assert!(result.has_flag("FIRST"));
    assert!(!result.has_flag("SECOND"));
    assert!(!result.has_flag("FALLBACK"));
}

#[test]
fn test_arm_effects_and_outcome_placement() {
    let table = test_table();
    let input = ModuleInput::new().with("kind", "a").with("confirmed", true);
    let result = Evaluator::new(&table).eval(&input);

    assert_eq!(result.disposition(), "A");
    assert_eq!(labels(&result), ["Urgent", "Pushed", "Later", "Cross"]);
    assert!(result.has_flag("ARM_FLAG"));
    assert_eq!(result.flags_with(Severity::Danger).count(), 1);
}

#[test]
fn test_negated_cross_link_condition() {
    let table = test_table();
    let input = ModuleInput::new().with("kind", "b").with("confirmed", false);
    let result = Evaluator::new(&table).eval(&input);

    assert_eq!(result.disposition(), "B");
    assert!(result.next_steps().is_empty());
}
