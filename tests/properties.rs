//! Property tests over generated module input.
mod common;
use cardiopath::input::{FieldKind, FieldSpec};
use cardiopath::prelude::*;
use cardiopath::table::DecisionNode;
use common::*;
use proptest::prelude::*;
use proptest::sample::select;

fn field_value(spec: FieldSpec) -> BoxedStrategy<FieldValue> {
    match spec.kind {
        FieldKind::Tristate => prop_oneof![
            2 => Just(FieldValue::Unset),
            4 => any::<bool>().prop_map(FieldValue::Bool),
            1 => Just(FieldValue::from("yes")),
        ]
        .boxed(),
        FieldKind::Choice(codes) => prop_oneof![
            1 => Just(FieldValue::Unset),
            6 => select(codes).prop_map(FieldValue::from),
            1 => Just(FieldValue::from("bogus")),
            1 => any::<bool>().prop_map(FieldValue::Bool),
        ]
        .boxed(),
        FieldKind::Text => prop_oneof![
            Just(FieldValue::Unset),
            "[a-zA-Z ]{0,12}".prop_map(FieldValue::Text),
        ]
        .boxed(),
    }
}

fn module_input(module: ModuleId) -> impl Strategy<Value = ModuleInput> {
    let fields = module.table().fields;
    fields
        .iter()
        .map(|spec| field_value(*spec))
        .collect::<Vec<_>>()
        .prop_map(move |values| {
            fields
                .iter()
                .zip(values)
                .map(|(spec, value)| (spec.id, value))
                .collect::<ModuleInput>()
        })
}

fn module_and_input() -> impl Strategy<Value = (ModuleId, ModuleInput)> {
    select(ModuleId::ALL.to_vec()).prop_flat_map(|module| (Just(module), module_input(module)))
}

fn root_field(table: &DecisionTable) -> &'static str {
    match &table.root {
        DecisionNode::Switch(switch) => switch.field,
        DecisionNode::Outcome(_) => unreachable!("every module branches at its root"),
    }
}

proptest! {
    #[test]
    fn prop_evaluation_is_total((module, input) in module_and_input()) {
        let table = module.table();
        let result = evaluate(module, &input);

        prop_assert!(!result.flags.is_empty());
        prop_assert_eq!(result.flags[0].code.as_str(), "SCOPE");
        prop_assert_eq!(result.flags[0].severity, Severity::Info);

        let documented = documented_dispositions(table);
        if result.is_incomplete() {
            prop_assert!(result
                .flags
                .iter()
                .any(|f| f.code.starts_with("REQ_") || f.code.starts_with("UNKNOWN_")));
        } else {
            prop_assert!(documented.iter().any(|d| *d == result.disposition()));
        }
    }

    #[test]
    fn prop_branches_record_the_input((module, input) in module_and_input()) {
        let result = evaluate(module, &input);
        for entry in result.branches_taken() {
            let (field, value) = entry.split_once('=').unwrap();
            prop_assert_eq!(input.get(field).to_string(), value);
        }
    }

    #[test]
    fn prop_feasibility_is_independent((module, input) in module_and_input()) {
        let table = module.table();
        prop_assume!(table.feasibility.is_some());

        let mut base = input.clone();
        base.set("testLimitation", FieldValue::Unset);
        let mut limited = input;
        limited.set("testLimitation", true);

        let without = evaluate(module, &base);
        let with = evaluate(module, &limited);

        prop_assert_eq!(with.disposition(), without.disposition());
        prop_assert_eq!(with.branches_taken(), without.branches_taken());
        prop_assert_eq!(warnings(&with).len(), warnings(&without).len() + 1);
        prop_assert_eq!(with.next_steps().len(), without.next_steps().len() + 1);
    }

    #[test]
    fn prop_unknown_root_value_is_a_single_warning((module, input) in module_and_input()) {
        let table = module.table();
        let mut input = input;
        input.set(root_field(table), "definitely_not_a_code");
        input.set("testLimitation", FieldValue::Unset);

        let result = evaluate(module, &input);
        let warnings = warnings(&result);

        prop_assert!(result.is_incomplete());
        prop_assert_eq!(warnings.len(), 1);
        prop_assert!(warnings[0].code.starts_with("UNKNOWN_"));
        prop_assert!(result.branches_taken().is_empty());
    }

    #[test]
    fn prop_evaluation_is_idempotent((module, input) in module_and_input()) {
        let copy = input.clone();
        let first = evaluate(module, &input);
        let second = evaluate(module, &copy);
        prop_assert_eq!(first, second);
    }
}
