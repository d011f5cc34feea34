//! Stable chest pain with known nonobstructive CAD (stenosis below 50%).

use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{Condition, DecisionTable, Effect, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::tristate(
        "persistentSymptoms",
        "nn-persistent-symptoms",
        "Persistent or worsening symptoms",
    ),
    FieldSpec::choice(
        "strategy",
        "nn-strategy",
        "Evaluation strategy",
        &["intensify_therapy", "ccta", "stress_imaging"],
    ),
    FieldSpec::choice(
        "cctaResult",
        "nn-ccta-result",
        "CCTA result",
        &["stable_nonobstructive", "progression_nonobstructive", "obstructive"],
    ),
    FieldSpec::choice(
        "stressResult",
        "nn-stress-result",
        "Stress imaging result",
        &["no_ischemia", "ischemia", "inconclusive"],
    ),
    FieldSpec::tristate(
        "testLimitation",
        "nn-test-limitation",
        "Any limitation for the selected test",
    ),
    FieldSpec::text("testLimitationNote", "nn-test-limitation-note", "Limitation note"),
    FieldSpec::tristate("inocaSuspected", "nn-inoca-suspected", "INOCA suspected"),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn intensify() -> Outcome {
    Outcome::new(
        "Intensify medical therapy",
        "Persistent symptoms with nonobstructive CAD: intensify antianginal and preventive therapy.",
    )
    .push(optimize_gdmt())
}

fn build() -> DecisionTable {
    let ccta = Switch::on("cctaResult")
        .when("stable_nonobstructive", intensify())
        .when(
            "progression_nonobstructive",
            Outcome::new(
                "Intensify preventive therapy",
                "Plaque progression without obstruction: intensify preventive therapy.",
            )
            .push(
                NextStep::info("High-intensity statin", "Target LDL-C reduction of 50% or more.")
                    .strength("COR 1"),
            )
            .push(optimize_gdmt()),
        )
        .when(
            "obstructive",
            Outcome::new(
                "Invasive coronary angiography",
                "Progression to obstructive disease with persistent symptoms.",
            )
            .push(refer_ica("New obstructive stenosis on CCTA.", "COR 2a")),
        );

    let stress = Switch::on("stressResult")
        .when("no_ischemia", intensify())
        .when(
            "ischemia",
            Outcome::new(
                "Invasive coronary angiography",
                "Inducible ischemia despite known nonobstructive CAD.",
            )
            .push(refer_ica("Ischemia on stress imaging.", "COR 2a"))
            .push(optimize_gdmt()),
        )
        .when(
            "inconclusive",
            Outcome::new(
                "Additional testing",
                "Inconclusive stress imaging: CCTA is reasonable to reassess plaque.",
            )
            .push(NextStep::info("CCTA", "Reassess plaque and stenosis.").strength("COR 2a")),
        );

    let strategy = Switch::on("strategy")
        .when("intensify_therapy", intensify())
        .when_with(
            "ccta",
            vec![Effect::unshift(
                NextStep::info("Strategy: CCTA", "Assess plaque progression.").strength("COR 2a"),
            )],
            ccta,
        )
        .when_with(
            "stress_imaging",
            vec![Effect::unshift(
                NextStep::info("Strategy: stress imaging", "Assess for inducible ischemia.")
                    .strength("COR 2a"),
            )],
            stress,
        );

    let root = Switch::on("persistentSymptoms")
        .when(
            false,
            Outcome::new(
                "Continue preventive therapy",
                "Known nonobstructive CAD without persistent symptoms: continue risk-factor modification.",
            )
            .push(preventive_therapy()),
        )
        .when(true, strategy);

    DecisionTable {
        id: "known_nonobstructive_cad",
        title: "Stable chest pain: known nonobstructive CAD",
        version: "2021.1",
        scope: "Known nonobstructive CAD module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: Some(feasibility(vec![
            rule(
                Condition::Equals("strategy", "ccta"),
                "CCTA_LIMITATION",
                "CCTA may be limited (heart-rate control, heavy calcification, contrast allergy or renal function).",
                NextStep::info("Consider stress imaging instead", "Functional assessment avoids CT limitations."),
            ),
            rule(
                Condition::Equals("strategy", "stress_imaging"),
                "STRESS_LIMITATION",
                "Stress imaging may be limited (inability to exercise, poor acoustic windows or arrhythmia).",
                NextStep::info("Consider CCTA instead", "Anatomic reassessment of known plaque."),
            ),
        ])),
        root: root.into(),
        cross_links: vec![inoca_cross_link()],
    }
}
