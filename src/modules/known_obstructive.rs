//! Stable chest pain with known obstructive CAD.

use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{Condition, DecisionTable, Effect, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::tristate("gdmtOptimized", "ob-gdmt-optimized", "GDMT optimized"),
    FieldSpec::choice(
        "symptomStatus",
        "ob-symptom-status",
        "Symptom status on GDMT",
        &["controlled", "persistent"],
    ),
    FieldSpec::choice(
        "strategy",
        "ob-strategy",
        "Evaluation strategy",
        &["stress_imaging", "ccta", "ica"],
    ),
    FieldSpec::choice(
        "stressResult",
        "ob-stress-result",
        "Stress imaging result",
        &["low_risk", "moderate_severe_ischemia", "inconclusive"],
    ),
    FieldSpec::choice(
        "cctaResult",
        "ob-ccta-result",
        "CCTA result",
        &["no_progression", "obstructive_progression"],
    ),
    FieldSpec::tristate(
        "testLimitation",
        "ob-test-limitation",
        "Any limitation for the selected test",
    ),
    FieldSpec::text("testLimitationNote", "ob-test-limitation-note", "Limitation note"),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn continue_gdmt() -> Outcome {
    Outcome::new(
        "Continue GDMT",
        "Symptoms controlled or low-risk findings: continue guideline-directed medical therapy.",
    )
    .push(optimize_gdmt())
}

fn build() -> DecisionTable {
    let stress = Switch::on("stressResult")
        .when("low_risk", continue_gdmt())
        .when(
            "moderate_severe_ischemia",
            Outcome::new(
                "Invasive coronary angiography",
                "Moderate to severe ischemia despite GDMT: ICA to guide revascularization.",
            )
            .push(refer_ica("Moderate to severe ischemia on GDMT.", "COR 1")),
        )
        .when(
            "inconclusive",
            Outcome::new(
                "Invasive coronary angiography considered",
                "Inconclusive stress imaging with persistent symptoms: ICA is reasonable.",
            )
            .push(refer_ica("Inconclusive noninvasive testing.", "COR 2a")),
        );

    let ccta = Switch::on("cctaResult")
        .when("no_progression", continue_gdmt())
        .when(
            "obstructive_progression",
            Outcome::new(
                "Invasive coronary angiography",
                "Progression of obstructive disease with persistent symptoms.",
            )
            .push(refer_ica("Obstructive progression on CCTA.", "COR 1")),
        );

    let strategy = Switch::on("strategy")
        .when_with(
            "stress_imaging",
            vec![Effect::unshift(
                NextStep::info(
                    "Strategy: stress imaging",
                    "Stress PET/SPECT MPI, stress CMR or stress echocardiography.",
                )
                .strength("COR 1"),
            )],
            stress,
        )
        .when_with(
            "ccta",
            vec![Effect::unshift(
                NextStep::info("Strategy: CCTA", "Reasonable for stents 3 mm or larger.")
                    .strength("COR 2a"),
            )],
            ccta,
        )
        .when_with(
            "ica",
            vec![Effect::unshift(refer_ica(
                "Persistent symptoms despite GDMT.",
                "COR 1",
            ))],
            Outcome::new(
                "Invasive coronary angiography",
                "Persistent limiting symptoms despite GDMT: ICA to guide revascularization.",
            ),
        );

    let symptoms = Switch::on("symptomStatus")
        .when("controlled", continue_gdmt())
        .when("persistent", strategy);

    let root = Switch::on("gdmtOptimized")
        .when(
            false,
            Outcome::new(
                "Optimize medical therapy",
                "Known obstructive CAD: optimize GDMT before further testing.",
            )
            .push(optimize_gdmt()),
        )
        .when(true, symptoms);

    DecisionTable {
        id: "known_obstructive_cad",
        title: "Stable chest pain: known obstructive CAD",
        version: "2021.1",
        scope: "Known obstructive CAD module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: Some(feasibility(vec![
            rule(
                Condition::Equals("strategy", "stress_imaging"),
                "STRESS_LIMITATION",
                "Stress imaging may be limited (inability to exercise, poor acoustic windows or arrhythmia).",
                NextStep::info(
                    "Consider invasive coronary angiography",
                    "Direct anatomic and physiologic assessment.",
                ),
            ),
            rule(
                Condition::Equals("strategy", "ccta"),
                "CCTA_LIMITATION",
                "CCTA may be limited by stents smaller than 3 mm or heavy calcification.",
                NextStep::info("Consider stress imaging instead", "Functional assessment of known disease."),
            ),
        ])),
        root: root.into(),
        cross_links: Vec::new(),
    }
}
