//! Stable chest pain after coronary artery bypass grafting.

use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{Condition, DecisionTable, Effect, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::tristate("gdmtOptimized", "cabg-gdmt-optimized", "GDMT optimized"),
    FieldSpec::choice(
        "strategy",
        "cabg-strategy",
        "Evaluation strategy",
        &["stress_imaging", "ccta", "ica"],
    ),
    FieldSpec::choice(
        "stressResult",
        "cabg-stress-result",
        "Stress imaging result",
        &["low_risk", "moderate_severe_ischemia", "inconclusive"],
    ),
    FieldSpec::choice(
        "graftResult",
        "cabg-graft-result",
        "CCTA graft assessment",
        &["patent", "graft_disease"],
    ),
    FieldSpec::tristate(
        "testLimitation",
        "cabg-test-limitation",
        "Any limitation for the selected test",
    ),
    FieldSpec::text(
        "testLimitationNote",
        "cabg-test-limitation-note",
        "Limitation note",
    ),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn build() -> DecisionTable {
    let stress = Switch::on("stressResult")
        .when(
            "low_risk",
            Outcome::new(
                "Continue GDMT",
                "Low-risk stress imaging after CABG: continue medical therapy.",
            )
            .push(optimize_gdmt()),
        )
        .when(
            "moderate_severe_ischemia",
            Outcome::new(
                "Invasive coronary angiography",
                "Moderate to severe ischemia after CABG.",
            )
            .push(refer_ica("Graft or native-vessel ischemia.", "COR 1")),
        )
        .when(
            "inconclusive",
            Outcome::new(
                "Invasive coronary angiography considered",
                "Inconclusive stress imaging after CABG: ICA is reasonable.",
            )
            .push(refer_ica("Inconclusive noninvasive testing.", "COR 2a")),
        );

    let grafts = Switch::on("graftResult")
        .when(
            "patent",
            Outcome::new(
                "Continue GDMT",
                "Patent grafts on CCTA: native-vessel disease may still explain symptoms.",
            )
            .push(optimize_gdmt())
            .push(
                NextStep::info("Stress imaging if symptoms persist", "Evaluate native-vessel ischemia.")
                    .strength("COR 2a"),
            ),
        )
        .when(
            "graft_disease",
            Outcome::new(
                "Invasive coronary angiography",
                "Graft stenosis or occlusion on CCTA.",
            )
            .push(refer_ica("Graft disease on CCTA.", "COR 1")),
        );

    let strategy = Switch::on("strategy")
        .when_with(
            "stress_imaging",
            vec![Effect::unshift(
                NextStep::info("Strategy: stress imaging", "Stress PET/SPECT MPI or stress CMR.")
                    .strength("COR 2a"),
            )],
            stress,
        )
        .when_with(
            "ccta",
            vec![Effect::unshift(
                NextStep::info("Strategy: CCTA", "Assess graft patency.").strength("COR 2a"),
            )],
            grafts,
        )
        .when_with(
            "ica",
            vec![Effect::unshift(refer_ica(
                "Persistent symptoms after CABG despite GDMT.",
                "COR 2a",
            ))],
            Outcome::new(
                "Invasive coronary angiography",
                "Persistent symptoms after CABG: ICA to define graft and native anatomy.",
            ),
        );

    let root = Switch::on("gdmtOptimized")
        .when(
            false,
            Outcome::new(
                "Optimize medical therapy",
                "Prior CABG: optimize GDMT before further testing.",
            )
            .push(optimize_gdmt()),
        )
        .when(true, strategy);

    DecisionTable {
        id: "prior_cabg",
        title: "Stable chest pain: prior CABG",
        version: "2021.1",
        scope: "Prior CABG module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: Some(feasibility(vec![
            rule(
                Condition::Equals("strategy", "stress_imaging"),
                "STRESS_LIMITATION",
                "Stress imaging may be limited (inability to exercise, attenuation or arrhythmia).",
                NextStep::info("Consider CCTA for graft patency", "Anatomic assessment of grafts."),
            ),
            rule(
                Condition::Equals("strategy", "ccta"),
                "CCTA_LIMITATION",
                "CCTA may be limited (surgical clips, heavy native-vessel calcification or renal function).",
                NextStep::info("Consider stress imaging instead", "Functional assessment after CABG."),
            ),
        ])),
        root: root.into(),
        cross_links: Vec::new(),
    }
}
