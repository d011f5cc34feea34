//! Stable chest pain with no known coronary artery disease.

use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{Condition, DecisionTable, Effect, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice(
        "riskCat",
        "nk-risk-cat",
        "Risk category",
        &["low", "intermediate_high"],
    ),
    FieldSpec::choice(
        "lowRiskChoice",
        "nk-low-risk-choice",
        "Low-risk strategy",
        &["no_testing", "cac", "exercise_ecg"],
    ),
    FieldSpec::choice(
        "indexTest",
        "nk-index-test",
        "Index test",
        &["ccta", "stress_imaging"],
    ),
    FieldSpec::choice(
        "cctaResult",
        "nk-ccta-result",
        "CCTA result",
        &[
            "no_cad",
            "nonobstructive",
            "stenosis_40_90",
            "obstructive_high_risk",
        ],
    ),
    FieldSpec::choice(
        "ffrctResult",
        "nk-ffrct-result",
        "FFR-CT result",
        &["not_done", "above_0_80", "at_or_below_0_80"],
    ),
    FieldSpec::choice(
        "stressResult",
        "nk-stress-result",
        "Stress imaging result",
        &[
            "normal",
            "mild_ischemia",
            "moderate_severe_ischemia",
            "inconclusive",
        ],
    ),
    FieldSpec::tristate(
        "testLimitation",
        "nk-test-limitation",
        "Any limitation for the selected test",
    ),
    FieldSpec::text("testLimitationNote", "nk-test-limitation-note", "Limitation note"),
    FieldSpec::tristate("inocaSuspected", "nk-inoca-suspected", "INOCA suspected"),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn build() -> DecisionTable {
    let low_risk = Switch::on("lowRiskChoice")
        .when(
            "no_testing",
            Outcome::new(
                "No testing recommended",
                "Low-risk chest pain: deferring diagnostic testing is reasonable.",
            )
            .push(preventive_therapy()),
        )
        .when(
            "cac",
            Outcome::new(
                "Coronary artery calcium scoring",
                "CAC scoring is reasonable as a first-line test to exclude calcified plaque.",
            )
            .unshift(NextStep::info("CAC scoring", "Non-contrast cardiac CT.").strength("COR 2b"))
            .push(preventive_therapy()),
        )
        .when(
            "exercise_ecg",
            Outcome::new(
                "Exercise ECG",
                "Exercise ECG is reasonable when the patient can exercise and the resting ECG is interpretable.",
            )
            .unshift(NextStep::info("Exercise ECG", "Symptom-limited treadmill test.").strength("COR 2a")),
        );

    let ffrct = Switch::on("ffrctResult")
        .when(
            "not_done",
            Outcome::new(
                "FFR-CT or stress imaging recommended",
                "40-90% stenosis in a proximal or middle segment: FFR-CT or stress imaging helps decide on invasive evaluation.",
            )
            .push(NextStep::info("FFR-CT", "CT-derived fractional flow reserve.").strength("COR 2a"))
            .push(NextStep::info("Stress imaging", "PET/SPECT MPI, stress CMR or stress echocardiography.").strength("COR 2a")),
        )
        .when(
            "above_0_80",
            Outcome::new(
                "Medical therapy",
                "FFR-CT above 0.80: lesion not hemodynamically significant.",
            )
            .push(optimize_gdmt()),
        )
        .when(
            "at_or_below_0_80",
            Outcome::new(
                "Invasive coronary angiography",
                "FFR-CT at or below 0.80 indicates lesion-specific ischemia.",
            )
            .push(refer_ica("Lesion-specific ischemia on FFR-CT.", "COR 2a"))
            .push(optimize_gdmt()),
        );

    let ccta = Switch::on("cctaResult")
        .when(
            "no_cad",
            Outcome::new(
                "No CAD on CCTA",
                "No coronary atherosclerosis: low risk, no further testing needed.",
            )
            .push(preventive_therapy()),
        )
        .when(
            "nonobstructive",
            Outcome::new(
                "Nonobstructive CAD",
                "Plaque with stenosis below 40%: intensify preventive therapy.",
            )
            .push(preventive_therapy()),
        )
        .when("stenosis_40_90", ffrct)
        .when(
            "obstructive_high_risk",
            Outcome::new(
                "Invasive coronary angiography",
                "High-risk anatomy (left main 50% or more, or obstructive multivessel disease).",
            )
            .push(refer_ica("High-risk anatomy on CCTA.", "COR 1"))
            .push(optimize_gdmt()),
        );

    let stress = Switch::on("stressResult")
        .when(
            "normal",
            Outcome::new(
                "No further testing",
                "Normal stress imaging: low risk of adverse events.",
            )
            .push(preventive_therapy()),
        )
        .when(
            "mild_ischemia",
            Outcome::new(
                "Medical therapy",
                "Mild ischemia: GDMT; CCTA is reasonable to define plaque burden.",
            )
            .push(optimize_gdmt())
            .push(NextStep::info("CCTA", "Define anatomy and plaque burden.").strength("COR 2a")),
        )
        .when(
            "moderate_severe_ischemia",
            Outcome::new(
                "Invasive coronary angiography",
                "Moderate to severe ischemia on stress imaging.",
            )
            .push(refer_ica("Moderate to severe ischemia.", "COR 1"))
            .push(optimize_gdmt()),
        )
        .when(
            "inconclusive",
            Outcome::new(
                "Additional testing",
                "Inconclusive stress imaging: CCTA is reasonable.",
            )
            .push(NextStep::info("CCTA", "Anatomic evaluation after an inconclusive stress test.").strength("COR 2a")),
        );

    let index_test = Switch::on("indexTest")
        .when_with(
            "ccta",
            vec![Effect::unshift(
                NextStep::info("Index test: CCTA", "Preferred in younger patients or when obstructive CAD is likely to be excluded.")
                    .strength("COR 1"),
            )],
            ccta,
        )
        .when_with(
            "stress_imaging",
            vec![Effect::unshift(
                NextStep::info("Index test: stress imaging", "PET/SPECT MPI, stress CMR or stress echocardiography.")
                    .strength("COR 1"),
            )],
            stress,
        );

    let root = Switch::on("riskCat")
        .when("low", low_risk)
        .when("intermediate_high", index_test);

    DecisionTable {
        id: "no_known_cad",
        title: "Stable chest pain: no known CAD",
        version: "2021.1",
        scope: "No known CAD module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: Some(feasibility(vec![
            rule(
                Condition::Equals("riskCat", "intermediate_high")
                    .and(Condition::Equals("indexTest", "ccta")),
                "CCTA_LIMITATION",
                "CCTA may be limited (heart-rate control, heavy calcification, contrast allergy or renal function).",
                NextStep::info(
                    "Consider stress imaging instead",
                    "PET/SPECT MPI, stress CMR or stress echocardiography.",
                ),
            ),
            rule(
                Condition::Equals("riskCat", "intermediate_high")
                    .and(Condition::Equals("indexTest", "stress_imaging")),
                "STRESS_LIMITATION",
                "Stress imaging may be limited (inability to exercise, poor acoustic windows or arrhythmia).",
                NextStep::info("Consider CCTA instead", "Anatomic testing avoids stress-related limitations."),
            ),
            rule(
                Condition::Equals("riskCat", "low")
                    .and(Condition::Equals("lowRiskChoice", "exercise_ecg")),
                "EXERCISE_ECG_LIMITATION",
                "Exercise ECG may be limited (inability to exercise or uninterpretable resting ECG).",
                NextStep::info("Consider CAC scoring or CCTA instead", "Tests that do not require exercise."),
            ),
        ])),
        root: root.into(),
        cross_links: vec![inoca_cross_link()],
    }
}
