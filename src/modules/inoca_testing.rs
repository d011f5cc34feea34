//! INOCA: coronary microvascular function testing.

use super::ModuleId;
use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{Condition, DecisionTable, Effect, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice(
        "testModality",
        "it-test-modality",
        "Testing modality",
        &["pet_mbf", "cmr_perfusion", "invasive_cft"],
    ),
    FieldSpec::choice(
        "mbfrResult",
        "it-mbfr-result",
        "PET myocardial blood flow reserve",
        &["mbfr_below_2_0", "mbfr_2_0_or_above"],
    ),
    FieldSpec::choice(
        "cmrResult",
        "it-cmr-result",
        "CMR myocardial perfusion reserve",
        &["mpr_reduced", "mpr_normal"],
    ),
    FieldSpec::choice(
        "cftResult",
        "it-cft-result",
        "Invasive coronary function testing result",
        &["cmd", "vasospasm", "cmd_and_vasospasm", "normal"],
    ),
    FieldSpec::tristate(
        "testLimitation",
        "it-test-limitation",
        "Any limitation for the selected test",
    ),
    FieldSpec::text("testLimitationNote", "it-test-limitation-note", "Limitation note"),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn manage() -> NextStep {
    open_module(
        "Phenotype-directed management",
        "Select therapy for the identified endotype.",
        ModuleId::InocaManagement,
    )
}

fn cmd_confirmed(summary: &'static str) -> Outcome {
    Outcome::new("Coronary microvascular dysfunction", summary).push(manage())
}

fn cmd_not_shown(summary: &'static str) -> Outcome {
    Outcome::new("Microvascular dysfunction not demonstrated", summary).push(
        NextStep::info(
            "Invasive coronary function testing",
            "Includes acetylcholine provocation and index of microcirculatory resistance.",
        )
        .strength("COR 2a"),
    )
}

fn build() -> DecisionTable {
    let pet = Switch::on("mbfrResult")
        .when(
            "mbfr_below_2_0",
            cmd_confirmed("Myocardial blood flow reserve below 2.0 indicates microvascular dysfunction."),
        )
        .when(
            "mbfr_2_0_or_above",
            cmd_not_shown("Normal blood flow reserve; vasospasm is not excluded."),
        );

    let cmr = Switch::on("cmrResult")
        .when(
            "mpr_reduced",
            cmd_confirmed("Reduced myocardial perfusion reserve indicates microvascular dysfunction."),
        )
        .when(
            "mpr_normal",
            cmd_not_shown("Normal perfusion reserve; vasospasm is not excluded."),
        );

    let cft = Switch::on("cftResult")
        .when(
            "cmd",
            cmd_confirmed("Abnormal CFR or IMR on invasive testing."),
        )
        .when(
            "vasospasm",
            Outcome::new(
                "Vasospastic angina",
                "Spasm provoked by acetylcholine.",
            )
            .push(manage()),
        )
        .when(
            "cmd_and_vasospasm",
            Outcome::new(
                "Mixed INOCA endotype",
                "Both microvascular dysfunction and vasospasm demonstrated.",
            )
            .push(manage()),
        )
        .when(
            "normal",
            Outcome::new(
                "Noncardiac chest pain likely",
                "Normal coronary function: evaluate noncardiac causes.",
            )
            .push(NextStep::info(
                "Evaluate noncardiac causes",
                "Gastrointestinal, musculoskeletal and pulmonary causes.",
            )),
        );

    let root = Switch::on("testModality")
        .when_with(
            "pet_mbf",
            vec![Effect::unshift(
                NextStep::info("Modality: PET blood flow", "Quantitative myocardial blood flow reserve.")
                    .strength("COR 2a"),
            )],
            pet,
        )
        .when_with(
            "cmr_perfusion",
            vec![Effect::unshift(
                NextStep::info("Modality: stress CMR perfusion", "Myocardial perfusion reserve.")
                    .strength("COR 2a"),
            )],
            cmr,
        )
        .when_with(
            "invasive_cft",
            vec![Effect::unshift(
                NextStep::info(
                    "Modality: invasive coronary function testing",
                    "CFR, IMR and acetylcholine provocation.",
                )
                .strength("COR 2a"),
            )],
            cft,
        );

    DecisionTable {
        id: "inoca_testing",
        title: "INOCA: coronary function testing",
        version: "2021.1",
        scope: "INOCA testing module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: Some(feasibility(vec![
            rule(
                Condition::Equals("testModality", "pet_mbf"),
                "PET_LIMITATION",
                "PET blood flow quantification may be unavailable locally.",
                NextStep::info("Consider stress CMR perfusion", "Alternative noninvasive assessment."),
            ),
            rule(
                Condition::Equals("testModality", "cmr_perfusion"),
                "CMR_LIMITATION",
                "CMR may be contraindicated (devices, claustrophobia or renal function).",
                NextStep::info("Consider PET blood flow", "Alternative noninvasive assessment."),
            ),
            rule(
                Condition::Equals("testModality", "invasive_cft"),
                "CFT_LIMITATION",
                "Invasive coronary function testing requires an experienced center.",
                NextStep::info(
                    "Consider PET or CMR, or referral",
                    "Noninvasive testing or referral to a specialized center.",
                ),
            ),
        ])),
        root: root.into(),
        cross_links: Vec::new(),
    }
}
