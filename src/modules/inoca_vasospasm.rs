//! INOCA: suspected coronary vasospasm.

use super::ModuleId;
use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{Condition, DecisionTable, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice(
        "spasmTesting",
        "vs-spasm-testing",
        "Acetylcholine provocation result",
        &[
            "not_done",
            "positive_epicardial",
            "positive_microvascular",
            "negative",
        ],
    ),
    FieldSpec::tristate(
        "testLimitation",
        "vs-test-limitation",
        "Any limitation for provocation testing",
    ),
    FieldSpec::text("testLimitationNote", "vs-test-limitation-note", "Limitation note"),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn calcium_channel_blocker() -> NextStep {
    NextStep::info("Calcium channel blocker", "First-line vasodilator therapy.").strength("COR 1")
}

fn build() -> DecisionTable {
    let root = Switch::on("spasmTesting")
        .when(
            "not_done",
            Outcome::new(
                "Provocation testing recommended",
                "Suspected vasospasm: invasive acetylcholine provocation is reasonable to confirm the diagnosis.",
            )
            .push(
                NextStep::info(
                    "Invasive acetylcholine provocation testing",
                    "Performed at a center experienced in coronary function testing.",
                )
                .strength("COR 2a"),
            )
            .push(
                NextStep::info(
                    "Empiric calcium channel blocker",
                    "Reasonable while testing is pending.",
                )
                .with_info("Avoid nonselective beta-blockers when vasospasm is suspected."),
            ),
        )
        .when(
            "positive_epicardial",
            Outcome::new(
                "Vasospastic angina",
                "Epicardial coronary spasm confirmed.",
            )
            .push(calcium_channel_blocker())
            .push(NextStep::info("Long-acting nitrate", "Add if symptoms persist.").strength("COR 2a"))
            .push(NextStep::info(
                "Avoid triggers",
                "Smoking, sympathomimetics and triptans.",
            )),
        )
        .when(
            "positive_microvascular",
            Outcome::new(
                "Microvascular spasm",
                "Symptoms and ischemic ECG changes without epicardial spasm.",
            )
            .push(calcium_channel_blocker())
            .push(open_module(
                "Phenotype-directed management",
                "Further therapy options for microvascular spasm.",
                ModuleId::InocaManagement,
            )),
        )
        .when(
            "negative",
            Outcome::new(
                "Vasospasm not demonstrated",
                "Negative provocation: evaluate coronary microvascular dysfunction.",
            )
            .push(open_module(
                "Evaluate microvascular function",
                "PET, CMR or invasive coronary function testing.",
                ModuleId::InocaTesting,
            )),
        );

    DecisionTable {
        id: "inoca_vasospasm",
        title: "INOCA: suspected vasospasm",
        version: "2021.1",
        scope: "INOCA vasospasm module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: Some(feasibility(vec![rule(
            Condition::Equals("spasmTesting", "not_done"),
            "PROVOCATION_LIMITATION",
            "Provocation testing may be unavailable or contraindicated.",
            NextStep::info(
                "Refer to a specialized center",
                "Centers experienced in acetylcholine provocation testing.",
            ),
        )])),
        root: root.into(),
        cross_links: Vec::new(),
    }
}
