//! INOCA: phenotype-directed management.

use super::common::*;
use crate::evaluator::NextStep;
use crate::input::FieldSpec;
use crate::table::{DecisionTable, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice(
        "phenotype",
        "im-phenotype",
        "INOCA phenotype",
        &[
            "cmd",
            "vasospastic_angina",
            "microvascular_spasm",
            "mixed",
            "noncardiac",
        ],
    ),
    FieldSpec::tristate(
        "refractorySymptoms",
        "im-refractory-symptoms",
        "Symptoms refractory to first-line therapy",
    ),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn cmd_therapy() -> NextStep {
    NextStep::info(
        "Beta-blocker or calcium channel blocker",
        "First-line antianginal therapy for microvascular dysfunction.",
    )
    .strength("COR 2a")
}

fn vasodilator() -> NextStep {
    NextStep::info(
        "Calcium channel blocker",
        "Add long-acting nitrate if symptoms persist.",
    )
    .strength("COR 1")
}

fn specialist_referral() -> NextStep {
    NextStep::warning(
        "Refer to a specialized INOCA center",
        "Refractory angina despite first-line therapy.",
    )
}

/// CMD and mixed phenotypes escalate when symptoms are refractory.
fn refractory(disposition: &'static str, summary: &'static str, first_line: Vec<NextStep>) -> Switch {
    let controlled = first_line
        .iter()
        .cloned()
        .fold(Outcome::new(disposition, summary), Outcome::push)
        .push(preventive_therapy());
    let escalated = first_line
        .into_iter()
        .fold(Outcome::new(disposition, summary), Outcome::push)
        .push(specialist_referral());

    Switch::on("refractorySymptoms")
        .when(false, controlled)
        .when(true, escalated)
}

fn build() -> DecisionTable {
    let root = Switch::on("phenotype")
        .when(
            "cmd",
            refractory(
                "Microvascular dysfunction therapy",
                "Coronary microvascular dysfunction: antianginal and preventive therapy.",
                vec![cmd_therapy()],
            ),
        )
        .when(
            "vasospastic_angina",
            Outcome::new(
                "Vasospastic angina therapy",
                "Epicardial vasospasm: vasodilator therapy and trigger avoidance.",
            )
            .push(vasodilator())
            .push(NextStep::info(
                "Avoid triggers",
                "Smoking, sympathomimetics and nonselective beta-blockers.",
            )),
        )
        .when(
            "microvascular_spasm",
            Outcome::new(
                "Microvascular spasm therapy",
                "Microvascular spasm: calcium channel blocker first line.",
            )
            .push(vasodilator()),
        )
        .when(
            "mixed",
            refractory(
                "Mixed endotype therapy",
                "Microvascular dysfunction with vasospasm: combined therapy.",
                vec![vasodilator(), cmd_therapy()],
            ),
        )
        .when(
            "noncardiac",
            Outcome::new(
                "Noncardiac chest pain likely",
                "Normal coronary function: reassure and evaluate noncardiac causes.",
            )
            .push(NextStep::info(
                "Evaluate noncardiac causes",
                "Gastrointestinal, musculoskeletal and pulmonary causes.",
            )),
        );

    DecisionTable {
        id: "inoca_management",
        title: "INOCA: phenotype-directed management",
        version: "2021.1",
        scope: "INOCA management module: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: None,
        root: root.into(),
        cross_links: Vec::new(),
    }
}
