//! Entry point for ischemia with no obstructive coronary arteries (INOCA):
//! routes to the sub-module answering the clinical question.

use super::ModuleId;
use super::common::*;
use crate::input::FieldSpec;
use crate::table::{DecisionTable, Outcome, Switch};
use once_cell::sync::Lazy;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::tristate(
        "obstructiveExcluded",
        "inoca-obstructive-excluded",
        "Obstructive CAD excluded by CCTA or ICA",
    ),
    FieldSpec::choice(
        "question",
        "inoca-question",
        "Clinical question",
        &["establish_diagnosis", "suspected_vasospasm", "phenotype_known"],
    ),
];

pub static TABLE: Lazy<DecisionTable> = Lazy::new(build);

fn build() -> DecisionTable {
    let question = Switch::on("question")
        .when(
            "establish_diagnosis",
            Outcome::new(
                "Coronary function testing",
                "Establish the INOCA endotype with noninvasive or invasive coronary function testing.",
            )
            .push(open_module(
                "Open INOCA testing",
                "PET or CMR blood flow, or invasive coronary function testing.",
                ModuleId::InocaTesting,
            )),
        )
        .when(
            "suspected_vasospasm",
            Outcome::new(
                "Vasospasm evaluation",
                "Rest angina or nocturnal symptoms suggest coronary vasospasm.",
            )
            .push(open_module(
                "Open vasospasm evaluation",
                "Provocation testing and therapy.",
                ModuleId::InocaVasospasm,
            )),
        )
        .when(
            "phenotype_known",
            Outcome::new(
                "Phenotype-directed management",
                "Endotype established: select therapy by phenotype.",
            )
            .push(open_module(
                "Open INOCA management",
                "Therapy by endotype.",
                ModuleId::InocaManagement,
            )),
        );

    let root = Switch::on("obstructiveExcluded")
        .when(
            false,
            Outcome::new(
                "Exclude obstructive CAD first",
                "INOCA evaluation requires obstructive coronary disease to be excluded.",
            )
            .push(open_module(
                "Open the no known CAD module",
                "Anatomic or functional testing to exclude obstructive CAD.",
                ModuleId::NoKnownCad,
            )),
        )
        .when(true, question);

    DecisionTable {
        id: "inoca_chooser",
        title: "INOCA: choose an evaluation",
        version: "2021.1",
        scope: "INOCA chooser: decision support only, not a substitute for clinical judgment.",
        fields: FIELDS,
        feasibility: None,
        root: root.into(),
        cross_links: Vec::new(),
    }
}
