//! Steps, links and feasibility pieces shared by several modules.

use super::ModuleId;
use crate::evaluator::NextStep;
use crate::table::{Condition, CrossLink, Feasibility, FeasibilityRule};

pub(super) const LIMITATION_FIELD: &str = "testLimitation";
pub(super) const LIMITATION_NOTE_FIELD: &str = "testLimitationNote";

pub(super) fn module_link(module: ModuleId) -> String {
    format!("#/module/{}", module)
}

pub(super) fn refer_ica(detail: &str, strength: &str) -> NextStep {
    NextStep::warning("Refer for invasive coronary angiography", detail).strength(strength)
}

pub(super) fn optimize_gdmt() -> NextStep {
    NextStep::info(
        "Optimize guideline-directed medical therapy",
        "Antianginal therapy plus statin and antiplatelet therapy as indicated.",
    )
    .strength("COR 1")
}

pub(super) fn preventive_therapy() -> NextStep {
    NextStep::info(
        "Preventive therapy and risk-factor modification",
        "Lipid lowering, blood pressure and diabetes control, smoking cessation, activity.",
    )
    .strength("COR 1")
}

pub(super) fn open_module(label: &str, detail: &str, module: ModuleId) -> NextStep {
    NextStep::info(label, detail).link(module_link(module))
}

/// The INOCA suggestion used by modules where obstructive disease may be absent.
pub(super) fn inoca_cross_link() -> CrossLink {
    CrossLink {
        when: Condition::IsTrue("inocaSuspected"),
        step: open_module(
            "Consider the INOCA pathway",
            "Persistent angina without obstructive CAD suggests ischemia with no obstructive coronary arteries.",
            ModuleId::InocaChooser,
        ),
    }
}

pub(super) fn rule(
    when: Condition,
    code: &'static str,
    message: &'static str,
    alternative: NextStep,
) -> FeasibilityRule {
    FeasibilityRule {
        when,
        code,
        message,
        alternative,
    }
}

/// Feasibility block keyed on the shared limitation fields, with a generic
/// fallback for when no specific test has been chosen yet.
pub(super) fn feasibility(rules: Vec<FeasibilityRule>) -> Feasibility {
    Feasibility {
        limitation_field: LIMITATION_FIELD,
        note_field: LIMITATION_NOTE_FIELD,
        rules,
        fallback: rule(
            Condition::Always,
            "TEST_LIMITATION",
            "The selected test may be limited for this patient.",
            NextStep::info(
                "Consider an alternative test",
                "Match the test to patient factors and local expertise.",
            ),
        ),
    }
}
