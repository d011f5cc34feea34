//! The procedural clinical modules.
//!
//! Each module is a static [`DecisionTable`] built once on first use. Use
//! [`ModuleId`] to address a module by its stable identifier and
//! [`evaluate`] to run it.

mod common;
pub mod inoca_chooser;
pub mod inoca_management;
pub mod inoca_testing;
pub mod inoca_vasospasm;
pub mod known_nonobstructive;
pub mod known_obstructive;
pub mod no_known_cad;
pub mod prior_cabg;

use crate::error::InputError;
use crate::evaluator::{EvaluationResult, Evaluator};
use crate::input::ModuleInput;
use crate::table::DecisionTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    NoKnownCad,
    KnownNonobstructiveCad,
    KnownObstructiveCad,
    PriorCabg,
    InocaChooser,
    InocaTesting,
    InocaVasospasm,
    InocaManagement,
}

impl ModuleId {
    pub const ALL: [ModuleId; 8] = [
        ModuleId::NoKnownCad,
        ModuleId::KnownNonobstructiveCad,
        ModuleId::KnownObstructiveCad,
        ModuleId::PriorCabg,
        ModuleId::InocaChooser,
        ModuleId::InocaTesting,
        ModuleId::InocaVasospasm,
        ModuleId::InocaManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::NoKnownCad => "no_known_cad",
            ModuleId::KnownNonobstructiveCad => "known_nonobstructive_cad",
            ModuleId::KnownObstructiveCad => "known_obstructive_cad",
            ModuleId::PriorCabg => "prior_cabg",
            ModuleId::InocaChooser => "inoca_chooser",
            ModuleId::InocaTesting => "inoca_testing",
            ModuleId::InocaVasospasm => "inoca_vasospasm",
            ModuleId::InocaManagement => "inoca_management",
        }
    }

    pub fn table(&self) -> &'static DecisionTable {
        match self {
            ModuleId::NoKnownCad => &no_known_cad::TABLE,
            ModuleId::KnownNonobstructiveCad => &known_nonobstructive::TABLE,
            ModuleId::KnownObstructiveCad => &known_obstructive::TABLE,
            ModuleId::PriorCabg => &prior_cabg::TABLE,
            ModuleId::InocaChooser => &inoca_chooser::TABLE,
            ModuleId::InocaTesting => &inoca_testing::TABLE,
            ModuleId::InocaVasospasm => &inoca_vasospasm::TABLE,
            ModuleId::InocaManagement => &inoca_management::TABLE,
        }
    }

    /// The navigation link other modules use to point at this one.
    pub fn entry_link(&self) -> String {
        common::module_link(*self)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| InputError::UnknownModule(s.to_string()))
    }
}

/// Every module with its table, in catalog order.
pub fn catalog() -> impl Iterator<Item = (ModuleId, &'static DecisionTable)> {
    ModuleId::ALL.into_iter().map(|id| (id, id.table()))
}

pub fn evaluate(module: ModuleId, input: &ModuleInput) -> EvaluationResult {
    Evaluator::new(module.table()).eval(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for id in ModuleId::ALL {
            assert_eq!(id.to_string().parse::<ModuleId>().unwrap(), id);
        }
        assert!("acute".parse::<ModuleId>().is_err());
    }

    #[test]
    fn table_ids_match_module_ids() {
        for (id, table) in catalog() {
            assert_eq!(table.id, id.as_str());
        }
    }

    #[test]
    fn entry_links_are_hash_routes() {
        assert_eq!(ModuleId::InocaTesting.entry_link(), "#/module/inoca_testing");
    }
}
