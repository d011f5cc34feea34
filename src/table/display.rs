use super::{DecisionNode, DecisionTable, Effect, Placement};
use std::fmt;

/// Renders a decision table as an indented tree, one line per branch point,
/// arm and outcome.
pub struct DisplayTable<'a> {
    pub table: &'a DecisionTable,
}

impl<'a> fmt::Display for DisplayTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        writeln!(f, "{} [{} v{}]", table.title, table.id, table.version)?;
        if let Some(feasibility) = &table.feasibility {
            writeln!(
                f,
                "feasibility: ${} (note ${})",
                feasibility.limitation_field, feasibility.note_field
            )?;
            for rule in &feasibility.rules {
                writeln!(f, "  {} -> {}", rule.when, rule.code)?;
            }
            writeln!(f, "  otherwise -> {}", feasibility.fallback.code)?;
        }
        for link in &table.cross_links {
            writeln!(f, "cross-link: {} -> {}", link.when, link.step.label)?;
        }
        fmt_node(&table.root, f, "", true)
    }
}

fn fmt_node(
    node: &DecisionNode,
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_last: bool,
) -> fmt::Result {
    let node_marker = if is_last { "└── " } else { "├── " };
    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

    match node {
        DecisionNode::Switch(switch) => {
            write!(f, "{}{}switch ${}", prefix, node_marker, switch.field)?;
            if !switch.also_requires.is_empty() {
                write!(f, " (requires ${})", switch.also_requires.join(", $"))?;
            }
            writeln!(f)?;
            let count = switch.arms.len();
            for (i, arm) in switch.arms.iter().enumerate() {
                let last_arm = i + 1 == count;
                let arm_marker = if last_arm { "└── " } else { "├── " };
                writeln!(f, "{}{}= {}", child_prefix, arm_marker, arm.value)?;
                let arm_prefix =
                    format!("{}{}", child_prefix, if last_arm { "    " } else { "│   " });
                for effect in &arm.effects {
                    match effect {
                        Effect::Step(Placement::Front, step) => {
                            writeln!(f, "{}│ + step (front): {}", arm_prefix, step.label)?
                        }
                        Effect::Step(Placement::Back, step) => {
                            writeln!(f, "{}│ + step: {}", arm_prefix, step.label)?
                        }
                        Effect::Flag(flag) => writeln!(f, "{}│ + flag: {}", arm_prefix, flag.code)?,
                    }
                }
                fmt_node(&arm.then, f, &arm_prefix, true)?;
            }
        }
        DecisionNode::Outcome(outcome) => {
            writeln!(f, "{}{}=> {}", prefix, node_marker, outcome.disposition)?;
        }
    }
    Ok(())
}
