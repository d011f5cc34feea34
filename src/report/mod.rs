//! Plain-text rendering of evaluation results and pathway nodes.

use crate::evaluator::{EvaluationResult, NextStep, Severity};
use crate::pathway::{FlagLevel, NodeKind, OptionTarget, PageLabel, PathwayNode};
use crate::session::ResourceKind;

/// Formats results and nodes into human-readable text, preserving the exact
/// order of flags and steps.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_result(result: &EvaluationResult) -> String {
        let mut out = String::new();
        let interpretation = &result.interpretation;

        out.push_str(&format!(
            "{} (v{})\n",
            result.values.pathway_id, result.values.version
        ));
        out.push_str(&format!("Disposition: {}\n", interpretation.disposition));
        if !interpretation.summary.is_empty() {
            out.push_str(&format!("Summary: {}\n", interpretation.summary));
        }

        if !result.values.branches_taken.is_empty() {
            out.push_str(&format!(
                "Branches: {}\n",
                result.values.branches_taken.join(" -> ")
            ));
        }

        if !interpretation.next_steps.is_empty() {
            out.push_str("Next steps:\n");
            for (i, step) in interpretation.next_steps.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, Self::format_step(step)));
            }
        }

        if !result.flags.is_empty() {
            out.push_str("Flags:\n");
            for flag in &result.flags {
                out.push_str(&format!(
                    "  {} {}: {}\n",
                    Self::severity_marker(flag.severity),
                    flag.code,
                    flag.message
                ));
            }
        }
        out
    }

    /// One line per step: label, optional strength, detail and link.
    pub fn format_step(step: &NextStep) -> String {
        let mut line = format!("{} {}", Self::severity_marker(step.level), step.label);
        if let Some(strength) = &step.strength {
            line.push_str(&format!(" [{}]", strength));
        }
        line.push_str(&format!(": {}", step.detail));
        if let Some(link) = &step.link {
            line.push_str(&format!(" ({})", link));
        }
        if let Some(info) = &step.info {
            line.push_str(&format!(" - {}", info));
        }
        line
    }

    pub fn format_node(node: &PathwayNode, page: Option<&PageLabel>) -> String {
        let mut out = String::new();
        match page {
            Some(page) => out.push_str(&format!("[{}] {}\n", page.label, node.title)),
            None => out.push_str(&format!("{}\n", node.title)),
        }
        if !node.body.is_empty() {
            out.push_str(&format!("{}\n", node.body));
        }

        for flag in &node.flags {
            let marker = match flag.level {
                FlagLevel::Ok => "[ok]",
                FlagLevel::Warning => "[!]",
                FlagLevel::Danger => "[!!]",
            };
            out.push_str(&format!("{} {}\n", marker, flag.text));
        }

        for resource in &node.resources {
            let kind = match ResourceKind::detect(&resource.url) {
                ResourceKind::Pdf => "pdf",
                ResourceKind::Image => "image",
                ResourceKind::External => "link",
            };
            out.push_str(&format!("  ({}) {} <{}>\n", kind, resource.label, resource.url));
        }

        match &node.kind {
            NodeKind::Step { continue_label, .. } => {
                let label = continue_label.as_deref().unwrap_or("Continue");
                out.push_str(&format!("  > {}\n", label));
            }
            NodeKind::Decision { options } => {
                for (i, option) in options.iter().enumerate() {
                    let suffix = match &option.target {
                        OptionTarget::Next(_) => "",
                        OptionTarget::Action(_) => " (opens)",
                    };
                    out.push_str(&format!("  {}) {}{}\n", i + 1, option.label, suffix));
                    if let Some(sub) = &option.sub {
                        out.push_str(&format!("     {}\n", sub));
                    }
                }
            }
            NodeKind::Terminal {
                disposition,
                recommended_tests,
            } => {
                if let Some(disposition) = disposition {
                    out.push_str(&format!("Disposition: {}\n", disposition));
                }
                for test in recommended_tests {
                    out.push_str(&format!("  - {}\n", test));
                }
            }
        }
        out
    }

    fn severity_marker(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "[i]",
            Severity::Warning => "[!]",
            Severity::Danger => "[!!]",
        }
    }
}
