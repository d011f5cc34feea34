use super::definition::{
    NodeAction, NodeFlag, NodeKind, NodeOption, OptionTarget, PathwayDefinition, PathwayNode,
    Resource,
};
use crate::error::PathwayIntegrityError;
use serde::Deserialize;

/// A trait for custom pathway formats that can be converted into a `PathwayDefinition`.
///
/// The bundled JSON format implements it through [`PathwayDocument`]; other
/// sources (a CMS export, a spreadsheet) can provide their own translation.
pub trait IntoPathway {
    /// Consumes the object and converts it into the canonical pathway model.
    fn into_pathway(self) -> Result<PathwayDefinition, PathwayIntegrityError>;
}

// --- JSON Deserialization Structs (Input Format Specific) ---
// These are lenient on purpose: every node-type-specific field is optional
// and the conversion decides whether the combination is legal.

/// A pathway as it is written in a JSON document.
#[derive(Debug, Deserialize)]
pub struct PathwayDocument {
    pub id: String,
    pub title: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub start: Option<String>,
    pub nodes: Vec<RawNode>,
}

fn default_version() -> String {
    "1".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawNodeType {
    Step,
    Decision,
    Terminal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: RawNodeType,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub continue_label: Option<String>,
    pub next: Option<String>,
    pub options: Option<Vec<RawOption>>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub flags: Vec<NodeFlag>,
    pub disposition: Option<String>,
    #[serde(default)]
    pub recommended_tests: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawOption {
    pub label: String,
    pub sub: Option<String>,
    pub next: Option<String>,
    pub action: Option<NodeAction>,
}

impl PathwayDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl IntoPathway for PathwayDocument {
    fn into_pathway(self) -> Result<PathwayDefinition, PathwayIntegrityError> {
        let pathway_id = self.id;
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| convert_node(&pathway_id, raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PathwayDefinition {
            id: pathway_id,
            title: self.title,
            version: self.version,
            start: self.start,
            nodes,
        })
    }
}

fn convert_node(pathway: &str, raw: RawNode) -> Result<PathwayNode, PathwayIntegrityError> {
    let kind = match raw.node_type {
        RawNodeType::Step => {
            let next = raw
                .next
                .ok_or_else(|| PathwayIntegrityError::StepWithoutNext {
                    pathway: pathway.to_string(),
                    node_id: raw.id.clone(),
                })?;
            NodeKind::Step {
                continue_label: raw.continue_label,
                next,
            }
        }
        RawNodeType::Decision => {
            let raw_options = raw.options.unwrap_or_default();
            if raw_options.is_empty() {
                return Err(PathwayIntegrityError::EmptyDecision {
                    pathway: pathway.to_string(),
                    node_id: raw.id,
                });
            }
            let options = raw_options
                .into_iter()
                .enumerate()
                .map(|(index, option)| convert_option(pathway, &raw.id, index, option))
                .collect::<Result<Vec<_>, _>>()?;
            NodeKind::Decision { options }
        }
        RawNodeType::Terminal => {
            if raw.next.is_some() || raw.options.is_some() {
                return Err(PathwayIntegrityError::TerminalHasTransitions {
                    pathway: pathway.to_string(),
                    node_id: raw.id,
                });
            }
            NodeKind::Terminal {
                disposition: raw.disposition,
                recommended_tests: raw.recommended_tests,
            }
        }
    };

    Ok(PathwayNode {
        id: raw.id,
        title: raw.title,
        body: raw.body,
        resources: raw.resources,
        flags: raw.flags,
        kind,
    })
}

fn convert_option(
    pathway: &str,
    node_id: &str,
    index: usize,
    option: RawOption,
) -> Result<NodeOption, PathwayIntegrityError> {
    let target = match (option.next, option.action) {
        (Some(next), None) => OptionTarget::Next(next),
        (None, Some(action)) => OptionTarget::Action(action),
        _ => {
            return Err(PathwayIntegrityError::InvalidOptionTarget {
                pathway: pathway.to_string(),
                node_id: node_id.to_string(),
                option_index: index,
            });
        }
    };
    Ok(NodeOption {
        label: option.label,
        sub: option.sub,
        target,
    })
}
