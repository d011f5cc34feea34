use serde::{Deserialize, Serialize};

/// The canonical, ordered definition of a graph-form pathway.
///
/// Nodes are kept as an explicit sequence so that anything derived from
/// iteration order (such as page numbering) is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayDefinition {
    pub id: String,
    pub title: String,
    pub version: String,
    /// Declared start node. When `None`, the single node without incoming
    /// links is used.
    pub start: Option<String>,
    pub nodes: Vec<PathwayNode>,
}

/// One screen of a graph-form pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayNode {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<NodeFlag>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Node type together with the fields only that type may carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Step {
        #[serde(rename = "continueLabel", skip_serializing_if = "Option::is_none")]
        continue_label: Option<String>,
        next: String,
    },
    Decision {
        options: Vec<NodeOption>,
    },
    Terminal {
        #[serde(skip_serializing_if = "Option::is_none")]
        disposition: Option<String>,
        #[serde(rename = "recommendedTests", skip_serializing_if = "Vec::is_empty")]
        recommended_tests: Vec<String>,
    },
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Step { .. } => "step",
            NodeKind::Decision { .. } => "decision",
            NodeKind::Terminal { .. } => "terminal",
        }
    }
}

impl PathwayNode {
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    /// All node ids this node can navigate to, in declaration order.
    pub fn successors(&self) -> Vec<&str> {
        match &self.kind {
            NodeKind::Step { next, .. } => vec![next.as_str()],
            NodeKind::Decision { options } => options
                .iter()
                .filter_map(|o| match &o.target {
                    OptionTarget::Next(id) => Some(id.as_str()),
                    OptionTarget::Action(_) => None,
                })
                .collect(),
            NodeKind::Terminal { .. } => Vec::new(),
        }
    }
}

/// A choice offered by a decision node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeOption {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(flatten)]
    pub target: OptionTarget,
}

/// Where an option leads: another node, or a side effect that keeps the
/// current node on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionTarget {
    Next(String),
    Action(NodeAction),
}

/// A non-navigational command attached to an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeAction {
    /// Open an external link, e.g. a risk calculator.
    OpenUrl { url: String },
    /// Jump to the entry point of a procedural module.
    OpenModule { module: String },
}

/// A reference document or link shown alongside a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagLevel {
    Ok,
    Warning,
    Danger,
}

/// A static callout displayed on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFlag {
    pub level: FlagLevel,
    pub text: String,
}
