use super::Pathway;
use serde::Serialize;

/// A display label assigned to a node, e.g. `A-003`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLabel {
    pub node_id: String,
    pub label: String,
}

/// Numbers every node of a pathway in definition order.
///
/// The prefix is the upper-cased first letter of the pathway id, so the acute
/// pathway yields `A-001`, `A-002`, and so on.
pub fn build_page_index(pathway: &Pathway) -> Vec<PageLabel> {
    let prefix = pathway
        .id()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('P');

    pathway
        .nodes()
        .enumerate()
        .map(|(i, node)| PageLabel {
            node_id: node.id.clone(),
            label: format!("{}-{:03}", prefix, i + 1),
        })
        .collect()
}
