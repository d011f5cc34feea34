//! Graph-form pathways: node model, JSON conversion, integrity validation,
//! the registry of loaded pathways and display numbering.

pub mod conversion;
pub mod definition;
pub mod index;
pub mod registry;
pub mod validate;

pub use conversion::*;
pub use definition::*;
pub use index::*;
pub use registry::*;

use crate::error::PathwayIntegrityError;
use ahash::AHashMap;

/// A pathway that has passed integrity validation. Immutable once built.
#[derive(Debug, Clone)]
pub struct Pathway {
    definition: PathwayDefinition,
    start: String,
    index: AHashMap<String, usize>,
}

impl Pathway {
    /// Validates `definition` and builds the id lookup.
    pub fn new(definition: PathwayDefinition) -> Result<Self, PathwayIntegrityError> {
        let start = validate::validate(&definition)?;
        let index = definition
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Ok(Self {
            definition,
            start,
            index,
        })
    }

    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn title(&self) -> &str {
        &self.definition.title
    }

    pub fn version(&self) -> &str {
        &self.definition.version
    }

    pub fn start_id(&self) -> &str {
        &self.start
    }

    pub fn start_node(&self) -> &PathwayNode {
        // `start` was produced by validation from this definition.
        &self.definition.nodes[self.index[&self.start]]
    }

    pub fn node(&self, id: &str) -> Option<&PathwayNode> {
        self.index.get(id).map(|&i| &self.definition.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = &PathwayNode> {
        self.definition.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.definition.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definition.nodes.is_empty()
    }

    pub fn definition(&self) -> &PathwayDefinition {
        &self.definition
    }
}
