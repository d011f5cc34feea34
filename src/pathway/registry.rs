use super::{IntoPathway, Pathway, PathwayDocument};
use crate::error::PathwayLoadError;
use ahash::AHashMap;

const ACUTE_PATHWAY_JSON: &str = include_str!("../../data/pathways/acute.json");
const STABLE_PATHWAY_JSON: &str = include_str!("../../data/pathways/stable.json");

/// The set of graph-form pathways available to a session, keyed by id.
///
/// Pathways are loaded and validated once; a registry never changes after
/// it is built.
#[derive(Debug, Clone, Default)]
pub struct PathwayRegistry {
    pathways: Vec<Pathway>,
    by_id: AHashMap<String, usize>,
}

pub struct PathwayRegistryBuilder {
    pathways: Vec<Pathway>,
}

impl PathwayRegistryBuilder {
    pub fn new() -> Self {
        Self {
            pathways: Vec::new(),
        }
    }

    /// Adds an already validated pathway.
    pub fn with_pathway(mut self, pathway: Pathway) -> Self {
        self.pathways.push(pathway);
        self
    }

    /// Parses, converts and validates a JSON pathway document.
    pub fn with_json(self, json: &str) -> Result<Self, PathwayLoadError> {
        let definition = PathwayDocument::from_json(json)?.into_pathway()?;
        let pathway = Pathway::new(definition).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected pathway with integrity errors");
        })?;
        Ok(self.with_pathway(pathway))
    }

    /// Converts and validates a pathway from any custom format.
    pub fn with_source(self, source: impl IntoPathway) -> Result<Self, PathwayLoadError> {
        let pathway = Pathway::new(source.into_pathway()?)?;
        Ok(self.with_pathway(pathway))
    }

    pub fn build(self) -> Result<PathwayRegistry, PathwayLoadError> {
        let mut by_id = AHashMap::with_capacity(self.pathways.len());
        for (i, pathway) in self.pathways.iter().enumerate() {
            if by_id.insert(pathway.id().to_string(), i).is_some() {
                return Err(PathwayLoadError::DuplicatePathway(pathway.id().to_string()));
            }
        }
        tracing::info!(
            count = self.pathways.len(),
            "Loaded pathway registry"
        );
        Ok(PathwayRegistry {
            pathways: self.pathways,
            by_id,
        })
    }
}

impl Default for PathwayRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathwayRegistry {
    pub fn builder() -> PathwayRegistryBuilder {
        PathwayRegistryBuilder::new()
    }

    /// Loads the pathways bundled with the crate (`acute` and `stable`).
    pub fn builtin() -> Result<Self, PathwayLoadError> {
        Self::builder()
            .with_json(ACUTE_PATHWAY_JSON)?
            .with_json(STABLE_PATHWAY_JSON)?
            .build()
    }

    pub fn get(&self, id: &str) -> Option<&Pathway> {
        self.by_id.get(id).map(|&i| &self.pathways[i])
    }

    /// Pathways in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Pathway> {
        self.pathways.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.pathways.iter().map(Pathway::id)
    }

    pub fn len(&self) -> usize {
        self.pathways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pathways.is_empty()
    }
}
