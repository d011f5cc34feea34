use crate::modules::ModuleId;
use std::fmt;

/// A hash-based view route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Pathway {
        pathway_id: String,
        node_id: Option<String>,
    },
    Module(ModuleId),
}

impl Route {
    /// Parses a location hash such as `#/pathway/acute/ecg`.
    ///
    /// Never fails: anything unrecognised, including unknown module ids,
    /// resolves to [`Route::Home`].
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim().trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["pathway", id] => Route::Pathway {
                pathway_id: id.to_string(),
                node_id: None,
            },
            ["pathway", id, node] => Route::Pathway {
                pathway_id: id.to_string(),
                node_id: Some(node.to_string()),
            },
            ["module", id] => match id.parse() {
                Ok(module) => Route::Module(module),
                Err(_) => {
                    tracing::warn!(module = %id, "Unknown module in route, going home");
                    Route::Home
                }
            },
            _ => {
                tracing::debug!(hash, "Unrecognised route, going home");
                Route::Home
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "#/"),
            Route::Pathway {
                pathway_id,
                node_id: None,
            } => write!(f, "#/pathway/{}", pathway_id),
            Route::Pathway {
                pathway_id,
                node_id: Some(node),
            } => write!(f, "#/pathway/{}/{}", pathway_id, node),
            Route::Module(module) => write!(f, "#/module/{}", module),
        }
    }
}
