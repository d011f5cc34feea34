use thiserror::Error;

/// Structural errors in a pathway graph. These are detected once, when a
/// pathway is loaded, and are fatal to that pathway.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathwayIntegrityError {
    #[error("Pathway '{pathway}' defines node '{node_id}' more than once")]
    DuplicateNodeId { pathway: String, node_id: String },

    #[error(
        "Node '{node_id}' in pathway '{pathway}' points to '{missing_target}', which does not exist"
    )]
    DanglingNext {
        pathway: String,
        node_id: String,
        missing_target: String,
    },

    #[error("Decision node '{node_id}' in pathway '{pathway}' has no options")]
    EmptyDecision { pathway: String, node_id: String },

    #[error(
        "Option {option_index} of decision node '{node_id}' in pathway '{pathway}' must have exactly one of a next node or an action"
    )]
    InvalidOptionTarget {
        pathway: String,
        node_id: String,
        option_index: usize,
    },

    #[error("Terminal node '{node_id}' in pathway '{pathway}' must not declare next or options")]
    TerminalHasTransitions { pathway: String, node_id: String },

    #[error("Step node '{node_id}' in pathway '{pathway}' has no next node")]
    StepWithoutNext { pathway: String, node_id: String },

    #[error("Pathway '{pathway}' has no start candidate (every node has an incoming link)")]
    MissingStart { pathway: String },

    #[error("Pathway '{pathway}' has more than one start candidate: {candidates:?}")]
    MultipleStarts {
        pathway: String,
        candidates: Vec<String>,
    },

    #[error(
        "Pathway '{pathway}' declares start '{declared}', but the only node without incoming links is '{candidate}'"
    )]
    StartMismatch {
        pathway: String,
        declared: String,
        candidate: String,
    },

    #[error("Pathway '{pathway}' contains a cycle through node '{node_id}'")]
    Cycle { pathway: String, node_id: String },
}

/// Errors that can occur while loading a pathway definition.
#[derive(Error, Debug)]
pub enum PathwayLoadError {
    #[error("Failed to parse pathway JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error(transparent)]
    Integrity(#[from] PathwayIntegrityError),

    #[error("A pathway with id '{0}' is already registered")]
    DuplicatePathway(String),
}

/// Errors raised when module input arrives in a shape that cannot be read at all.
///
/// Missing or unrecognised field values are not errors; they surface as flags
/// on the evaluation result.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to parse module input JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Module input must be a JSON object, found {0}")]
    NotAnObject(String),

    #[error("Field '{field}' holds an unsupported value: {found}")]
    UnsupportedValue { field: String, found: String },

    #[error("Unknown module '{0}'")]
    UnknownModule(String),
}
