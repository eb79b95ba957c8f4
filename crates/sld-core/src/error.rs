use thiserror::Error;

pub type SldResult<T> = Result<T, SldError>;

/// Structural problems that abort an evaluation.
///
/// Either variant is fatal to the whole call: the engine never returns a
/// partial finding list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SldError {
    #[error("Malformed component {id}: missing {missing}")]
    MalformedComponent { id: String, missing: &'static str },

    #[error("Component not found: {id} (referenced by {context})")]
    ComponentNotFound { id: String, context: String },

    #[error("Duplicate component id: {id}")]
    DuplicateComponent { id: String },
}

impl SldError {
    /// The component id the error is about.
    pub fn component_id(&self) -> &str {
        match self {
            SldError::MalformedComponent { id, .. }
            | SldError::ComponentNotFound { id, .. }
            | SldError::DuplicateComponent { id } => id,
        }
    }
}
