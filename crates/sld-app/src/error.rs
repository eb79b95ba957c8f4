//! Error types for the sld-app service layer.

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(#[from] sld_project::ProjectError),

    #[error("Graph assembly failed: {0}")]
    Graph(#[from] sld_graph::GraphError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] sld_core::SldError),

    #[error("Failed to render report: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sld-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Render(err.to_string())
    }
}
