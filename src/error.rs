// src/error.rs
use skyedoc_render_core::RenderError;
use skyedoc_style::TokenError;
use skyedoc_traits::ResourceError;
use thiserror::Error;

/// A comprehensive error type for the entire document generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Design tokens are invalid: {0}")]
    Tokens(#[from] TokenError),

    #[error("Resource loading failed: {0}")]
    Resource(#[from] ResourceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content JSON is invalid: {0}")]
    ContentJson(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
