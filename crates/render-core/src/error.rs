use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML writing error: {0}")]
    Xml(String),
    #[error("Package archive error: {0}")]
    Archive(String),
    #[error("Image '{0}' is referenced but no resource was supplied")]
    MissingResource(String),
    #[error("List item references unknown numbering definition '{0}'")]
    UnknownNumbering(String),
    #[error("Renderer used out of order: {0}")]
    InvalidState(&'static str),
    #[error("Other rendering error: {0}")]
    Other(String),
}
