use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the template store and bootstrap.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("no template stored for method '{0}'")]
    NotFound(String),

    #[error("template file '{path}' is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bootstrap failed: {0}")]
    Bootstrap(String),
}

impl TemplateError {
    /// Stable machine-readable code, mirrored into logs.
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::NotFound(_) => "VK_TEMPLATE_NOT_FOUND",
            TemplateError::Malformed { .. } => "VK_TEMPLATE_MALFORMED",
            TemplateError::Io { .. } => "VK_TEMPLATE_IO",
            TemplateError::Bootstrap(_) => "VK_TEMPLATE_BOOTSTRAP",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;
