use thiserror::Error;

/// Errors raised while assembling a full HTML document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Template(#[from] askama::Error),
}
