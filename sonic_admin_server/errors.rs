use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("no preview page named {0}")]
    UnknownPage(String),

    #[error("no content model named {0}")]
    UnknownModel(String),

    #[error("cannot read fixture {}: {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture {} does not match the page data: {source}", path.display())]
    FixtureDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

impl PreviewError {
    pub fn status(&self) -> StatusCode {
        match self {
            PreviewError::UnknownPage(_) | PreviewError::UnknownModel(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{self}");
        }
        (status, self.to_string()).into_response()
    }
}
