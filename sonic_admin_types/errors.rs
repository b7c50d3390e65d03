use thiserror::Error;

/// Errors raised while reading a content-model schema supplied by the schema engine.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("content model {model} has a non-object field schema")]
    FieldsNotAnObject { model: String },

    #[error("field {field} of content model {model} is invalid: {source}")]
    InvalidField {
        model: String,
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
