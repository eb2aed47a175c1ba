use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Errors raised while loading evaluator inputs (field maps, articles, options).
// Template evaluation itself never fails.
#[derive(Debug, Error)]
pub enum TemplateError {
    // Input was not valid JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    // A field document must be a flat JSON object
    #[error("field document must be a JSON object, got {0}")]
    NotAnObject(String),

    // A field value that cannot be rendered as a single string
    #[error("field `{field}` has unsupported {kind} value")]
    InvalidField { field: String, kind: &'static str },

    // Rejected evaluation option
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

// Type alias for results that use `TemplateError` as the error type
pub type Result<T> = std::result::Result<T, TemplateError>;
