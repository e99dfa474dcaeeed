//! Per-block failure taxonomy for the directive pipeline.
//!
//! Every variant ends up embedded in the rendered document as an inline
//! error marker; none of them abort processing of sibling blocks.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectiveError {
    /// An extracted argument failed validation.
    #[error("invalid argument `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The (path, method) pair is absent from the resolved spec.
    #[error("no operation for `{method} {path}` in the OpenAPI document")]
    Lookup { path: String, method: String },

    /// The operation exists but lacks a field the renderer needs.
    #[error("operation `{method} {path}` is missing `{field}`")]
    MissingOperationField {
        path: String,
        method: String,
        field: &'static str,
    },
}
