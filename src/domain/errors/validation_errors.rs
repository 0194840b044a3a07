/// Validation errors raised while decoding paths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Nothing left after stripping leading separators
    #[error("path '{path}' is blank after stripping separators")]
    BlankPath { path: String },

    /// A separator was present but no key followed the container segment
    #[error("path '{path}' has an empty key after the container segment")]
    EmptyKey { path: String },
}
