use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DocError {
    #[error("Missing required argument `{argument}`")]
    #[diagnostic(
        code(apidoc::invalid_input),
        help("A required input was absent. Pass an empty sequence instead of none.")
    )]
    InvalidInput { argument: &'static str },

    #[error("Unsupported element kind: {kind}")]
    #[diagnostic(
        code(apidoc::unsupported_element_kind),
        help("Only service elements and their HTTP bindings carry an obsolete flag.")
    )]
    UnsupportedElementKind { kind: String },

    #[error("Unsupported type kind: `{type_name}`")]
    #[diagnostic(
        code(apidoc::unsupported_type_kind),
        help("Use a built-in, DTO, enum or external type, with at most 64 nested wrappers.")
    )]
    UnsupportedTypeKind { type_name: String },

    #[error("Invalid JSON input")]
    #[diagnostic(
        code(apidoc::json),
        help("The text must be a JSON object matching the service, HTTP overlay or settings shape.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML input")]
    #[diagnostic(
        code(apidoc::yaml),
        help("The text must be a YAML mapping matching the service or settings shape.")
    )]
    Yaml(#[from] serde_yaml::Error),
}
