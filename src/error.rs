use thiserror::Error;

/// Errors that can occur while constructing a parameter graph.
///
/// These are construction-time failures: an invalid graph cannot be built,
/// so `compute` never has to re-check dependency wiring.
#[derive(Error, Debug, Clone)]
pub enum GraphConfigError {
    #[error(
        "Node '{node_key}' declares dependency '{dep_key}', which is neither another node's key nor a registered context key"
    )]
    UnknownDependency { node_key: String, dep_key: String },

    #[error("Unknown ecosystem: '{0}'")]
    UnknownEcosystem(String),
}

/// Errors that can occur while parsing and validating a review template.
///
/// The whole document is rejected on the first violation; there is no
/// partial acceptance.
#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    #[error("Failed to parse template JSON: {0}")]
    Parse(String),

    #[error("Template does not match the message schema: {0}")]
    Validation(String),

    #[error("Template must contain at least one message")]
    EmptyMessages,
}
