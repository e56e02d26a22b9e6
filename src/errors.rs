use thiserror::Error;

/// Failures raised while rendering the deployment configuration.
///
/// Nothing is retried and nothing partial is returned: `generate` yields the
/// complete resource list or the first error below.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required context field: {0}")]
    MissingField(String),

    #[error("Missing imported manifest: {0}")]
    MissingImport(String),

    #[error("Invalid YAML in manifest '{filename}': {source}")]
    ManifestParse {
        filename: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Manifest '{0}' is not a YAML mapping")]
    ManifestShape(String),

    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Config rendering error: {0}")]
    Render(#[from] serde_yaml::Error),

    #[error("Options decoding error: {0}")]
    Decode(String),
}

/// Helper for mapping any decode-side failure into [`ConfigError::Decode`]
pub fn decode_error<E: ToString>(err: E) -> ConfigError {
    ConfigError::Decode(err.to_string())
}
