use thiserror::Error;

/// Unified error type for version-saver operations
#[derive(Error, Debug)]
pub enum VersionSaverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-saver
pub type Result<T> = std::result::Result<T, VersionSaverError>;

impl VersionSaverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionSaverError::Config(msg.into())
    }
}

/// Form input that was rejected before any command ran.
///
/// The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Kies eerst een projectmap")]
    MissingRepository,

    #[error("Voer een versie/tag in")]
    MissingVersion,

    #[error("Voer een commit-message in")]
    MissingMessage,
}
