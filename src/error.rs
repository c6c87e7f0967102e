use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown scheduler state: {0:?}")]
    UnknownState(String),

    #[error("Accounting output has no line {line} (found {found} lines)")]
    MissingStateLine { line: usize, found: usize },

    #[error("Failed to run accounting command `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Accounting output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
