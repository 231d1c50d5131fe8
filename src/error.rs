//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbitview crate.
#[derive(Debug)]
pub enum OrbitError {
    /// Configuration rejected by validation (field and value in the
    /// message).
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Malformed replay script.
    Script(String),
    /// The controller already holds a surface subscription.
    AlreadyAttached,
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Script(msg) => write!(f, "replay script error: {msg}"),
            Self::AlreadyAttached => {
                write!(f, "controller is already attached to a surface")
            }
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err =
            OrbitError::InvalidOptions("min_distance must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid options: min_distance must be > 0"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: OrbitError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(OrbitError::Script("bad".into()).source().is_none());
    }
}
