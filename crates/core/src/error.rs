use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the crate: configuration,
/// file-map loading, scanning and export. Building, sorting and
/// projecting a tree never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid file map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A hidden-file pattern that is not a valid regular expression.
    #[error("invalid hidden pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn invalid_path_display() {
        let err = Error::InvalidPath("/nonexistent".into());
        assert_eq!(err.to_string(), "invalid path: /nonexistent");
    }

    #[test]
    fn invalid_pattern_names_the_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::InvalidPattern {
            pattern: "(".into(),
            source,
        };
        assert!(err.to_string().starts_with("invalid hidden pattern `(`"));
    }
}
