//! Parse errors.

/// Errors that can occur while parsing a source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load grammar for {language}: {message}")]
    GrammarLoad { language: String, message: String },

    #[error("Unsupported file extension: {0:?}")]
    UnsupportedExtension(Option<String>),

    #[error("Parser returned no tree for {path}")]
    NoTree { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let err = ParseError::UnsupportedExtension(Some("py".to_string()));
        assert!(err.to_string().contains("py"));

        let err = ParseError::NoTree { path: "a.js".to_string() };
        assert!(err.to_string().contains("a.js"));
    }
}
