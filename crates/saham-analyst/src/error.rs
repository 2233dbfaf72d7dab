//! Error types for the analysis pipeline
//!
//! Failures are typed rather than collapsed into strings: callers can tell
//! a data failure from a generation failure. The `Display` texts match what
//! the CLI prints, so rendering an error is just formatting it.

use thiserror::Error;

/// Errors produced by the analysis pipeline
#[derive(Debug, Error)]
pub enum AnalystError {
    /// The provider answered but returned no price rows for the symbol.
    /// This is an expected outcome for unknown tickers, not an exceptional one.
    #[error("No data found for {0}")]
    NoData(String),

    /// A provider query failed outright; carries the underlying error's text.
    #[error("{0}")]
    DataUnavailable(String),

    /// Prompt rendering or the language model call failed.
    #[error("Error analyzing stock: {0}")]
    Generation(String),

    /// Missing or invalid startup configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalystError>;

impl From<saham_llm::LLMError> for AnalystError {
    fn from(err: saham_llm::LLMError) -> Self {
        AnalystError::Generation(err.to_string())
    }
}

impl From<saham_prompt::PromptError> for AnalystError {
    fn from(err: saham_prompt::PromptError) -> Self {
        AnalystError::Generation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_display() {
        let err = AnalystError::NoData("ZZZZINVALID".to_string());
        assert_eq!(err.to_string(), "No data found for ZZZZINVALID");
    }

    #[test]
    fn test_data_unavailable_preserves_text() {
        let err = AnalystError::DataUnavailable("connection reset by peer".to_string());
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn test_generation_prefix() {
        let err = AnalystError::Generation("API request failed: HTTP 500".to_string());
        assert_eq!(
            err.to_string(),
            "Error analyzing stock: API request failed: HTTP 500"
        );
    }

    #[test]
    fn test_llm_error_conversion() {
        let llm_err = saham_llm::LLMError::RequestFailed("boom".to_string());
        let err: AnalystError = llm_err.into();

        match err {
            AnalystError::Generation(msg) => assert!(msg.contains("boom")),
            _ => panic!("Expected Generation variant"),
        }
    }
}
