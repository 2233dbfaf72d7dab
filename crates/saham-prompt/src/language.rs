//! Language support for prompt templates
//!
//! This module provides a flexible language enum that covers the languages
//! the product ships with and allows extension via the `Other` variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported languages for prompts
///
/// Indonesian is the default: the analysis output the product ships is
/// written in Bahasa Indonesia.
///
/// # Examples
///
/// ```
/// use saham_prompt::Language;
///
/// let lang = Language::Indonesian;
/// assert_eq!(lang.code(), "id");
/// assert_eq!(lang.name(), "Indonesian");
///
/// // Parse from string
/// let parsed = Language::from_code("en");
/// assert_eq!(parsed, Language::English);
///
/// // Custom language
/// let custom = Language::Other("ja".to_string());
/// assert_eq!(custom.code(), "ja");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Indonesian (Bahasa Indonesia)
    #[default]
    Indonesian,
    /// English
    English,
    /// Other languages (ISO 639-1 code)
    Other(String),
}

impl Language {
    /// Get ISO 639-1 language code
    pub fn code(&self) -> &str {
        match self {
            Language::Indonesian => "id",
            Language::English => "en",
            Language::Other(code) => code,
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &str {
        match self {
            Language::Indonesian => "Indonesian",
            Language::English => "English",
            Language::Other(code) => code,
        }
    }

    /// Parse from ISO 639-1 code or common name
    ///
    /// # Examples
    ///
    /// ```
    /// use saham_prompt::Language;
    ///
    /// assert_eq!(Language::from_code("id"), Language::Indonesian);
    /// assert_eq!(Language::from_code("indonesian"), Language::Indonesian);
    /// assert_eq!(Language::from_code("en"), Language::English);
    /// assert_eq!(Language::from_code("ja"), Language::Other("ja".to_string()));
    /// ```
    pub fn from_code(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "id" | "in" | "indonesian" | "bahasa" | "bahasa indonesia" => Language::Indonesian,
            "en" | "english" => Language::English,
            other => Language::Other(other.to_string()),
        }
    }

    /// Check if this is a known language (not Other)
    pub fn is_known(&self) -> bool {
        !matches!(self, Language::Other(_))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from_code(s)
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from_code(&s)
    }
}
