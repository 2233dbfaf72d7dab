//! Prompt template management for saham-rs
//!
//! This crate provides a small, type-safe system for managing prompt
//! templates with multi-language support and variable interpolation.
//!
//! # Features
//!
//! - **Multi-language support**: Templates can have variants for different
//!   languages; Indonesian is the primary product language
//! - **Variable interpolation**: Jinja2 syntax (`{{ variable }}`) for
//!   dynamic content
//!
//! # Quick Start
//!
//! ```
//! use saham_prompt::{JinjaTemplate, Language, PromptTemplate};
//! use serde_json::json;
//!
//! // Create a bilingual template
//! let template = JinjaTemplate::bilingual(
//!     "greeting",
//!     "Hello, {{ name }}!",
//!     "Halo, {{ name }}!",
//! ).unwrap();
//!
//! // Render for different languages
//! let en = template.render(&Language::English, &json!({ "name": "World" })).unwrap();
//! assert_eq!(en, "Hello, World!");
//!
//! let id = template.render(&Language::Indonesian, &json!({ "name": "Dunia" })).unwrap();
//! assert_eq!(id, "Halo, Dunia!");
//! ```

mod error;
mod jinja;
mod language;
mod template;

// Re-export core types
pub use error::{PromptError, Result};
pub use jinja::{JinjaTemplate, JinjaTemplateBuilder};
pub use language::Language;
pub use template::PromptTemplate;
