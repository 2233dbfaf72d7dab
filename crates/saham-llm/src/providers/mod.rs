//! Concrete LLM provider implementations
//!
//! Providers are feature-gated so downstream crates only pull in the HTTP
//! stack they need.

mod openai;

pub use openai::{OpenAIConfig, OpenAIProvider};
