//! MiniJinja-based template implementation
//!
//! This module provides a [`JinjaTemplate`] implementation that uses the
//! MiniJinja template engine for variable interpolation.

use crate::{Language, PromptError, PromptTemplate, Result};
use minijinja::Environment;
use std::collections::HashMap;

/// A prompt template backed by MiniJinja
///
/// `JinjaTemplate` provides a thread-safe, multi-language template
/// implementation using the Jinja2-compatible MiniJinja engine.
///
/// # Template Syntax
///
/// Standard Jinja2 syntax:
/// - Variables: `{{ variable }}`
/// - Filters: `{{ name | upper }}`
/// - Conditionals: `{% if condition %}...{% endif %}`
///
/// # Examples
///
/// ```
/// use saham_prompt::{JinjaTemplate, Language, PromptTemplate};
/// use serde_json::json;
///
/// let template = JinjaTemplate::bilingual(
///     "greeting",
///     "Hello, {{ name }}!",
///     "Halo, {{ name }}!",
/// ).unwrap();
///
/// let result = template.render(&Language::Indonesian, &json!({ "name": "Dunia" })).unwrap();
/// assert_eq!(result, "Halo, Dunia!");
/// ```
pub struct JinjaTemplate {
    name: String,
    templates: HashMap<Language, String>,
}

impl JinjaTemplate {
    /// Create a new template builder
    pub fn builder(name: impl Into<String>) -> JinjaTemplateBuilder {
        JinjaTemplateBuilder::new(name)
    }

    /// Create from a single template in the primary language (Indonesian)
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Result<Self> {
        Self::builder(name).indonesian(template).build()
    }

    /// Create with English and Indonesian templates
    ///
    /// Convenience method for the common bilingual case.
    pub fn bilingual(
        name: impl Into<String>,
        english: impl Into<String>,
        indonesian: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(name)
            .english(english)
            .indonesian(indonesian)
            .build()
    }
}

impl PromptTemplate for JinjaTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn languages(&self) -> Vec<Language> {
        self.templates.keys().cloned().collect()
    }

    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        let template_str =
            self.templates
                .get(lang)
                .ok_or_else(|| PromptError::TemplateNotFound {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: "Language not available".to_string(),
                })?;

        // Create a new environment for each render to avoid lifetime issues
        let mut env = Environment::new();

        // Add built-in filters
        env.add_filter("upper", |s: String| s.to_uppercase());
        env.add_filter("lower", |s: String| s.to_lowercase());
        env.add_filter("trim", |s: String| s.trim().to_string());

        let value = minijinja::value::Value::from_serialize(vars);

        env.render_str(template_str, value)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }

    fn raw_template(&self, lang: &Language) -> Option<&str> {
        self.templates.get(lang).map(|s| s.as_str())
    }
}

impl std::fmt::Debug for JinjaTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaTemplate")
            .field("name", &self.name)
            .field("languages", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`JinjaTemplate`]
///
/// Provides a fluent API for constructing templates with multiple language
/// variants.
pub struct JinjaTemplateBuilder {
    name: String,
    templates: HashMap<Language, String>,
}

impl JinjaTemplateBuilder {
    /// Create a new builder with the given template name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: HashMap::new(),
        }
    }

    /// Add a template for a specific language
    pub fn template(mut self, lang: Language, content: impl Into<String>) -> Self {
        self.templates.insert(lang, content.into());
        self
    }

    /// Add Indonesian template
    pub fn indonesian(self, content: impl Into<String>) -> Self {
        self.template(Language::Indonesian, content)
    }

    /// Add English template
    pub fn english(self, content: impl Into<String>) -> Self {
        self.template(Language::English, content)
    }

    /// Build the template
    ///
    /// # Errors
    ///
    /// Returns an error if no templates were provided or a template fails
    /// to parse.
    pub fn build(self) -> Result<JinjaTemplate> {
        if self.templates.is_empty() {
            return Err(PromptError::NoTemplatesProvided(self.name));
        }

        // Validate all templates parse correctly
        let env = Environment::new();
        for (lang, content) in &self.templates {
            env.render_str(content, ())
                .map_err(|e| PromptError::TemplateParseFailed {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: e.to_string(),
                })?;
        }

        Ok(JinjaTemplate {
            name: self.name,
            templates: self.templates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_template() {
        let template = JinjaTemplate::new("test", "Halo, {{ name }}!").unwrap();

        let result = template
            .render(&Language::Indonesian, &json!({ "name": "Dunia" }))
            .unwrap();
        assert_eq!(result, "Halo, Dunia!");
    }

    #[test]
    fn test_bilingual_template() {
        let template =
            JinjaTemplate::bilingual("greeting", "Hello, {{ name }}!", "Halo, {{ name }}!")
                .unwrap();

        let en = template
            .render(&Language::English, &json!({ "name": "World" }))
            .unwrap();
        assert_eq!(en, "Hello, World!");

        let id = template
            .render(&Language::Indonesian, &json!({ "name": "Dunia" }))
            .unwrap();
        assert_eq!(id, "Halo, Dunia!");
    }

    #[test]
    fn test_builder() {
        let template = JinjaTemplate::builder("test")
            .english("EN: {{ msg }}")
            .indonesian("ID: {{ msg }}")
            .build()
            .unwrap();

        assert_eq!(template.name(), "test");
        assert!(template.supports_language(&Language::English));
        assert!(template.supports_language(&Language::Indonesian));
    }

    #[test]
    fn test_custom_language() {
        let template = JinjaTemplate::builder("test")
            .indonesian("Halo")
            .template(Language::Other("ja".to_string()), "こんにちは")
            .build()
            .unwrap();

        let ja = template
            .render(&Language::Other("ja".to_string()), &json!({}))
            .unwrap();
        assert_eq!(ja, "こんにちは");
    }

    #[test]
    fn test_filters() {
        let template = JinjaTemplate::new("test", "{{ symbol | upper }}").unwrap();

        let result = template
            .render(&Language::Indonesian, &json!({ "symbol": "bbca" }))
            .unwrap();
        assert_eq!(result, "BBCA");
    }

    #[test]
    fn test_no_templates_error() {
        let result = JinjaTemplate::builder("test").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_template_error() {
        let result = JinjaTemplate::new("test", "{{ unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_missing_language() {
        let template = JinjaTemplate::new("test", "Halo").unwrap();

        let result = template.render(&Language::English, &json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_template() {
        let template = JinjaTemplate::bilingual("test", "Hello", "Halo").unwrap();

        assert_eq!(template.raw_template(&Language::English), Some("Hello"));
        assert_eq!(template.raw_template(&Language::Indonesian), Some("Halo"));
        assert_eq!(
            template.raw_template(&Language::Other("ja".to_string())),
            None
        );
    }

    #[test]
    fn test_fallback() {
        let template = JinjaTemplate::bilingual("test", "Hello", "Halo").unwrap();

        // Japanese not available, should fall back to Indonesian
        let result = template
            .render_with_fallback(&Language::Other("ja".to_string()), &json!({}))
            .unwrap();
        assert_eq!(result, "Halo");
    }

    #[test]
    fn test_multiline_template() {
        let template = JinjaTemplate::new(
            "analysis",
            r#"Berdasarkan data saham berikut ini:

Nama Perusahaan: {{ name }}
Sektor: {{ sector }}"#,
        )
        .unwrap();

        let result = template
            .render(
                &Language::Indonesian,
                &json!({
                    "name": "Bank Central Asia",
                    "sector": "Financial Services"
                }),
            )
            .unwrap();

        assert!(result.contains("Bank Central Asia"));
        assert!(result.contains("Financial Services"));
    }

    #[test]
    fn test_numeric_variables() {
        let template = JinjaTemplate::new("test", "Harga: {{ price }}").unwrap();

        let result = template
            .render(&Language::Indonesian, &json!({ "price": 9250.0 }))
            .unwrap();
        assert!(result.contains("9250"));
    }

    #[test]
    fn test_debug() {
        let template = JinjaTemplate::bilingual("test", "Hello", "Halo").unwrap();
        let debug = format!("{:?}", template);
        assert!(debug.contains("JinjaTemplate"));
        assert!(debug.contains("test"));
    }
}
