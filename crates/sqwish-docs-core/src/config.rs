//! Site configuration management.

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    active::DEFAULT_VISIBILITY_THRESHOLD,
    copy::DEFAULT_COPIED_FEEDBACK,
    error::{DocsError, Result},
    examples::Language,
    scroll::DEFAULT_HIDE_THRESHOLD,
};

/// Main configuration structure for the docs site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Page behaviour settings.
    #[serde(default)]
    pub page: PageConfig,

    /// Code snippet settings.
    #[serde(default)]
    pub snippet: SnippetConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Link target of the API key management view.
    #[serde(default = "default_keys_path")]
    pub keys_path: String,
}

/// Documentation page behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Language selected on first render.
    #[serde(default)]
    pub default_language: Language,

    /// Languages offered by the selector, in tab order.
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,

    /// Scroll offset past which scrolling down hides the mobile top bar.
    #[serde(default = "default_hide_threshold")]
    pub top_bar_hide_threshold: f64,

    /// Visible fraction at which a section becomes active.
    #[serde(default = "default_visibility_threshold")]
    pub active_section_threshold: f64,
}

/// Code snippet configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// How long the "copied" indicator stays up, in milliseconds.
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,
}

// Default value functions
fn default_title() -> String {
    "Sqwish API Documentation".to_string()
}

fn default_keys_path() -> String {
    "/profile/keys".to_string()
}

fn default_languages() -> Vec<Language> {
    Language::SELECTABLE.to_vec()
}

fn default_hide_threshold() -> f64 {
    DEFAULT_HIDE_THRESHOLD
}

fn default_visibility_threshold() -> f64 {
    DEFAULT_VISIBILITY_THRESHOLD
}

fn default_copied_feedback_ms() -> u64 {
    DEFAULT_COPIED_FEEDBACK.as_millis() as u64
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            keys_path: default_keys_path(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            languages: default_languages(),
            top_bar_hide_threshold: default_hide_threshold(),
            active_section_threshold: default_visibility_threshold(),
        }
    }
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            copied_feedback_ms: default_copied_feedback_ms(),
        }
    }
}

impl SnippetConfig {
    /// The copied-indicator interval as a `Duration`.
    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}

impl DocsConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DocsConfig = toml::from_str(content)
            .map_err(|e| DocsError::config_with_source("Failed to parse docs config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DocsError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: DocsConfig = toml::from_str(&content).map_err(|e| {
            DocsError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(DocsError::config("site.title cannot be empty"));
        }

        if self.page.languages.is_empty() {
            return Err(DocsError::config("page.languages cannot be empty"));
        }

        if !self.page.languages.contains(&self.page.default_language) {
            return Err(DocsError::config(format!(
                "page.default_language `{}` is not one of page.languages",
                self.page.default_language
            )));
        }

        let threshold = self.page.active_section_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(DocsError::config(
                "page.active_section_threshold must be in (0, 1]",
            ));
        }

        if !(self.page.top_bar_hide_threshold >= 0.0) {
            return Err(DocsError::config(
                "page.top_bar_hide_threshold cannot be negative",
            ));
        }

        if self.snippet.copied_feedback_ms == 0 {
            log::warn!("snippet.copied_feedback_ms is 0; the copied indicator will not be visible");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Test Docs"
keys_path = "/account/keys"

[page]
default_language = "javascript"
languages = ["python", "javascript", "curl"]
top_bar_hide_threshold = 64.0
active_section_threshold = 0.5

[snippet]
copied_feedback_ms = 1500
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("docs.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = DocsConfig::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Test Docs");
        assert_eq!(config.site.keys_path, "/account/keys");
        assert_eq!(config.page.default_language, Language::JavaScript);
        assert_eq!(config.page.languages.len(), 3);
        assert_eq!(config.page.top_bar_hide_threshold, 64.0);
        assert_eq!(config.page.active_section_threshold, 0.5);
        assert_eq!(
            config.snippet.copied_feedback(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = DocsConfig::from_toml_str("").expect("empty config is valid");

        assert_eq!(config, DocsConfig::default());
        assert_eq!(config.site.keys_path, "/profile/keys");
        assert_eq!(config.page.default_language, Language::Python);
        assert_eq!(config.page.languages, vec![Language::Python, Language::Curl]);
        assert_eq!(config.page.top_bar_hide_threshold, 100.0);
        assert_eq!(config.page.active_section_threshold, 0.6);
        assert_eq!(config.snippet.copied_feedback_ms, 2000);
    }

    #[test]
    fn test_default_language_must_be_selectable() {
        let result = DocsConfig::from_toml_str(
            r#"
[page]
default_language = "javascript"
"#,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("default_language"));
    }

    #[test]
    fn test_config_validation_empty_languages() {
        let result = DocsConfig::from_toml_str("[page]\nlanguages = []\n");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("languages cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_threshold_range() {
        let result = DocsConfig::from_toml_str("[page]\nactive_section_threshold = 1.5\n");
        assert!(result.is_err());

        let result = DocsConfig::from_toml_str("[page]\nactive_section_threshold = 0.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_empty_title() {
        let result = DocsConfig::from_toml_str("[site]\ntitle = \"  \"\n");
        assert!(result.unwrap_err().to_string().contains("title cannot be empty"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = DocsConfig::from_toml_str("[page]\nlanguages = [\"ruby\"]\n");
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_not_found() {
        let result = DocsConfig::load(Path::new("/nonexistent/docs.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
