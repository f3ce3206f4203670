//! @ai:module:intent Configuration for blueprint tooling and generation collaborators
//! @ai:module:layer infrastructure
//! @ai:module:public_api Config, GenerationSettings
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::language::TargetLanguage;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Settings passed explicitly to the tools that need them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: f32,
    /// File extensions (with the dot) treated as blueprints
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

/// @ai:intent The subset of configuration a code synthesizer consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            language: default_language(),
            max_tokens: default_max_tokens(),
            temperature: 0.0,
            extensions: default_extensions(),
        }
    }
}

fn default_model() -> String {
    "anthropic/claude-3.5-sonnet".to_string()
}

fn default_language() -> String {
    "python".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_extensions() -> Vec<String> {
    vec![".md".to_string()]
}

/// Environment keys checked for the API credential, in order.
const API_KEY_VARS: [&str; 3] = ["BLUEPRINTS_API_KEY", "ANTHROPIC_API_KEY", "OPENROUTER_API_KEY"];

impl Config {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Build configuration from defaults and the process environment
    /// @ai:effects env
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// @ai:intent Overlay values found through `lookup` onto this configuration
    /// @ai:pre lookup returns the raw value of an environment variable
    /// @ai:post set variables win over values loaded from a file, the API key included
    /// @ai:post unset or empty variables leave the current value in place
    /// @ai:effects pure
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(model) = get("BLUEPRINTS_MODEL") {
            self.model = model;
        }
        if let Some(language) = get("BLUEPRINTS_LANGUAGE") {
            self.language = language;
        }
        if let Some(max_tokens) = get("BLUEPRINTS_MAX_TOKENS") {
            self.max_tokens = max_tokens.trim().parse().map_err(|_| {
                Error::Config(format!("BLUEPRINTS_MAX_TOKENS is not an integer: {}", max_tokens))
            })?;
        }
        if let Some(temperature) = get("BLUEPRINTS_TEMPERATURE") {
            self.temperature = temperature.trim().parse().map_err(|_| {
                Error::Config(format!("BLUEPRINTS_TEMPERATURE is not a number: {}", temperature))
            })?;
        }
        if let Some(api_key) = API_KEY_VARS.into_iter().find_map(|key| get(key)) {
            self.api_key = Some(api_key);
        }

        Ok(self)
    }

    /// @ai:intent Resolve the configured language name
    /// @ai:effects pure
    pub fn target_language(&self) -> Result<TargetLanguage> {
        TargetLanguage::from_name(&self.language)
            .ok_or_else(|| Error::Config(format!("unsupported language: {}", self.language)))
    }

    /// @ai:intent Project the settings a synthesizer needs
    /// @ai:effects pure
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// @ai:intent Copy of this configuration safe to print
    /// @ai:effects pure
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.extensions, vec![".md"]);
        assert_eq!(config.target_language().unwrap(), TargetLanguage::Python);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_env_overrides(env(&[
                ("BLUEPRINTS_MODEL", "custom/model"),
                ("BLUEPRINTS_LANGUAGE", "go"),
                ("BLUEPRINTS_MAX_TOKENS", "8000"),
                ("BLUEPRINTS_TEMPERATURE", "0.5"),
                ("OPENROUTER_API_KEY", "or-key"),
            ]))
            .unwrap();

        assert_eq!(config.model, "custom/model");
        assert_eq!(config.target_language().unwrap(), TargetLanguage::Go);
        assert_eq!(config.max_tokens, 8000);
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.api_key.as_deref(), Some("or-key"));
    }

    #[test]
    fn test_api_key_precedence() {
        let config = Config::default()
            .with_env_overrides(env(&[
                ("ANTHROPIC_API_KEY", "anthropic"),
                ("OPENROUTER_API_KEY", "openrouter"),
            ]))
            .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("anthropic"));
    }

    #[test]
    fn test_env_api_key_overrides_file_value() {
        let from_file = Config {
            api_key: Some("file-key".to_string()),
            model: "file/model".to_string(),
            ..Default::default()
        };

        let config = from_file
            .clone()
            .with_env_overrides(env(&[("BLUEPRINTS_API_KEY", "env-key")]))
            .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.model, "file/model");

        let untouched = from_file.with_env_overrides(env(&[])).unwrap();
        assert_eq!(untouched.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let result = Config::default().with_env_overrides(env(&[("BLUEPRINTS_MAX_TOKENS", "many")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_unsupported_language() {
        let config = Config {
            language: "cobol".to_string(),
            ..Default::default()
        };
        assert!(config.target_language().is_err());
    }

    #[test]
    fn test_load_partial_toml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blueprints.toml");
        std::fs::write(&path, "model = \"local/model\"\nextensions = [\".md\", \".bp\"]\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.model, "local/model");
        assert_eq!(config.language, "python");
        assert_eq!(config.extensions, vec![".md", ".bp"]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blueprints.toml");
        let config = Config {
            temperature: 0.25,
            ..Default::default()
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_redacted_hides_key() {
        let config = Config {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        assert_eq!(config.redacted().api_key.as_deref(), Some("***"));
        assert_eq!(config.generation_settings().model, config.model);
    }
}
