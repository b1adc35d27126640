//! Configuration management

use crate::error::{ErrorContext, TalkdexError, TalkdexResult};
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the repository root when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "talkdex.toml";

/// Top-level talkdex configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkdexConfig {
    /// Metadata file name inside each talk entry
    pub metadata_file: String,
    /// Standalone statistics report, relative to the repository root
    pub stats_report: String,
    /// Template topic labels left out of the statistics
    pub placeholder_topics: Vec<String>,
    /// Template event labels left out of the statistics
    pub placeholder_events: Vec<String>,
    /// Index documents to patch, one per language
    pub documents: DocumentsConfig,
}

/// Index document locations, relative to the repository root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    pub en: String,
    pub es: String,
}

impl DocumentsConfig {
    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Spanish => &self.es,
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            en: "README.md".to_string(),
            es: "docs/README-es.md".to_string(),
        }
    }
}

impl Default for TalkdexConfig {
    fn default() -> Self {
        Self {
            metadata_file: "metadata.yaml".to_string(),
            stats_report: "stats.txt".to_string(),
            placeholder_topics: vec![
                String::new(),
                "Topic1".to_string(),
                "Topic2".to_string(),
                "Topic3".to_string(),
            ],
            placeholder_events: vec![
                String::new(),
                "Conference/Meetup Name".to_string(),
                "Unknown".to_string(),
            ],
            documents: DocumentsConfig::default(),
        }
    }
}

impl TalkdexConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> TalkdexResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TalkdexError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: TalkdexConfig = toml::from_str(&content).map_err(|e| TalkdexError::Config {
            message: format!("Failed to parse config {}: {}", path.display(), e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Use the given file, else `talkdex.toml` under `root` if present, else defaults
    pub fn load<P: AsRef<Path>>(root: P, explicit: Option<&Path>) -> TalkdexResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = root.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::info!("Loading configuration from {:?}", candidate);
            return Self::from_file(candidate);
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> TalkdexResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| TalkdexError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content).map_err(|e| TalkdexError::Config {
            message: format!("Failed to write config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("write_file")
                .with_suggestion("Check if the directory exists and is writable"),
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> TalkdexResult<()> {
        let required = [
            ("metadata_file", &self.metadata_file),
            ("stats_report", &self.stats_report),
            ("documents.en", &self.documents.en),
            ("documents.es", &self.documents.es),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(TalkdexError::Config {
                    message: format!("{} must not be empty", field),
                    source: None,
                    context: ErrorContext::new("config")
                        .with_operation("validate")
                        .with_metadata("field", field)
                        .with_suggestion("Remove the key to fall back to the default"),
                });
            }
        }

        Ok(())
    }

    pub fn is_placeholder_topic(&self, topic: &str) -> bool {
        self.placeholder_topics.iter().any(|t| t == topic)
    }

    pub fn is_placeholder_event(&self, event: &str) -> bool {
        self.placeholder_events.iter().any(|e| e == event)
    }
}
