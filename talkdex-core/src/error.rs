//! Unified error handling system
//!
//! Provides structured error types with context and recovery suggestions.
//! Scan, structure, config and I/O failures are fatal for a run; parse
//! failures are per-entry and are collected by the loader instead of
//! being propagated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{error, warn};

pub type TalkdexResult<T> = Result<T, TalkdexError>;

/// Error context providing additional information for debugging and recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Additional metadata
    pub metadata: BTreeMap<String, String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            metadata: BTreeMap::new(),
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for talkdex
#[derive(Error, Debug)]
pub enum TalkdexError {
    #[error("Scan error: {message}")]
    Scan {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Parse error in {path}: {message}")]
    Parse {
        message: String,
        path: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Structure error in {document} ({section}): {message}")]
    Structure {
        message: String,
        document: String,
        section: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TalkdexError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            TalkdexError::Scan { context, .. } => Some(context),
            TalkdexError::Parse { context, .. } => Some(context),
            TalkdexError::Structure { context, .. } => Some(context),
            TalkdexError::Config { context, .. } => Some(context),
            TalkdexError::Io(_) => None,
        }
    }

    /// Whether the run can carry on after this error.
    ///
    /// Only a single entry's parse failure is local; everything that touches
    /// the scan root or a whole document aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TalkdexError::Parse { .. })
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        let component = self.context().map(|c| c.component.as_str());
        match self {
            TalkdexError::Parse { .. } => {
                warn!(component = ?component, error = %self, "Entry skipped");
            }
            TalkdexError::Structure { .. } => {
                error!(
                    component = ?component,
                    error = %self,
                    "Document structure error, document left untouched"
                );
            }
            TalkdexError::Config { .. } => {
                error!(component = ?component, error = %self, "Configuration error");
            }
            _ => {
                error!(component = ?component, error = %self, "Error occurred");
            }
        }
    }
}

/// Convenience macros for creating errors with context
#[macro_export]
macro_rules! scan_error {
    ($msg:expr, $component:expr) => {
        $crate::TalkdexError::Scan {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component),
        }
    };
    ($msg:expr, $component:expr, $source:expr) => {
        $crate::TalkdexError::Scan {
            message: $msg.to_string(),
            source: Some(Box::new($source)),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check that the directory exists and is readable"),
        }
    };
}

#[macro_export]
macro_rules! structure_error {
    ($msg:expr, $document:expr, $section:expr, $component:expr) => {
        $crate::TalkdexError::Structure {
            message: $msg.to_string(),
            document: $document.to_string(),
            section: $section.to_string(),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Add the missing heading to the document by hand"),
        }
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        $crate::TalkdexError::Config {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your talkdex.toml"),
        }
    };
}
