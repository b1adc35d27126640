//! Core data type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metadata record stored alongside each talk entry
///
/// Every key is optional at the parsing level; checking that `title`,
/// `date` and `topics` are present belongs to the metadata checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkMetadata {
    pub title: String,
    /// ISO `YYYY-MM-DD`, compared as a plain string
    pub date: String,
    pub event: String,
    pub topics: Vec<String>,
    pub description: String,
    pub slides_url: Option<String>,
    pub video_url: Option<String>,
}

/// A talk entry discovered under a year directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(flatten)]
    pub metadata: TalkMetadata,
    /// Relative location, always `/`-separated: `<year>/<entry>`
    pub path: String,
    /// Name of the year directory the entry lives in
    pub year: String,
}

impl Talk {
    pub fn new(metadata: TalkMetadata, year: &str, entry: &str) -> Self {
        Self {
            metadata,
            path: format!("{}/{}", year, entry),
            year: year.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn date(&self) -> &str {
        &self.metadata.date
    }

    pub fn event(&self) -> &str {
        &self.metadata.event
    }

    pub fn topics(&self) -> &[String] {
        &self.metadata.topics
    }

    /// Strictly before the reference date. A talk dated on the reference
    /// date itself is not past.
    pub fn is_past(&self, as_of: &str) -> bool {
        self.date() < as_of
    }
}

/// Languages the index documents are maintained in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}
