//! Talk scanner
//!
//! Discovery is two levels deep: year containers directly under the root,
//! then one talk entry per immediate subdirectory of a year container.
//! Entries that cannot be loaded are reported back instead of aborting
//! the scan. Discovery order is whatever the filesystem yields, so
//! consumers sort explicitly.

use crate::filter::{is_year_name, should_include_entry};
use std::path::{Path, PathBuf};
use talkdex_core::{ErrorContext, Talk, TalkMetadata, TalkdexConfig, TalkdexError, TalkdexResult};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Why an entry was left out of the scan
#[derive(Debug)]
pub enum SkipReason {
    /// The entry has no metadata record; the metadata checker flags this
    MissingMetadata,
    /// The metadata record could not be read or parsed
    Parse(TalkdexError),
}

/// An entry directory that produced no talk
#[derive(Debug)]
pub struct SkippedEntry {
    /// Relative location, `<year>/<entry>`
    pub path: String,
    pub reason: SkipReason,
}

/// Everything one scan produced
#[derive(Debug, Default)]
pub struct ScanReport {
    pub talks: Vec<Talk>,
    pub skipped: Vec<SkippedEntry>,
}

impl ScanReport {
    /// Emit one warning per skipped entry
    pub fn log_skipped(&self) {
        for entry in &self.skipped {
            match &entry.reason {
                SkipReason::MissingMetadata => {
                    warn!(path = %entry.path, "Skipping entry without metadata");
                }
                SkipReason::Parse(error) => error.log(),
            }
        }
    }
}

/// Loads talk entries from a repository root
#[derive(Debug, Clone)]
pub struct TalkScanner {
    metadata_file: String,
}

impl TalkScanner {
    pub fn new(config: &TalkdexConfig) -> Self {
        Self {
            metadata_file: config.metadata_file.clone(),
        }
    }

    /// Scan every year container under `root`.
    ///
    /// Fails only when the root or a year container cannot be listed.
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> TalkdexResult<ScanReport> {
        let root = root.as_ref();
        ensure_readable_dir(root)?;

        let mut report = ScanReport::default();
        let walker = WalkDir::new(root)
            .max_depth(2)
            .into_iter()
            .filter_entry(keep_during_walk);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                TalkdexError::Scan {
                    message: format!("Failed to list {}: {}", path, e),
                    source: Some(Box::new(e)),
                    context: ErrorContext::new("scanner")
                        .with_operation("walk_year_directory")
                        .with_metadata("path", &path),
                }
            })?;

            if entry.depth() != 2 || !entry.file_type().is_dir() {
                continue;
            }

            let Some(year) = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative = format!("{}/{}", year, name);

            match self.load_entry(entry.path(), &relative) {
                Ok(metadata) => {
                    debug!(path = %relative, "Loaded talk");
                    report.talks.push(Talk::new(metadata, &year, &name));
                }
                Err(reason) => report.skipped.push(SkippedEntry {
                    path: relative,
                    reason,
                }),
            }
        }

        info!(
            talks = report.talks.len(),
            skipped = report.skipped.len(),
            "Scan finished"
        );
        Ok(report)
    }

    fn load_entry(&self, entry_dir: &Path, relative: &str) -> Result<TalkMetadata, SkipReason> {
        let metadata_path: PathBuf = entry_dir.join(&self.metadata_file);
        if !metadata_path.is_file() {
            return Err(SkipReason::MissingMetadata);
        }

        let content = std::fs::read_to_string(&metadata_path).map_err(|e| {
            SkipReason::Parse(TalkdexError::Parse {
                message: format!("Failed to read {}: {}", self.metadata_file, e),
                path: relative.to_string(),
                source: Some(Box::new(e)),
                context: ErrorContext::new("scanner").with_operation("read_metadata"),
            })
        })?;

        serde_yaml::from_str::<TalkMetadata>(&content).map_err(|e| {
            SkipReason::Parse(TalkdexError::Parse {
                message: format!("Failed to parse {}: {}", self.metadata_file, e),
                path: relative.to_string(),
                source: Some(Box::new(e)),
                context: ErrorContext::new("scanner")
                    .with_operation("parse_metadata")
                    .with_suggestion("Check YAML syntax in the metadata file"),
            })
        })
    }
}

/// Prune non-year directories at the top level and hidden entries below
fn keep_during_walk(entry: &DirEntry) -> bool {
    match entry.depth() {
        0 => true,
        1 => {
            entry.file_type().is_dir()
                && entry.file_name().to_str().map(is_year_name).unwrap_or(false)
        }
        _ => should_include_entry(entry.path()),
    }
}

fn ensure_readable_dir(root: &Path) -> TalkdexResult<()> {
    std::fs::read_dir(root).map(|_| ()).map_err(|e| TalkdexError::Scan {
        message: format!("Cannot read repository root {}: {}", root.display(), e),
        source: Some(Box::new(e)),
        context: ErrorContext::new("scanner")
            .with_operation("open_root")
            .with_metadata("path", &root.display().to_string())
            .with_suggestion("Run from the repository root or pass --root"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_entry(root: &Path, year: &str, name: &str, metadata: Option<&str>) {
        let dir = root.join(year).join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = metadata {
            fs::write(dir.join("metadata.yaml"), content).unwrap();
        }
    }

    fn scanner() -> TalkScanner {
        TalkScanner::new(&TalkdexConfig::default())
    }

    #[test]
    fn test_scan_loads_entries_with_metadata() {
        let temp_dir = TempDir::new().unwrap();
        write_entry(
            temp_dir.path(),
            "2025",
            "nov-19th-otel",
            Some("title: Tracing Go\ndate: 2025-11-19\nevent: GoMeetup\ntopics:\n  - go\n  - otel\n"),
        );

        let report = scanner().scan(temp_dir.path()).unwrap();
        assert_eq!(report.talks.len(), 1);
        assert!(report.skipped.is_empty());

        let talk = &report.talks[0];
        assert_eq!(talk.title(), "Tracing Go");
        assert_eq!(talk.date(), "2025-11-19");
        assert_eq!(talk.topics(), ["go".to_string(), "otel".to_string()]);
        assert_eq!(talk.path, "2025/nov-19th-otel");
        assert_eq!(talk.year, "2025");
    }

    #[test]
    fn test_missing_metadata_is_reported_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        write_entry(temp_dir.path(), "2025", "no-metadata", None);
        write_entry(
            temp_dir.path(),
            "2025",
            "good",
            Some("title: Good\ndate: 2025-02-01\ntopics: [rust]\n"),
        );

        let report = scanner().scan(temp_dir.path()).unwrap();
        assert_eq!(report.talks.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].path, "2025/no-metadata");
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::MissingMetadata
        ));
    }

    #[test]
    fn test_malformed_metadata_is_reported_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        write_entry(
            temp_dir.path(),
            "2024",
            "broken",
            Some("title: [unterminated\ndate: 2024-01-01\n"),
        );
        write_entry(
            temp_dir.path(),
            "2024",
            "fine",
            Some("title: Fine\ndate: 2024-03-01\ntopics: [go]\n"),
        );

        let report = scanner().scan(temp_dir.path()).unwrap();
        assert_eq!(report.talks.len(), 1);
        assert_eq!(report.talks[0].title(), "Fine");
        match &report.skipped[0].reason {
            SkipReason::Parse(TalkdexError::Parse { path, .. }) => {
                assert_eq!(path, "2024/broken");
            }
            other => panic!("Expected parse failure, got {:?}", other),
        }
    }

    #[test]
    fn test_only_year_directories_are_scanned() {
        let temp_dir = TempDir::new().unwrap();
        let metadata = "title: T\ndate: 2025-01-01\ntopics: [go]\n";
        write_entry(temp_dir.path(), "docs", "guide", Some(metadata));
        write_entry(temp_dir.path(), "20255", "entry", Some(metadata));
        write_entry(temp_dir.path(), "2025", "entry", Some(metadata));
        write_entry(temp_dir.path(), "2025", ".hidden", Some(metadata));
        fs::write(temp_dir.path().join("2025").join("notes.md"), "loose file").unwrap();
        fs::write(temp_dir.path().join("1999"), "a file, not a directory").unwrap();

        let report = scanner().scan(temp_dir.path()).unwrap();
        assert_eq!(report.talks.len(), 1);
        assert_eq!(report.talks[0].path, "2025/entry");
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_custom_metadata_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("2023").join("talk");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("talk.yml"), "title: Custom\ndate: 2023-05-05\n").unwrap();

        let config = TalkdexConfig {
            metadata_file: "talk.yml".to_string(),
            ..Default::default()
        };
        let report = TalkScanner::new(&config).scan(temp_dir.path()).unwrap();
        assert_eq!(report.talks.len(), 1);
        assert_eq!(report.talks[0].title(), "Custom");
        assert!(report.talks[0].topics().is_empty());
    }

    #[test]
    fn test_unreadable_root_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert!(matches!(
            scanner().scan(&missing),
            Err(TalkdexError::Scan { .. })
        ));
    }
}
