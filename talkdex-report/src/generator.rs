//! Index and report generation
//!
//! Wires scan, aggregation, rendering and patching together. Every output
//! document is built completely in memory before it is written, and writes
//! go through a sibling temporary file so a failed write never leaves a
//! truncated document behind.

use crate::patch::apply_index;
use crate::render::{render_index, render_report, render_stats};
use crate::stats::Stats;
use std::path::{Path, PathBuf};
use talkdex_core::performance::measure_sync;
use talkdex_core::{Language, Talk, TalkdexConfig, TalkdexError, TalkdexResult};
use talkdex_scan::TalkScanner;
use tokio::fs;
use tracing::info;

/// Summary of one index run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    pub talks: usize,
    pub skipped: usize,
    /// Documents written, in language order
    pub documents: Vec<PathBuf>,
}

/// A patched document waiting to be written
#[derive(Debug, Clone)]
pub struct PreparedDocument {
    pub path: PathBuf,
    pub content: String,
    /// False when the patch reproduced the file byte for byte
    pub changed: bool,
}

/// Generates index documents and the statistics report for one repository
#[derive(Debug, Clone)]
pub struct TalkIndexGenerator {
    root: PathBuf,
    config: TalkdexConfig,
    /// Reference date, `YYYY-MM-DD`
    as_of: String,
}

impl TalkIndexGenerator {
    pub fn new<P: AsRef<Path>>(root: P, config: TalkdexConfig, as_of: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
            as_of: as_of.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn as_of(&self) -> &str {
        &self.as_of
    }

    /// Scan the repository and return talks newest first.
    ///
    /// Ties on date fall back to the entry path so filesystem order never
    /// leaks into the output. The second value is the number of skipped entries.
    pub fn load_talks(&self) -> TalkdexResult<(Vec<Talk>, usize)> {
        let report = measure_sync("scan", || TalkScanner::new(&self.config).scan(&self.root))?;
        report.log_skipped();

        let mut talks = report.talks;
        sort_newest_first(&mut talks);
        Ok((talks, report.skipped.len()))
    }

    /// Regenerate the index region of every language document.
    ///
    /// All documents are patched in memory first; if any of them is missing
    /// a marker, nothing is written.
    pub async fn generate_index(&self) -> TalkdexResult<IndexOutcome> {
        let (talks, skipped) = self.load_talks()?;
        info!("Found {} talks", talks.len());

        let stats = Stats::compute(&talks, &self.as_of, &self.config);

        let mut prepared = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            prepared.push(self.prepare_document(language, &talks, &stats).await?);
        }

        let mut documents = Vec::with_capacity(prepared.len());
        for document in prepared {
            if document.changed {
                write_atomically(&document.path, &document.content).await?;
                info!(document = %document.path.display(), "Updated index");
            } else {
                info!(document = %document.path.display(), "Index already up to date");
            }
            documents.push(document.path);
        }

        Ok(IndexOutcome {
            talks: talks.len(),
            skipped,
            documents,
        })
    }

    /// Read one language document and patch it in memory
    pub async fn prepare_document(
        &self,
        language: Language,
        talks: &[Talk],
        stats: &Stats,
    ) -> TalkdexResult<PreparedDocument> {
        let relative = self.config.documents.for_language(language);
        let path = self.root.join(relative);

        let current = fs::read_to_string(&path)
            .await
            .map_err(|e| with_path(&path, e))?;
        let content = apply_index(
            &current,
            &render_stats(stats, language),
            &render_index(talks, language),
            language,
            relative,
        )?;

        Ok(PreparedDocument {
            changed: content != current,
            path,
            content,
        })
    }

    /// Regenerate the standalone statistics report and return its text
    pub async fn generate_report(&self) -> TalkdexResult<String> {
        let (talks, _) = self.load_talks()?;
        let stats = Stats::compute(&talks, &self.as_of, &self.config);
        let report = render_report(&stats);

        let path = self.root.join(&self.config.stats_report);
        write_atomically(&path, &report).await?;
        info!(report = %path.display(), "Wrote statistics report");

        Ok(report)
    }
}

fn sort_newest_first(talks: &mut [Talk]) {
    talks.sort_by(|a, b| b.date().cmp(a.date()).then_with(|| a.path.cmp(&b.path)));
}

/// Write to a temporary sibling, then rename over the target
async fn write_atomically(path: &Path, content: &str) -> TalkdexResult<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{}.talkdex.tmp", file_name));

    fs::write(&temp_path, content)
        .await
        .map_err(|e| with_path(&temp_path, e))?;
    if let Err(e) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(with_path(path, e));
    }

    Ok(())
}

/// Keep the offending path in I/O error messages
fn with_path(path: &Path, error: std::io::Error) -> TalkdexError {
    TalkdexError::Io(std::io::Error::new(
        error.kind(),
        format!("{}: {}", path.display(), error),
    ))
}
