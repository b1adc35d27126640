//! Marker-delimited document patching
//!
//! A document is handled as a sequence of lines, each keeping its own line
//! terminator, and sections are located by exact heading lines. Splicing
//! works on line indices, so concatenating untouched lines reproduces the
//! original bytes exactly.

use crate::locale::{labels, STATS_BLOCK_MARKER};
use talkdex_core::{structure_error, Language, TalkdexResult};
use tracing::debug;

/// Prefix shared by every top-level heading line
const TOP_LEVEL_HEADING: &str = "## ";

/// Splits a document into lines without losing any byte
struct LineSpans<'a> {
    lines: Vec<&'a str>,
}

impl<'a> LineSpans<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            lines: document.split_inclusive('\n').collect(),
        }
    }

    /// Line content without its terminator or trailing blanks
    fn text(&self, index: usize) -> &'a str {
        self.lines[index].trim_end()
    }

    /// First line in `from..` whose text is exactly `heading`
    fn find_heading(&self, heading: &str, from: usize) -> Option<usize> {
        (from..self.lines.len()).find(|&i| self.text(i) == heading)
    }

    /// First line in `from..to` starting with `prefix`
    fn find_prefix(&self, prefix: &str, from: usize, to: usize) -> Option<usize> {
        (from..to).find(|&i| self.lines[i].starts_with(prefix))
    }

    fn remove(&mut self, start: usize, end: usize) {
        self.lines.drain(start..end);
    }

    fn join(&self, range: std::ops::Range<usize>) -> String {
        self.lines[range].concat()
    }
}

/// Replace the generated index region of `document`.
///
/// The result is `prefix + stats_fragment + index_fragment + suffix`, where
/// the prefix ends right before the index marker and the suffix starts at the
/// end marker. One previously generated statistics block before the index
/// marker is removed first, up to the next top-level heading. Applying the
/// same fragments to the output again yields the same bytes.
///
/// `document_name` only feeds error messages.
pub fn apply_index(
    document: &str,
    stats_fragment: &str,
    index_fragment: &str,
    language: Language,
    document_name: &str,
) -> TalkdexResult<String> {
    let labels = labels(language);
    let mut spans = LineSpans::new(document);

    let index_start = spans.find_heading(labels.index_marker, 0).ok_or_else(|| {
        structure_error!(
            "index heading not found",
            document_name,
            labels.index_marker,
            "patcher"
        )
    })?;

    let end_start = spans
        .find_heading(labels.end_marker, index_start + 1)
        .ok_or_else(|| {
            structure_error!(
                "end heading not found after the index heading",
                document_name,
                labels.end_marker,
                "patcher"
            )
        })?;

    let (index_start, end_start) = match spans.find_prefix(STATS_BLOCK_MARKER, 0, index_start) {
        Some(stats_start) => {
            // The index marker is itself a top-level heading, so the block
            // always ends at or before it.
            let stats_end = spans
                .find_prefix(TOP_LEVEL_HEADING, stats_start + 1, index_start)
                .unwrap_or(index_start);
            debug!(
                document = document_name,
                lines = stats_end - stats_start,
                "Removing previous statistics block"
            );
            spans.remove(stats_start, stats_end);
            let removed = stats_end - stats_start;
            (index_start - removed, end_start - removed)
        }
        None => (index_start, end_start),
    };

    let mut patched = spans.join(0..index_start);
    patched.push_str(stats_fragment);
    patched.push_str(index_fragment);
    patched.push_str(&spans.join(end_start..spans.lines.len()));

    Ok(patched)
}
