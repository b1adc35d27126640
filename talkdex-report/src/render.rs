//! Markdown rendering for the index documents and the statistics report

use crate::locale::{labels, Labels};
use crate::stats::Stats;
use std::collections::BTreeMap;
use std::fmt::Write;
use talkdex_core::{Language, Talk};

/// Glyph repeated once per talk in count bars
const BAR_GLYPH: &str = "█";

/// How many topics the inline statistics block names
pub const INLINE_TOP_TOPICS: usize = 3;
/// How many topics the standalone report ranks
pub const REPORT_TOP_TOPICS: usize = 10;
/// How many events the standalone report ranks
pub const REPORT_TOP_EVENTS: usize = 5;
/// How many upcoming talks the standalone report previews
pub const REPORT_UPCOMING_PREVIEW: usize = 5;

/// Render the index fragment: per-year tables followed by the topic index.
///
/// `talks` must already be sorted newest first; rows and topic links keep
/// that order.
pub fn render_index(talks: &[Talk], language: Language) -> String {
    let labels = labels(language);
    let mut out = String::new();

    out.push_str(labels.index_marker);
    out.push_str("\n\n");
    out.push_str(labels.index_intro);
    out.push_str("\n\n");

    let mut by_year: BTreeMap<&str, Vec<&Talk>> = BTreeMap::new();
    for talk in talks {
        by_year.entry(talk.year.as_str()).or_default().push(talk);
    }

    for (year, year_talks) in by_year.iter().rev() {
        let _ = write!(out, "### {}\n\n", year);
        out.push_str(&render_table(year_talks, labels));
        out.push_str("\n\n");
    }

    let _ = write!(
        out,
        "{}\n\n{}\n\n---\n\n{}\n\n",
        labels.coming_soon_heading, labels.coming_soon_body, labels.topics_heading
    );
    out.push_str(&render_topic_index(talks));
    out.push_str("\n\n");

    out
}

fn render_table(talks: &[&Talk], labels: &Labels) -> String {
    let mut out = String::new();
    out.push_str(labels.table_header);
    out.push('\n');
    out.push_str(labels.table_rule);
    out.push('\n');

    for talk in talks {
        let _ = writeln!(
            out,
            "| {} | [**{}**](./{}) | {} | {} | {} |",
            talk.date(),
            talk.title(),
            talk.path,
            talk.topics().join(", "),
            talk.event(),
            companion_links(talk)
        );
    }

    out
}

/// Links to the entry's companion document in every language
fn companion_links(talk: &Talk) -> String {
    Language::ALL
        .iter()
        .map(|language| {
            let labels = labels(*language);
            format!(
                "[{}](./{}/{})",
                labels.companion_label, talk.path, labels.companion_file
            )
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Every distinct topic, alphabetically, with links to the talks carrying it.
///
/// Placeholder topics are listed too; only the statistics hide them.
fn render_topic_index(talks: &[Talk]) -> String {
    let mut by_topic: BTreeMap<&str, Vec<&Talk>> = BTreeMap::new();
    for talk in talks {
        for topic in talk.topics() {
            by_topic.entry(topic.as_str()).or_default().push(talk);
        }
    }

    let mut out = String::new();
    for (topic, topic_talks) in &by_topic {
        let links = topic_talks
            .iter()
            .map(|talk| format!("[{} ({})](./{})", talk.title(), talk.year, talk.path))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "- **{}**: {}", topic, links);
    }

    out
}

/// Render the statistics block placed above the index.
///
/// Empty when there are no talks, so a stale block is removed and nothing
/// replaces it.
pub fn render_stats(stats: &Stats, language: Language) -> String {
    if stats.total == 0 {
        return String::new();
    }

    let labels = labels(language);
    let mut out = String::new();

    let _ = write!(out, "{}\n\n", labels.stats_heading);
    let _ = writeln!(out, "- {}: {}", labels.total_talks, stats.total);
    let _ = writeln!(out, "- {}: {}", labels.past, stats.past);
    let _ = writeln!(out, "- {}: {}", labels.upcoming, stats.future);

    if stats.active_years() > 1 {
        let _ = writeln!(out, "- {}: {}", labels.active_years, stats.active_years());
    }

    let top = stats.top_topics(INLINE_TOP_TOPICS);
    if !top.is_empty() {
        let summary = top
            .iter()
            .map(|t| format!("{} ({})", t.label, t.count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "- {}: {}", labels.top_topics, summary);
    }

    out.push('\n');
    out
}

/// Render the standalone statistics report
pub fn render_report(stats: &Stats) -> String {
    let mut out = String::from("## 📊 Talk Statistics\n\n");

    if stats.total == 0 {
        out.push_str("No talks found yet. Create your first talk with:\n");
        out.push_str("```bash\n");
        out.push_str("make create-talk DATE=2025-12-01 SLUG=my-first-talk\n");
        out.push_str("```\n");
        return out;
    }

    let _ = write!(out, "### 🎤 Total Talks: {}\n\n", stats.total);
    let _ = writeln!(out, "- **Past Talks**: {}", stats.past);
    let _ = write!(out, "- **Upcoming Talks**: {}\n\n", stats.future);

    out.push_str("### 📅 Talks by Year\n\n");
    for (year, count) in stats.years_descending() {
        let _ = writeln!(out, "- **{}**: {} {}", year, count, bar(*count));
    }
    out.push('\n');

    out.push_str("### 🏷️ Most Popular Topics\n\n");
    for topic in stats.top_topics(REPORT_TOP_TOPICS) {
        let _ = writeln!(out, "- **{}**: {} {}", topic.label, topic.count, bar(topic.count));
    }
    out.push('\n');

    out.push_str("### 🎪 Events\n\n");
    let events = stats.top_events(REPORT_TOP_EVENTS);
    if events.is_empty() {
        out.push_str("No events with talks yet.\n");
    } else {
        for event in events {
            let _ = writeln!(out, "- **{}**: {} talks", event.label, event.count);
        }
    }
    out.push('\n');

    if !stats.upcoming.is_empty() {
        out.push_str("### 🔜 Upcoming Talks\n\n");
        for talk in stats.upcoming.iter().take(REPORT_UPCOMING_PREVIEW) {
            let _ = writeln!(out, "- **{}**: {} @ {}", talk.date(), talk.title(), talk.event());
        }
        out.push('\n');
    }

    out
}

fn bar(count: usize) -> String {
    BAR_GLYPH.repeat(count)
}
