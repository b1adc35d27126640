//! Talk statistics
//!
//! All counting happens against an explicit reference date. Dates are ISO
//! strings and are compared as strings.

use std::collections::BTreeMap;
use talkdex_core::{Talk, TalkdexConfig};

/// A label with its frequency, as used in rankings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCount {
    pub label: String,
    pub count: usize,
}

/// Aggregate counts over one set of talks
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub total: usize,
    pub past: usize,
    pub future: usize,
    pub by_year: BTreeMap<String, usize>,
    /// Placeholder topics are not counted here
    pub by_topic: BTreeMap<String, usize>,
    /// Placeholder and empty events are not counted here
    pub by_event: BTreeMap<String, usize>,
    /// Future talks, soonest first
    pub upcoming: Vec<Talk>,
}

impl Stats {
    /// Classify and count `talks` as of `as_of` (`YYYY-MM-DD`).
    ///
    /// A talk dated exactly `as_of` counts as future.
    pub fn compute(talks: &[Talk], as_of: &str, config: &TalkdexConfig) -> Self {
        let mut stats = Stats {
            total: talks.len(),
            ..Default::default()
        };

        for talk in talks {
            if talk.is_past(as_of) {
                stats.past += 1;
            } else {
                stats.future += 1;
                stats.upcoming.push(talk.clone());
            }

            *stats.by_year.entry(talk.year.clone()).or_insert(0) += 1;

            for topic in talk.topics() {
                if !config.is_placeholder_topic(topic) {
                    *stats.by_topic.entry(topic.clone()).or_insert(0) += 1;
                }
            }

            if !config.is_placeholder_event(talk.event()) {
                *stats.by_event.entry(talk.event().to_string()).or_insert(0) += 1;
            }
        }

        stats.upcoming.sort_by(|a, b| {
            a.date()
                .cmp(b.date())
                .then_with(|| a.path.cmp(&b.path))
        });

        debug_assert_eq!(stats.total, stats.past + stats.future);
        stats
    }

    pub fn top_topics(&self, n: usize) -> Vec<TopicCount> {
        top_n(&self.by_topic, n)
    }

    pub fn top_events(&self, n: usize) -> Vec<TopicCount> {
        top_n(&self.by_event, n)
    }

    /// Years with at least one talk, newest first
    pub fn years_descending(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.by_year.iter().rev()
    }

    pub fn active_years(&self) -> usize {
        self.by_year.len()
    }
}

/// Rank by count descending, ties by ascending label, truncated to `n`
pub fn top_n(frequencies: &BTreeMap<String, usize>, n: usize) -> Vec<TopicCount> {
    let mut ranked: Vec<TopicCount> = frequencies
        .iter()
        .map(|(label, count)| TopicCount {
            label: label.clone(),
            count: *count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use talkdex_core::TalkMetadata;

    fn talk(date: &str, topics: &[&str], event: &str) -> Talk {
        let year = &date[..4];
        Talk::new(
            TalkMetadata {
                title: format!("Talk {}", date),
                date: date.to_string(),
                event: event.to_string(),
                topics: topics.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
            year,
            &format!("entry-{}", date),
        )
    }

    fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_past_future_split() {
        let talks = vec![
            talk("2025-01-10", &["go", "otel"], "GoMeetup"),
            talk("2099-01-01", &["go"], "FutureConf"),
        ];

        let stats = Stats::compute(&talks, "2025-06-01", &TalkdexConfig::default());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.past, 1);
        assert_eq!(stats.future, 1);
        assert_eq!(stats.by_topic, counts(&[("go", 2), ("otel", 1)]));
        assert_eq!(stats.top_topics(1)[0].label, "go");
    }

    #[test]
    fn test_talk_on_reference_date_is_future() {
        let talks = vec![talk("2025-06-01", &["go"], "")];
        let stats = Stats::compute(&talks, "2025-06-01", &TalkdexConfig::default());
        assert_eq!(stats.past, 0);
        assert_eq!(stats.future, 1);
        assert_eq!(stats.upcoming.len(), 1);
    }

    #[test]
    fn test_total_is_past_plus_future() {
        let talks: Vec<Talk> = (1..=28)
            .map(|day| talk(&format!("2025-02-{:02}", day), &["go"], ""))
            .collect();

        for day in 1..=28 {
            let as_of = format!("2025-02-{:02}", day);
            let stats = Stats::compute(&talks, &as_of, &TalkdexConfig::default());
            assert_eq!(stats.total, stats.past + stats.future);
            assert_eq!(stats.past, day - 1);
        }
    }

    #[test]
    fn test_placeholders_excluded_from_counts() {
        let talks = vec![
            talk("2025-01-01", &["Topic1", "Topic2", "", "rust"], "Conference/Meetup Name"),
            talk("2025-02-01", &["rust"], "Unknown"),
            talk("2025-03-01", &["Topic3"], ""),
            talk("2025-04-01", &["go"], "RustConf"),
        ];

        let stats = Stats::compute(&talks, "2030-01-01", &TalkdexConfig::default());
        assert_eq!(stats.by_topic, counts(&[("go", 1), ("rust", 2)]));
        assert_eq!(stats.by_event, counts(&[("RustConf", 1)]));
        assert_eq!(stats.by_year, counts(&[("2025", 4)]));
    }

    #[test]
    fn test_topic_labels_are_case_sensitive() {
        let talks = vec![talk("2025-01-01", &["Go", "go"], "")];
        let stats = Stats::compute(&talks, "2030-01-01", &TalkdexConfig::default());
        assert_eq!(stats.by_topic, counts(&[("Go", 1), ("go", 1)]));
    }

    #[test]
    fn test_top_n_breaks_ties_alphabetically() {
        let ranked = top_n(&counts(&[("zeta", 2), ("alpha", 2), ("mid", 1)]), 10);
        let labels: Vec<&str> = ranked.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "zeta", "mid"]);
    }

    #[test]
    fn test_top_n_orders_by_count_then_truncates() {
        let ranked = top_n(&counts(&[("a", 1), ("b", 5), ("c", 3), ("d", 3)]), 3);
        assert_eq!(
            ranked,
            vec![
                TopicCount { label: "b".to_string(), count: 5 },
                TopicCount { label: "c".to_string(), count: 3 },
                TopicCount { label: "d".to_string(), count: 3 },
            ]
        );
        assert!(top_n(&BTreeMap::new(), 3).is_empty());
    }

    #[test]
    fn test_upcoming_sorted_ascending() {
        let talks = vec![
            talk("2099-05-01", &["go"], ""),
            talk("2020-01-01", &["go"], ""),
            talk("2098-01-01", &["go"], ""),
            talk("2099-01-01", &["go"], ""),
        ];

        let stats = Stats::compute(&talks, "2025-01-01", &TalkdexConfig::default());
        let dates: Vec<&str> = stats.upcoming.iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec!["2098-01-01", "2099-01-01", "2099-05-01"]);
    }

    #[test]
    fn test_years_descending() {
        let talks = vec![
            talk("2023-01-01", &["go"], ""),
            talk("2025-01-01", &["go"], ""),
            talk("2025-02-01", &["go"], ""),
        ];
        let stats = Stats::compute(&talks, "2030-01-01", &TalkdexConfig::default());
        let years: Vec<(&str, usize)> = stats
            .years_descending()
            .map(|(y, c)| (y.as_str(), *c))
            .collect();
        assert_eq!(years, vec![("2025", 2), ("2023", 1)]);
        assert_eq!(stats.active_years(), 2);
    }
}
