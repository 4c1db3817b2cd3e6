//! Timeline consolidation: collect, merge, sort, classify

use chronicle_domain::config::DEFAULT_MILESTONE_KEYWORDS;
use chronicle_domain::{
    truncate_chars, AnalysisResult, ChronicleConfig, EventDate, ProcessedArticle, TimelineEvent,
    AI_ANALYSIS_SOURCE,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Title characters kept in a synthesized coverage event
pub const COVERAGE_TITLE_CHARS: usize = 80;

/// Descriptions and distinct sources kept when merging one date
pub const MERGE_DISPLAY_CAP: usize = 3;

/// Timelines this short mark every event as a milestone
pub const ALL_MILESTONES_MAX: usize = 3;

/// Merges analysis and article dates into one annotated timeline
#[derive(Debug, Clone)]
pub struct TimelineConsolidator {
    milestone_keywords: Vec<String>,
}

impl Default for TimelineConsolidator {
    fn default() -> Self {
        Self::with_keywords(DEFAULT_MILESTONE_KEYWORDS.iter().copied())
    }
}

impl TimelineConsolidator {
    /// Create a consolidator using the configured milestone keywords
    pub fn new(config: &ChronicleConfig) -> Self {
        Self::with_keywords(config.milestone_keywords.iter())
    }

    /// Create a consolidator with an explicit keyword set
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let milestone_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { milestone_keywords }
    }

    /// Build the consolidated timeline
    ///
    /// The result is sorted by date with every date unique, and each event's
    /// `is_milestone` flag set.
    pub fn generate_timeline(
        &self,
        analysis: &AnalysisResult,
        articles: &[ProcessedArticle],
    ) -> Vec<TimelineEvent> {
        let collected = collect(analysis, articles);
        let collected_count = collected.len();

        let mut timeline = merge_by_date(collected);
        sort_timeline(&mut timeline);
        self.annotate_milestones(&mut timeline);

        info!(
            "Consolidated {} raw entries into {} events ({} milestones)",
            collected_count,
            timeline.len(),
            timeline.iter().filter(|e| e.is_milestone).count()
        );
        timeline
    }

    /// Flag milestones on a sorted timeline
    ///
    /// Short timelines are all milestones. Otherwise the first and last events
    /// are, plus any interior event whose description contains a keyword.
    pub fn annotate_milestones(&self, events: &mut [TimelineEvent]) {
        if events.len() <= ALL_MILESTONES_MAX {
            events.iter_mut().for_each(|e| e.is_milestone = true);
            return;
        }

        let last = events.len() - 1;
        for (idx, event) in events.iter_mut().enumerate() {
            event.is_milestone = idx == 0 || idx == last || self.has_keyword(&event.description);
        }
    }

    fn has_keyword(&self, description: &str) -> bool {
        let lower = description.to_lowercase();
        self.milestone_keywords.iter().any(|k| lower.contains(k))
    }
}

/// Gather raw entries; analysis rows first, then article coverage
///
/// A coverage entry is added only when no collected entry has its date yet,
/// so analysis rows take priority and the first article wins among articles.
fn collect(analysis: &AnalysisResult, articles: &[ProcessedArticle]) -> Vec<TimelineEvent> {
    let mut entries = Vec::new();

    for row in &analysis.timeline {
        if row.date.trim().is_empty() || row.event.trim().is_empty() {
            debug!("Skipping analysis row without date or event");
            continue;
        }
        entries.push(TimelineEvent::new(
            EventDate::parse(&row.date),
            row.event.clone(),
            AI_ANALYSIS_SOURCE,
        ));
    }

    let mut claimed: HashSet<EventDate> = entries.iter().map(|e| e.date.clone()).collect();
    for article in articles {
        for mention in &article.mentions {
            let date = EventDate::from(mention.date);
            if !claimed.insert(date.clone()) {
                continue;
            }
            entries.push(TimelineEvent::new(
                date,
                format!(
                    "News coverage: {}",
                    truncate_chars(article.title(), COVERAGE_TITLE_CHARS)
                ),
                article.source(),
            ));
        }
    }

    entries
}

/// Collapse entries sharing a date into one event each, in first-seen order
///
/// A lone entry passes through unchanged. A group keeps its first three
/// descriptions joined by `" | "` and up to three distinct sources joined by
/// `", "`; `merged_count` counts every entry in the group.
pub fn merge_by_date(entries: Vec<TimelineEvent>) -> Vec<TimelineEvent> {
    let mut slots: HashMap<EventDate, usize> = HashMap::new();
    let mut groups: Vec<Vec<TimelineEvent>> = Vec::new();

    for entry in entries {
        match slots.get(&entry.date) {
            Some(&slot) => groups[slot].push(entry),
            None => {
                slots.insert(entry.date.clone(), groups.len());
                groups.push(vec![entry]);
            }
        }
    }

    groups.into_iter().filter_map(merge_group).collect()
}

fn merge_group(mut group: Vec<TimelineEvent>) -> Option<TimelineEvent> {
    if group.len() <= 1 {
        return group.pop();
    }

    let descriptions: Vec<&str> = group
        .iter()
        .take(MERGE_DISPLAY_CAP)
        .map(|e| e.description.as_str())
        .collect();

    let mut sources: Vec<&str> = Vec::new();
    for entry in &group {
        if sources.len() == MERGE_DISPLAY_CAP {
            break;
        }
        if !sources.contains(&entry.source_label.as_str()) {
            sources.push(&entry.source_label);
        }
    }

    let mut merged = TimelineEvent::new(
        group[0].date.clone(),
        descriptions.join(" | "),
        sources.join(", "),
    );
    merged.merged_count = group.iter().map(|e| e.merged_count).sum();
    debug!("Merged {} entries on {}", merged.merged_count, merged.date);
    Some(merged)
}

/// Stable ascending sort; unparseable dates sort as the minimum date
fn sort_timeline(events: &mut [TimelineEvent]) {
    events.sort_by_key(|e| e.date.sort_date());
}
