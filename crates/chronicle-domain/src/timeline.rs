//! Consolidated timeline events

use crate::date::EventDate;
use serde::{Deserialize, Serialize};

/// Source label for rows that came from the analysis timeline
pub const AI_ANALYSIS_SOURCE: &str = "ai_analysis";

/// One consolidated entry of the final timeline
///
/// Within a produced timeline every `date` is unique and the sequence is
/// non-decreasing by date. `is_milestone` is assigned after sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// When it happened
    pub date: EventDate,

    /// What happened; merged events join up to three descriptions with `" | "`
    #[serde(rename = "event")]
    pub description: String,

    /// Contributing source, or up to three distinct sources joined with `", "`
    #[serde(rename = "source")]
    pub source_label: String,

    /// Number of raw entries merged into this one (at least 1)
    #[serde(rename = "event_count")]
    pub merged_count: usize,

    /// Flagged as significant by position or keyword
    pub is_milestone: bool,
}

impl TimelineEvent {
    /// Create an unmerged, unclassified event
    pub fn new(
        date: EventDate,
        description: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            source_label: source_label.into(),
            merged_count: 1,
            is_milestone: false,
        }
    }
}

/// Summary figures for a timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStats {
    /// Number of events
    pub total_events: usize,

    /// Number of events flagged as milestones
    pub milestone_count: usize,

    /// `"<first> to <last>"`, or `"N/A"` for an empty timeline
    pub date_range: String,

    /// Days between the earliest and latest parseable dates
    pub duration_days: i64,
}
