//! Chronicle Timeline
//!
//! Consolidates dated events from an analysis result and from per-article
//! date mentions into one chronological, milestone-annotated timeline.
//!
//! # Algorithm
//!
//! 1. **Collect**: analysis rows with both a date and an event, tagged
//!    `ai_analysis`; then one "News coverage" entry per article mention whose
//!    date is not yet claimed
//! 2. **Merge**: entries sharing a date collapse into one event, keeping up to
//!    three descriptions and three distinct sources but counting every entry
//! 3. **Sort**: ascending by date, unparseable dates first
//! 4. **Classify**: milestones by position and keyword
//!
//! # Example Usage
//!
//! ```
//! use chronicle_domain::{AnalysisResult, TimelineEntry};
//! use chronicle_timeline::{format_for_display, TimelineConsolidator};
//!
//! let analysis = AnalysisResult {
//!     timeline: vec![
//!         TimelineEntry::new("2024-02-10", "Summit signed"),
//!         TimelineEntry::new("2024-01-05", "Talks open"),
//!     ],
//!     ..AnalysisResult::default()
//! };
//!
//! let timeline = TimelineConsolidator::default().generate_timeline(&analysis, &[]);
//! assert_eq!(
//!     format_for_display(&timeline),
//!     "⭐ 2024-01-05 → Talks open\n⭐ 2024-02-10 → Summit signed"
//! );
//! ```

#![warn(missing_docs)]

mod consolidator;
mod display;

pub use consolidator::{
    merge_by_date, TimelineConsolidator, ALL_MILESTONES_MAX, COVERAGE_TITLE_CHARS, MERGE_DISPLAY_CAP,
};
pub use display::{format_for_display, timeline_stats, MILESTONE_MARKER};
