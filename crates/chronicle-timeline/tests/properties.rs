//! Property tests for timeline consolidation

use chronicle_domain::{AnalysisResult, TimelineEntry};
use chronicle_timeline::TimelineConsolidator;
use proptest::prelude::*;
use std::collections::HashSet;

fn date_string() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (2000i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        1 => "[a-z ]{1,12}",
    ]
}

fn entries() -> impl Strategy<Value = Vec<TimelineEntry>> {
    proptest::collection::vec(
        (date_string(), "[A-Za-z ]{1,30}").prop_map(|(d, e)| TimelineEntry::new(d, e)),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .filter(|r| !r.date.trim().is_empty() && !r.event.trim().is_empty())
            .collect()
    })
}

fn consolidate(rows: Vec<TimelineEntry>) -> Vec<chronicle_domain::TimelineEvent> {
    let analysis = AnalysisResult {
        timeline: rows,
        ..AnalysisResult::default()
    };
    TimelineConsolidator::default().generate_timeline(&analysis, &[])
}

proptest! {
    /// Property: calendar dates appear in ascending order
    #[test]
    fn test_sorted_by_date(rows in entries()) {
        let timeline = consolidate(rows);
        for pair in timeline.windows(2) {
            prop_assert!(pair[0].date.sort_date() <= pair[1].date.sort_date());
        }
    }

    /// Property: no two events share a date
    #[test]
    fn test_dates_unique(rows in entries()) {
        let timeline = consolidate(rows);
        let unique: HashSet<_> = timeline.iter().map(|e| e.date.clone()).collect();
        prop_assert_eq!(unique.len(), timeline.len());
    }

    /// Property: merging loses no entries from the count
    #[test]
    fn test_merged_counts_sum_to_input(rows in entries()) {
        let input = rows.len();
        let timeline = consolidate(rows);
        prop_assert_eq!(timeline.iter().map(|e| e.merged_count).sum::<usize>(), input);
        prop_assert!(timeline.iter().all(|e| e.merged_count >= 1));
    }

    /// Property: short timelines are all milestones
    #[test]
    fn test_short_timelines_all_milestones(rows in entries()) {
        let timeline = consolidate(rows);
        if timeline.len() <= 3 {
            prop_assert!(timeline.iter().all(|e| e.is_milestone));
        }
    }

    /// Property: long timelines always flag their endpoints
    #[test]
    fn test_endpoints_are_milestones(rows in entries()) {
        let timeline = consolidate(rows);
        if timeline.len() > 3 {
            prop_assert!(timeline[0].is_milestone);
            prop_assert!(timeline[timeline.len() - 1].is_milestone);
        }
    }
}
