//! Derived views of a consolidated timeline

use chronicle_domain::{TimelineEvent, TimelineStats};

/// Marker prefixed to milestone lines
pub const MILESTONE_MARKER: &str = "⭐ ";

/// Summary figures for a sorted timeline
///
/// The date range names the first and last events as they are ordered. The
/// duration spans the earliest and latest calendar dates and is 0 when no
/// date parses.
pub fn timeline_stats(timeline: &[TimelineEvent]) -> TimelineStats {
    let date_range = match (timeline.first(), timeline.last()) {
        (Some(first), Some(last)) => format!("{} to {}", first.date, last.date),
        _ => "N/A".to_string(),
    };

    let calendar = timeline.iter().filter_map(|e| e.date.calendar());
    let duration_days = match (calendar.clone().min(), calendar.max()) {
        (Some(min), Some(max)) => (max - min).num_days(),
        _ => 0,
    };

    TimelineStats {
        total_events: timeline.len(),
        milestone_count: timeline.iter().filter(|e| e.is_milestone).count(),
        date_range,
        duration_days,
    }
}

/// One line per event: marker, date, arrow, description
///
/// ```
/// use chronicle_domain::{EventDate, TimelineEvent};
/// use chronicle_timeline::format_for_display;
///
/// let mut event = TimelineEvent::new(EventDate::parse("2024-01-01"), "Liftoff", "BBC");
/// event.is_milestone = true;
/// let quiet = TimelineEvent::new(EventDate::parse("2024-01-02"), "Coasting", "BBC");
///
/// assert_eq!(
///     format_for_display(&[event, quiet]),
///     "⭐ 2024-01-01 → Liftoff\n  2024-01-02 → Coasting"
/// );
/// ```
pub fn format_for_display(timeline: &[TimelineEvent]) -> String {
    timeline
        .iter()
        .map(|event| {
            let marker = if event.is_milestone {
                MILESTONE_MARKER
            } else {
                "  "
            };
            format!("{}{} → {}", marker, event.date, event.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_domain::EventDate;

    fn event(date: &str, milestone: bool) -> TimelineEvent {
        let mut event = TimelineEvent::new(EventDate::parse(date), "e", "s");
        event.is_milestone = milestone;
        event
    }

    #[test]
    fn test_stats_empty() {
        let stats = timeline_stats(&[]);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.milestone_count, 0);
        assert_eq!(stats.date_range, "N/A");
        assert_eq!(stats.duration_days, 0);
    }

    #[test]
    fn test_stats_span() {
        let stats = timeline_stats(&[
            event("2024-01-01", true),
            event("2024-01-15", false),
            event("2024-03-01", true),
        ]);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.milestone_count, 2);
        assert_eq!(stats.date_range, "2024-01-01 to 2024-03-01");
        assert_eq!(stats.duration_days, 60);
    }

    #[test]
    fn test_stats_ignore_unparsed_in_duration() {
        let stats = timeline_stats(&[event("someday", true), event("2024-01-01", true)]);
        assert_eq!(stats.date_range, "someday to 2024-01-01");
        assert_eq!(stats.duration_days, 0);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(format_for_display(&[]), "");
    }
}
