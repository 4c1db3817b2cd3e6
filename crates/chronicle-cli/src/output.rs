//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::pipeline::Report;
use chronicle_credibility::display_order;
use chronicle_domain::{
    truncate_chars, AuthenticityLevel, CredibilityReport, TimelineEvent, TimelineStats,
};
use chronicle_timeline::{format_for_display, MILESTONE_MARKER};
use colored::{Color, Colorize};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const EVENT_COLUMN_CHARS: usize = 80;
const TITLE_COLUMN_CHARS: usize = 50;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full run report.
    pub fn format_report(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.report_table(report)),
            OutputFormat::Text => Ok(self.report_text(report)),
        }
    }

    /// Format a consolidated timeline.
    pub fn format_timeline(&self, timeline: &[TimelineEvent]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(timeline)?),
            OutputFormat::Table => Ok(self.timeline_table(timeline)),
            OutputFormat::Text => Ok(format_for_display(timeline)),
        }
    }

    /// Format credibility scores, highest first.
    pub fn format_credibility(
        &self,
        report: &CredibilityReport,
        titles: &[String],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.credibility_table(report, titles)),
            OutputFormat::Text => Ok(credibility_lines(report, titles)),
        }
    }

    fn report_table(&self, report: &Report) -> String {
        let mut sections = vec![
            self.heading(&format!("Timeline: {}", report.query)),
            self.info(&format!(
                "{} articles, analysis via {}",
                report.article_count, report.analysis_source
            )),
        ];

        if !report.analysis.summary.is_empty() {
            sections.push(report.analysis.summary.clone());
        }
        sections.push(self.timeline_table(&report.timeline));
        sections.push(stats_line(&report.stats));

        if !report.analysis.key_highlights.is_empty() {
            sections.push(self.heading("Key highlights"));
            sections.push(bullets(report.analysis.key_highlights.iter()));
        }
        if !report.analysis.discrepancies.is_empty() {
            sections.push(self.heading("Discrepancies"));
            sections.push(bullets(report.analysis.discrepancies.iter().map(|d| {
                if d.sources.is_empty() {
                    format!("{}: {}", d.issue, d.details)
                } else {
                    format!("{} ({}): {}", d.issue, d.sources.join(", "), d.details)
                }
            })));
        }
        if !report.analysis.verified_facts.is_empty() {
            sections.push(self.heading("Verified facts"));
            sections.push(bullets(report.analysis.verified_facts.iter()));
        }

        sections.push(self.heading("Credibility"));
        sections.push(self.credibility_table(&report.credibility, &[]));

        sections.join("\n\n")
    }

    fn report_text(&self, report: &Report) -> String {
        let mut lines = Vec::new();
        if !report.analysis.summary.is_empty() {
            lines.push(report.analysis.summary.clone());
            lines.push(String::new());
        }
        lines.push(report.text.clone());
        lines.push(String::new());
        lines.push(stats_line(&report.stats));
        lines.join("\n")
    }

    fn timeline_table(&self, timeline: &[TimelineEvent]) -> String {
        if timeline.is_empty() {
            return self.warning("No events found.");
        }

        let mut builder = Builder::default();
        builder.push_record(["", "Date", "Event", "Sources", "Merged"]);

        for event in timeline {
            let marker = if event.is_milestone {
                MILESTONE_MARKER.trim_end()
            } else {
                ""
            };
            builder.push_record([
                marker.to_string(),
                event.date.to_string(),
                truncate_chars(&event.description, EVENT_COLUMN_CHARS).to_string(),
                event.source_label.clone(),
                event.merged_count.to_string(),
            ]);
        }

        render(builder)
    }

    fn credibility_table(&self, report: &CredibilityReport, titles: &[String]) -> String {
        if report.article_scores.is_empty() {
            return self.warning("No articles scored.");
        }

        let mut builder = Builder::default();
        let with_titles = !titles.is_empty();
        let mut header = vec!["Source", "Overall", "Level", "Source score", "Content", "Bias", "Flags"];
        if with_titles {
            header.insert(1, "Title");
        }
        builder.push_record(header);

        for idx in display_order(&report.article_scores) {
            let score = &report.article_scores[idx];
            let level = AuthenticityLevel::from_score(score.overall_score);
            let mut row = vec![
                score.source_details.source_name.clone(),
                score.overall_score.to_string(),
                self.level(level),
                score.source_score.to_string(),
                score.content_score.to_string(),
                score.bias_score.to_string(),
                score.flags.join("; "),
            ];
            if with_titles {
                let title = titles.get(idx).map(String::as_str).unwrap_or("");
                row.insert(1, truncate_chars(title, TITLE_COLUMN_CHARS).to_string());
            }
            builder.push_record(row);
        }

        let average = AuthenticityLevel::from_score(report.average_authenticity);
        format!(
            "{}\nAverage authenticity: {} ({}); {} of {} sources reputable",
            render(builder),
            report.average_authenticity,
            self.level(average),
            report.reputable_sources_count,
            report.total_sources
        )
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn level(&self, level: AuthenticityLevel) -> String {
        let color = match level {
            AuthenticityLevel::High => Color::Green,
            AuthenticityLevel::Medium => Color::Cyan,
            AuthenticityLevel::Low => Color::Yellow,
            AuthenticityLevel::VeryLow => Color::Red,
        };
        self.colorize(level.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn stats_line(stats: &TimelineStats) -> String {
    format!(
        "{} events, {} milestones, {} ({} days)",
        stats.total_events, stats.milestone_count, stats.date_range, stats.duration_days
    )
}

fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn credibility_lines(report: &CredibilityReport, titles: &[String]) -> String {
    display_order(&report.article_scores)
        .into_iter()
        .map(|idx| {
            let score = &report.article_scores[idx];
            let title = titles.get(idx).map(String::as_str).unwrap_or("");
            format!(
                "{:>3} {:<8} {} | {}",
                score.overall_score,
                AuthenticityLevel::from_score(score.overall_score).as_str(),
                score.source_details.source_name,
                title
            )
            .trim_end_matches([' ', '|'])
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_analyzer::AnalysisSource;
    use chronicle_domain::{AnalysisResult, CredibilityScore, EventDate, SourceScore};
    use std::collections::BTreeMap;

    fn event(date: &str, description: &str, milestone: bool) -> TimelineEvent {
        let mut event = TimelineEvent::new(EventDate::parse(date), description, "BBC");
        event.is_milestone = milestone;
        event
    }

    fn score(source: &str, overall: u8) -> CredibilityScore {
        CredibilityScore {
            overall_score: overall,
            source_score: overall,
            content_score: 100,
            bias_score: 0,
            is_clickbait: false,
            flags: Vec::new(),
            source_details: SourceScore {
                score: overall,
                is_reputable: overall >= 85,
                reason: "test".to_string(),
                source_name: source.to_string(),
            },
        }
    }

    fn credibility(scores: Vec<CredibilityScore>) -> CredibilityReport {
        CredibilityReport {
            average_authenticity: 70,
            source_scores: BTreeMap::new(),
            total_sources: scores.len(),
            reputable_sources_count: 1,
            article_scores: scores,
        }
    }

    fn report() -> Report {
        let timeline = vec![event("2024-01-01", "Liftoff", true)];
        Report {
            query: "rocket".to_string(),
            article_count: 1,
            analysis: AnalysisResult {
                summary: "A launch.".to_string(),
                ..AnalysisResult::default()
            },
            analysis_source: AnalysisSource::Fallback,
            text: format_for_display(&timeline),
            stats: chronicle_timeline::timeline_stats(&timeline),
            timeline,
            credibility: credibility(vec![score("BBC", 95)]),
        }
    }

    #[test]
    fn test_timeline_text_matches_display() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let timeline = vec![event("2024-01-01", "Liftoff", true), event("2024-01-02", "Orbit", false)];
        assert_eq!(
            formatter.format_timeline(&timeline).unwrap(),
            "⭐ 2024-01-01 → Liftoff\n  2024-01-02 → Orbit"
        );
    }

    #[test]
    fn test_timeline_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_timeline(&[event("2024-01-01", "Liftoff", true)])
            .unwrap();
        assert!(output.contains("Date"));
        assert!(output.contains("2024-01-01"));
        assert!(output.contains("Liftoff"));
    }

    #[test]
    fn test_empty_timeline() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_timeline(&[]).unwrap(), "⚠ No events found.");
    }

    #[test]
    fn test_report_json_shape() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["query"], "rocket");
        assert_eq!(value["article_count"], 1);
        assert_eq!(value["analysis_source"], "fallback");
        assert_eq!(value["timeline"][0]["date"], "2024-01-01");
        assert_eq!(value["stats"]["total_events"], 1);
        assert!(value["credibility"]["article_scores"].is_array());
        assert!(value["text"].as_str().unwrap().contains("Liftoff"));
    }

    #[test]
    fn test_report_table_sections() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.starts_with("Timeline: rocket"));
        assert!(output.contains("A launch."));
        assert!(output.contains("1 events, 1 milestones"));
        assert!(output.contains("Average authenticity: 70 (Medium)"));
    }

    #[test]
    fn test_credibility_lines_highest_first() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let report = credibility(vec![score("My Blog", 40), score("Reuters", 95)]);
        let titles = vec!["Opinion".to_string(), "Wire story".to_string()];

        let output = formatter.format_credibility(&report, &titles).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Reuters"));
        assert!(lines[0].ends_with("Wire story"));
        assert!(lines[1].starts_with(" 40 Low"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("done"), "ℹ done");
        assert_eq!(formatter.level(AuthenticityLevel::VeryLow), "Very Low");
    }
}
