//! Parse LLM output into an analysis result

use crate::error::AnalyzerError;
use chronicle_domain::{AnalysisResult, Discrepancy, TimelineEntry};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parse an LLM response into an [`AnalysisResult`]
///
/// The outermost `{...}` in the response is taken as the payload, so prose or
/// markdown fences around it are ignored. Inside the object every field is
/// optional: missing or mistyped fields come back empty, and timeline rows
/// without both a date and an event are skipped.
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult, AnalyzerError> {
    let json_str = extract_json(response).ok_or(AnalyzerError::NoJson)?;
    let json: Value = serde_json::from_str(json_str)?;
    let obj = json.as_object().ok_or(AnalyzerError::NoJson)?;

    let result = AnalysisResult {
        timeline: parse_timeline(obj),
        summary: string_field(obj, "summary"),
        key_highlights: string_list(obj, "key_highlights"),
        discrepancies: parse_discrepancies(obj),
        verified_facts: string_list(obj, "verified_facts"),
    };

    debug!(
        "Parsed analysis: {} timeline rows, {} highlights, {} discrepancies",
        result.timeline.len(),
        result.key_highlights.len(),
        result.discrepancies.len()
    );
    Ok(result)
}

/// Slice from the first `{` to the last `}`
fn extract_json(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (start < end).then(|| &response[start..=end])
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    match obj.get(key) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            warn!("Analysis field '{}' is not an array, ignored", key);
            &[]
        }
        None => &[],
    }
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    array_field(obj, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

fn parse_timeline(obj: &Map<String, Value>) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();
    for (idx, row) in array_field(obj, "timeline").iter().enumerate() {
        let date = row.get("date").and_then(Value::as_str).map(str::trim);
        let event = row.get("event").and_then(Value::as_str).map(str::trim);
        match (date, event) {
            (Some(date), Some(event)) if !date.is_empty() && !event.is_empty() => {
                entries.push(TimelineEntry::new(date, event));
            }
            _ => debug!("Skipping timeline row {}: missing date or event", idx),
        }
    }
    entries
}

fn parse_discrepancies(obj: &Map<String, Value>) -> Vec<Discrepancy> {
    array_field(obj, "discrepancies")
        .iter()
        .filter_map(|row| {
            let row = row.as_object()?;
            let issue = row.get("issue").and_then(Value::as_str)?;
            Some(Discrepancy {
                issue: issue.to_string(),
                sources: string_list(row, "sources"),
                details: string_field(row, "details"),
            })
        })
        .collect()
}
