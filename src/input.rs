//! Loading the three aggregated collections.
//!
//! JSON input mirrors the placeholders of a report page:
//! ```json
//! {
//!   "perDay":     [{"day": "Mon", "time": 3661}],
//!   "perProject": [{"project": "Tempo", "time": "3661"}],
//!   "perIssue":   [{"issue": "TEMPO-1", "time": 3661}]
//! }
//! ```
//! CSV input holds one collection: a header row with a label column and a
//! `time` column. The label column is the collection's own field (`day`,
//! `project` or `issue`) or the neutral `label`.

use crate::error::{ChartError, Result};
use crate::models::{ChartKind, RawEntry, RawWorkLog, TimeBucket, WorkLog};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

pub fn parse_worklog_json(text: &str) -> Result<WorkLog> {
    let raw: RawWorkLog = serde_json::from_str(text).map_err(invalid_json)?;
    raw.into_worklog()
}

pub fn load_worklog_json<P: AsRef<Path>>(path: P) -> Result<WorkLog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let worklog = parse_worklog_json(&text)?;
    log::debug!(
        "loaded {}: {} day, {} project, {} issue bucket(s)",
        path.display(),
        worklog.per_day.len(),
        worklog.per_project.len(),
        worklog.per_issue.len()
    );
    Ok(worklog)
}

/// Read the `kind` collection from a CSV file.
pub fn load_buckets_csv<P: AsRef<Path>>(path: P, kind: ChartKind) -> Result<Vec<TimeBucket>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<RawEntry>().enumerate() {
        // +2: header line, 1-based numbering
        let line = i + 2;
        let entry = row.map_err(|e| match e.kind() {
            csv::ErrorKind::Deserialize { .. } => {
                ChartError::InvalidInput(format!("{}:{}: {}", path.display(), line, e))
            }
            _ => ChartError::Csv(e),
        })?;
        let bucket = entry.into_bucket(kind).map_err(|e| match e {
            ChartError::InvalidInput(msg) => {
                ChartError::InvalidInput(format!("{}:{}: {}", path.display(), line, msg))
            }
            other => other,
        })?;
        out.push(bucket);
    }
    log::debug!("loaded {}: {} bucket(s)", path.display(), out.len());
    Ok(out)
}

/// Bad `time` values surface as input errors, not as JSON syntax errors.
fn invalid_json(e: serde_json::Error) -> ChartError {
    if e.is_data() {
        ChartError::InvalidInput(e.to_string())
    } else {
        ChartError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn json_keeps_order_and_coerces_time() {
        let w = parse_worklog_json(
            r#"{"perDay":[{"day":"Tue","time":"60"},{"day":"Mon","time":3661}],
                "perProject":[{"project":"P","time":1}],
                "perIssue":[{"issue":"I-1","time":2.9}]}"#,
        )
        .unwrap();
        assert_eq!(
            w.per_day,
            vec![TimeBucket::new("Tue", 60), TimeBucket::new("Mon", 3661)]
        );
        assert_eq!(w.per_issue, vec![TimeBucket::new("I-1", 2)]);
    }

    #[test]
    fn non_numeric_time_is_invalid_input() {
        let e = parse_worklog_json(r#"{"perDay":[{"day":"Mon","time":"abc"}]}"#).unwrap_err();
        assert!(matches!(e, ChartError::InvalidInput(_)), "{e:?}");
    }

    #[test]
    fn cross_kind_label_fields_are_rejected() {
        let e = parse_worklog_json(
            r#"{"perDay":[{"issue":"X-1","time":1}],
                "perProject":[{"project":"P","time":1}],
                "perIssue":[{"issue":"I-1","time":1}]}"#,
        )
        .unwrap_err();
        match e {
            ChartError::InvalidInput(msg) => assert!(msg.contains("perDay"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }

        let e = parse_worklog_json(
            r#"{"perDay":[{"day":"Mon","time":1}],
                "perProject":[{"project":"P","time":1}],
                "perIssue":[{"issue":"I-1","time":1},{"project":"P","time":1}]}"#,
        )
        .unwrap_err();
        match e {
            ChartError::InvalidInput(msg) => {
                assert!(msg.contains("perIssues") && msg.contains("item 1"), "{msg}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn broken_json_is_json_error() {
        let e = parse_worklog_json("{\"perDay\": [").unwrap_err();
        assert!(matches!(e, ChartError::Json(_)), "{e:?}");
    }

    #[test]
    fn csv_with_project_header() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "project,time").unwrap();
        writeln!(f, "Tempo, 7200").unwrap();
        writeln!(f, "Slackbot,\"90.5\"").unwrap();
        let rows = load_buckets_csv(f.path(), ChartKind::PerProject).unwrap();
        assert_eq!(
            rows,
            vec![TimeBucket::new("Tempo", 7200), TimeBucket::new("Slackbot", 90)]
        );
    }

    #[test]
    fn csv_negative_time_is_invalid_input() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "day,time").unwrap();
        writeln!(f, "Mon,-5").unwrap();
        let e = load_buckets_csv(f.path(), ChartKind::PerDay).unwrap_err();
        assert!(matches!(e, ChartError::InvalidInput(_)), "{e:?}");
    }

    #[test]
    fn csv_header_must_match_the_collection() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "day,time").unwrap();
        writeln!(f, "Mon,60").unwrap();
        let e = load_buckets_csv(f.path(), ChartKind::PerIssue).unwrap_err();
        match e {
            ChartError::InvalidInput(msg) => assert!(msg.contains(":2:"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "label,time").unwrap();
        writeln!(f, "TEMPO-1,60").unwrap();
        let rows = load_buckets_csv(f.path(), ChartKind::PerIssue).unwrap();
        assert_eq!(rows, vec![TimeBucket::new("TEMPO-1", 60)]);
    }
}
