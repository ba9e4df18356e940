use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One bar: a label and the working time it stands for, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub label: String,
    pub seconds: u64,
}

impl TimeBucket {
    pub fn new(label: impl Into<String>, seconds: u64) -> Self {
        Self {
            label: label.into(),
            seconds,
        }
    }
}

/// The three charts of a working-time report, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    PerDay,
    PerProject,
    PerIssue,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::PerDay, ChartKind::PerProject, ChartKind::PerIssue];

    /// Heading shown above the chart.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::PerDay => "Working time per day",
            ChartKind::PerProject => "Working time per project",
            ChartKind::PerIssue => "Working time per issues",
        }
    }

    /// `id` of the drawing surface; also the file stem for standalone plots.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartKind::PerDay => "perDay",
            ChartKind::PerProject => "perProject",
            ChartKind::PerIssue => "perIssues",
        }
    }

    /// Name of the label field in raw entries.
    pub fn label_field(&self) -> &'static str {
        match self {
            ChartKind::PerDay => "day",
            ChartKind::PerProject => "project",
            ChartKind::PerIssue => "issue",
        }
    }
}

/// The three aggregated collections a report is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkLog {
    pub per_day: Vec<TimeBucket>,
    pub per_project: Vec<TimeBucket>,
    pub per_issue: Vec<TimeBucket>,
}

impl WorkLog {
    pub fn buckets(&self, kind: ChartKind) -> &[TimeBucket] {
        match kind {
            ChartKind::PerDay => &self.per_day,
            ChartKind::PerProject => &self.per_project,
            ChartKind::PerIssue => &self.per_issue,
        }
    }
}

/// Raw entry as produced by the upstream aggregator, e.g. `{"day": "Mon", "time": "3661"}`.
///
/// Which label field is valid depends on the collection the entry belongs to;
/// [`RawEntry::into_bucket`] checks it against [`ChartKind::label_field`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub day: Option<String>,
    pub project: Option<String>,
    pub issue: Option<String>,
    /// Kind-neutral label, handy for hand-written CSV files.
    pub label: Option<String>,
    #[serde(deserialize_with = "de_seconds_from_string_or_number")]
    pub time: u64,
}

impl RawEntry {
    /// Bucket for a `kind` collection. The label must come from the kind's own
    /// field (or `label`); another kind's field is an error.
    pub fn into_bucket(self, kind: ChartKind) -> Result<TimeBucket> {
        let RawEntry {
            day,
            project,
            issue,
            label,
            time,
        } = self;
        let expected = kind.label_field();
        let mut found = label;
        for (field, value) in [("day", day), ("project", project), ("issue", issue)] {
            let Some(value) = value else { continue };
            if field != expected {
                return Err(ChartError::InvalidInput(format!(
                    "{} entry has `{}`, expected `{}`",
                    kind.container_id(),
                    field,
                    expected
                )));
            }
            if found.is_some() {
                return Err(ChartError::InvalidInput(format!(
                    "{} entry has both `label` and `{}`",
                    kind.container_id(),
                    expected
                )));
            }
            found = Some(value);
        }
        let label = found.ok_or_else(|| {
            ChartError::InvalidInput(format!(
                "{} entry has no `{}` field",
                kind.container_id(),
                expected
            ))
        })?;
        Ok(TimeBucket {
            label,
            seconds: time,
        })
    }
}

/// Wire shape of a full report input; the keys are the page placeholders.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWorkLog {
    #[serde(rename = "perDay", default)]
    pub per_day: Vec<RawEntry>,
    #[serde(rename = "perProject", default)]
    pub per_project: Vec<RawEntry>,
    #[serde(rename = "perIssue", alias = "perIssues", default)]
    pub per_issue: Vec<RawEntry>,
}

impl RawWorkLog {
    pub fn into_worklog(self) -> Result<WorkLog> {
        let conv = |entries: Vec<RawEntry>, kind: ChartKind| -> Result<Vec<TimeBucket>> {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, e)| {
                    e.into_bucket(kind).map_err(|err| match err {
                        ChartError::InvalidInput(msg) => {
                            ChartError::InvalidInput(format!("{msg} (item {i})"))
                        }
                        other => other,
                    })
                })
                .collect()
        };
        Ok(WorkLog {
            per_day: conv(self.per_day, ChartKind::PerDay)?,
            per_project: conv(self.per_project, ChartKind::PerProject)?,
            per_issue: conv(self.per_issue, ChartKind::PerIssue)?,
        })
    }
}

/// Serde helper: whole seconds from a JSON number or a numeric string.
/// Fractions are truncated; negative and non-finite values are rejected.
fn de_seconds_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct SecondsVisitor;

    fn from_f64<E: de::Error>(v: f64) -> std::result::Result<u64, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("time is not a finite number: {}", v)));
        }
        if v < 0.0 {
            return Err(E::custom(format!("negative time: {}", v)));
        }
        Ok(v.trunc() as u64)
    }

    impl<'de> Visitor<'de> for SecondsVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or number of non-negative seconds")
        }

        fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom(format!("negative time: {}", v)));
            }
            Ok(v as u64)
        }

        fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            from_f64(v)
        }

        fn visit_str<E>(self, s: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            let s = s.trim();
            if let Ok(n) = s.parse::<u64>() {
                return Ok(n);
            }
            let v = s
                .parse::<f64>()
                .map_err(|_| E::custom(format!("time is not numeric: {:?}", s)))?;
            from_f64(v)
        }
    }

    deserializer.deserialize_any(SecondsVisitor)
}

/// Check that a sequence can be charted: non-empty, labels unique.
pub fn validate_buckets(buckets: &[TimeBucket]) -> Result<()> {
    if buckets.is_empty() {
        return Err(ChartError::InvalidInput("no buckets to chart".into()));
    }
    let mut seen = HashSet::with_capacity(buckets.len());
    for b in buckets {
        if !seen.insert(b.label.as_str()) {
            return Err(ChartError::InvalidInput(format!(
                "duplicate label {:?}",
                b.label
            )));
        }
    }
    Ok(())
}
