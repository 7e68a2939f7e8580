use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::record::{MatchResult, TaskRecord};

/// Counts for a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub errors: usize,
    pub output: PathBuf,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl RunSummary {
    /// Errors are counted only as errors, whatever the match result says.
    pub fn tally(records: &[TaskRecord], output: PathBuf, elapsed: Duration) -> Self {
        let mut summary = Self {
            total: records.len(),
            matched: 0,
            unmatched: 0,
            errors: 0,
            output,
            elapsed,
        };
        for record in records {
            if record.error().is_some() {
                summary.errors += 1;
            } else if record.match_result() == MatchResult::Match {
                summary.matched += 1;
            } else {
                summary.unmatched += 1;
            }
        }
        summary
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(f, "- matched:   {}", self.matched)?;
        writeln!(f, "- unmatched: {}", self.unmatched)?;
        writeln!(f, "- errors:    {}", self.errors)?;
        writeln!(f, "- total:     {}", self.total)?;
        writeln!(f, "Report written to {}", self.output.display())?;
        write!(f, "Elapsed: {:.2?}", self.elapsed)
    }
}
