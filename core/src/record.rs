/// Classification result as written to the `match_result` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MatchResult {
    #[default]
    NoMatch = 0,
    Match = 1,
}

impl MatchResult {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for MatchResult {
    fn from(matched: bool) -> Self {
        if matched {
            Self::Match
        } else {
            Self::NoMatch
        }
    }
}

/// Terminal state of a processed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Classified(MatchResult),
    Failed(String),
}

/// One input URL and what happened to it.
///
/// `url` and `position` are fixed at load time. The outcome is written exactly
/// once by the pool unit that owns the record and read only after the pool
/// has drained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    url: String,
    position: u32,
    outcome: Option<Outcome>,
}

impl TaskRecord {
    /// `position` is the zero-based sheet row the URL was read from.
    pub fn new(url: impl Into<String>, position: u32) -> Self {
        Self {
            url: url.into(),
            position,
            outcome: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// `NoMatch` for failed or unprocessed records.
    pub fn match_result(&self) -> MatchResult {
        match self.outcome {
            Some(Outcome::Classified(m)) => m,
            _ => MatchResult::NoMatch,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(Outcome::Failed(msg)) => Some(msg),
            _ => None,
        }
    }

    pub fn complete(&mut self, outcome: Outcome) {
        debug_assert!(
            self.outcome.is_none(),
            "record at row {} completed twice",
            self.position
        );
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    pub fn record_match(&mut self, result: MatchResult) {
        self.complete(Outcome::Classified(result));
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.complete(Outcome::Failed(message.into()));
    }
}
