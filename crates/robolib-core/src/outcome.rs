//! Keyword execution outcomes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use robolib_api::{ArgumentError, KeywordError};

/// Final status of a keyword run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    Skip,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Skip => "SKIP",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a run did not produce a return value.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error(transparent)]
    Keyword(#[from] KeywordError),
}

/// Result of running one keyword.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordOutcome {
    /// Keyword name
    pub name: String,
    /// Final status
    pub status: Status,
    /// Value returned by a passing keyword
    pub return_value: Value,
    /// Failure or skip message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The test may continue after this failure
    pub continuable: bool,
    /// The whole execution should stop after this failure
    pub fatal: bool,
    /// The failure was not reported by the keyword itself
    pub unexpected: bool,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Run duration in milliseconds
    pub elapsed_ms: u64,
}

impl KeywordOutcome {
    /// Map a run result to an outcome.
    pub fn from_result(
        name: impl Into<String>,
        result: std::result::Result<Value, RunError>,
        started_at: DateTime<Utc>,
        elapsed_ms: u64,
    ) -> Self {
        let mut outcome = Self {
            name: name.into(),
            status: Status::Pass,
            return_value: Value::Null,
            message: None,
            continuable: false,
            fatal: false,
            unexpected: false,
            started_at,
            elapsed_ms,
        };
        let err = match result {
            Ok(value) => {
                outcome.return_value = value;
                return outcome;
            }
            Err(err) => err,
        };

        outcome.status = Status::Fail;
        outcome.message = Some(err.to_string());
        match err {
            RunError::Arguments(_) => {}
            RunError::Keyword(KeywordError::Skip(_)) => outcome.status = Status::Skip,
            RunError::Keyword(KeywordError::ContinuableFailure(_)) => outcome.continuable = true,
            RunError::Keyword(KeywordError::Fatal(_)) => outcome.fatal = true,
            RunError::Keyword(KeywordError::Unexpected(_)) => outcome.unexpected = true,
            RunError::Keyword(KeywordError::Failure(_) | KeywordError::UnknownKeyword(_)) => {}
        }
        outcome
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(result: std::result::Result<Value, RunError>) -> KeywordOutcome {
        KeywordOutcome::from_result("Kw", result, Utc::now(), 0)
    }

    #[test]
    fn test_pass() {
        let o = outcome(Ok(json!(42)));
        assert!(o.passed());
        assert_eq!(o.return_value, json!(42));
        assert!(o.message.is_none());
    }

    #[test]
    fn test_status_mapping() {
        let o = outcome(Err(KeywordError::failure("boom").into()));
        assert_eq!(o.status, Status::Fail);
        assert_eq!(o.message.as_deref(), Some("boom"));
        assert!(!o.unexpected);

        let o = outcome(Err(KeywordError::skip("later").into()));
        assert_eq!(o.status, Status::Skip);

        let o = outcome(Err(KeywordError::ContinuableFailure("soft".into()).into()));
        assert_eq!(o.status, Status::Fail);
        assert!(o.continuable);

        let o = outcome(Err(KeywordError::Fatal("hard".into()).into()));
        assert!(o.fatal);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let o = outcome(Err(KeywordError::unexpected(io).into()));
        assert_eq!(o.status, Status::Fail);
        assert!(o.unexpected);
        assert_eq!(o.message.as_deref(), Some("no such file"));

        let o = outcome(Err(ArgumentError::UnexpectedNamed("x".into()).into()));
        assert_eq!(o.status, Status::Fail);
        assert!(!o.unexpected);
    }

    #[test]
    fn test_outcome_json() {
        let o = outcome(Err(KeywordError::skip("later").into()));
        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["status"], "SKIP");
        assert_eq!(json["message"], "later");
    }
}
