//! Keyword source locators.
//!
//! Libraries report where a keyword is implemented as `path:lineno`, as just
//! `path` when the line is not known, or as `:lineno` when the keyword lives
//! in the same file as the library itself.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Source as returned by a library, `path:lineno`.
pub type Source = String;

/// Parsed source locator. At least one of the fields is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceLocator {
    pub path: Option<PathBuf>,
    pub line: Option<u32>,
}

impl SourceLocator {
    pub fn new(path: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            path: Some(path.into()),
            line: Some(line),
        }
    }

    /// Parse a `path:lineno`, `path` or `:lineno` locator.
    ///
    /// The text after the last colon is a line number only when it is a
    /// non-empty run of digits. Anything else, including nothing at all, is
    /// part of the path, so Windows drive letters stay in the path.
    pub fn parse(source: &str) -> Result<Self, SourceError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(SourceError::Empty);
        }
        let (path, line) = match source.rsplit_once(':') {
            Some((path, line)) if !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()) => {
                match line.parse::<u32>() {
                    Ok(n) if n > 0 => (path, Some(n)),
                    _ => return Err(SourceError::InvalidLine(line.to_string())),
                }
            }
            _ => (source, None),
        };
        Ok(Self {
            path: (!path.is_empty()).then(|| PathBuf::from(path)),
            line,
        })
    }

    /// Fill in a missing path with the library's own source path.
    pub fn with_library_source(mut self, library_source: Option<&Path>) -> Self {
        if self.path.is_none() {
            self.path = library_source.map(Path::to_path_buf);
        }
        self
    }
}

impl FromStr for SourceLocator {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SourceLocator {
    type Error = SourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SourceLocator> for String {
    fn from(locator: SourceLocator) -> Self {
        locator.to_string()
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}", path.display())?;
        }
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        Ok(())
    }
}
