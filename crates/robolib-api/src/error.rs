//! Error types for keyword libraries.

/// Outcome a keyword reports instead of a return value.
///
/// `Failure`, `ContinuableFailure` and `Fatal` produce a failed status,
/// `Skip` produces a skipped status. Anything wrapped in `Unexpected` is
/// passed through untouched and reported as an unexpected failure.
#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    /// The keyword failed.
    #[error("{0}")]
    Failure(String),

    /// The keyword failed, but the test may continue.
    #[error("{0}")]
    ContinuableFailure(String),

    /// The keyword failed and the whole execution should stop.
    #[error("{0}")]
    Fatal(String),

    /// The keyword decided the test should be skipped.
    #[error("{0}")]
    Skip(String),

    /// No keyword with the given name is known to the library.
    #[error("No keyword with name '{0}' found.")]
    UnknownKeyword(String),

    /// Any other error raised while running the keyword.
    #[error("{0}")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl KeywordError {
    /// Create a failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Create a skip.
    pub fn skip(message: impl Into<String>) -> Self {
        Self::Skip(message.into())
    }

    /// Wrap a foreign error as an unexpected failure.
    pub fn unexpected<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Unexpected(Box::new(err))
    }

    /// Whether this error means the keyword was skipped.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    /// Whether the keyword reported its own failure.
    pub fn is_reported_failure(&self) -> bool {
        matches!(
            self,
            Self::Failure(_) | Self::ContinuableFailure(_) | Self::Fatal(_)
        )
    }
}

impl From<String> for KeywordError {
    fn from(msg: String) -> Self {
        Self::Failure(msg)
    }
}

impl From<&str> for KeywordError {
    fn from(msg: &str) -> Self {
        Self::Failure(msg.to_string())
    }
}

/// Result type for keyword execution.
pub type KeywordResult<T> = Result<T, KeywordError>;

/// Invalid argument specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentSpecError {
    #[error("Argument name cannot be empty.")]
    EmptyName,

    #[error("Argument '{0}' is specified multiple times.")]
    DuplicateName(String),

    #[error("Non-default argument '{0}' after default arguments.")]
    NonDefaultAfterDefault(String),

    #[error("Cannot have multiple varargs.")]
    MultipleVarargs,

    #[error("Only last argument can be kwargs.")]
    KwargsNotLast,

    #[error("Only normal arguments accept default values, '{0}' does not.")]
    VariadicDefault(String),

    #[error("Named-only argument separator must be followed by named arguments.")]
    SeparatorWithoutNamedOnly,

    #[error("Invalid argument specification item: {0}")]
    InvalidItem(String),
}

/// Type information that cannot be mapped to the argument specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeSpecError {
    #[error("Type information given to non-existing argument '{0}'.")]
    UnknownArgument(String),

    #[error("Type information given to {given} argument(s) but keyword has only {available} argument(s).")]
    TooManyTypes { given: usize, available: usize },

    #[error("Invalid type information: {0}")]
    InvalidType(String),
}

/// Invalid `path:line` source locator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Source cannot be empty.")]
    Empty,

    #[error("Invalid line number '{0}'.")]
    InvalidLine(String),
}

/// Arguments given to a keyword do not match its specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Keyword expected {expected} argument(s), got {got}.")]
    Count { expected: String, got: usize },

    #[error("Got multiple values for argument '{0}'.")]
    MultipleValues(String),

    #[error("Got unexpected named argument '{0}'.")]
    UnexpectedNamed(String),

    #[error("Keyword requires value for argument(s): {}.", .0.join(", "))]
    Missing(Vec<String>),
}

/// Keyword registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Keyword already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Keyword name cannot be empty.")]
    EmptyName,
}
