use std::{fmt, sync::Arc};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    memory::Memory,
    response::{
        CalculationResponse, ErrorResponse, MemoryResponse, MessageResponse, VALUE_REQUIRED,
        calculate,
    },
};

const STORED: &str = "Value stored in memory";
const CLEARED: &str = "Memory cleared";

/// One line of session input, classified.
///
/// The memory commands cannot collide with expressions: `m` is not an
/// accepted expression character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Evaluate the (trimmed) line as an expression.
    Evaluate(&'a str),
    /// `ms [VALUE]`: store VALUE, or the last result when it is omitted.
    Store(Option<&'a str>),
    /// `mr`: recall memory.
    Recall,
    /// `mc`: clear memory.
    Clear,
}

impl<'a> Command<'a> {
    /// Classifies a line. Command words are case-insensitive.
    ///
    /// # Example
    /// ```
    /// use exprcalc::session::Command;
    ///
    /// assert_eq!(Command::parse("ms 2.5"), Command::Store(Some("2.5")));
    /// assert_eq!(Command::parse(" MR "), Command::Recall);
    /// assert_eq!(Command::parse("1 + 2"), Command::Evaluate("1 + 2"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let (word, rest) = trimmed.split_once(char::is_whitespace)
                                  .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "ms" => Self::Store((!rest.is_empty()).then_some(rest)),
            "mr" if rest.is_empty() => Self::Recall,
            "mc" if rest.is_empty() => Self::Clear,
            _ => Self::Evaluate(trimmed),
        }
    }
}

/// The response produced for one line, in the shape of the JSON bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Calculated(CalculationResponse),
    Recalled(MemoryResponse),
    Acknowledged(MessageResponse),
    Failed(ErrorResponse),
}

impl Reply {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Serializes the reply as its JSON body.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calculated(calculation) => write!(f, "{}", calculation.result),
            Self::Recalled(MemoryResponse { value: Some(value), .. }) => write!(f, "{value}"),
            Self::Recalled(MemoryResponse { value: None, .. }) => write!(f, "memory is empty"),
            Self::Acknowledged(ack) => write!(f, "{}", ack.message),
            Self::Failed(err) => write!(f, "Error: {}", err.message),
        }
    }
}

/// An interactive calculator session.
///
/// A session evaluates lines one at a time, remembers the last successful
/// result and drives a [`Memory`] it shares by handle. Failures never end the
/// session; they are returned as [`Reply::Failed`].
///
/// ## Example
/// ```
/// use exprcalc::session::Session;
///
/// let mut session = Session::new(6);
///
/// assert_eq!(session.execute("2+3*4").to_string(), "14");
/// assert_eq!(session.execute("ms").to_string(), "Value stored in memory");
/// assert_eq!(session.execute("mr").to_string(), "14");
/// assert_eq!(session.execute("mc").to_string(), "Memory cleared");
/// assert_eq!(session.execute("mr").to_string(), "memory is empty");
/// ```
#[derive(Debug)]
pub struct Session {
    memory:      Arc<Memory>,
    precision:   usize,
    last_result: Option<f64>,
}

impl Session {
    /// Creates a session with its own empty memory.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self::with_memory(Arc::new(Memory::new()), precision)
    }

    /// Creates a session driving an existing, possibly shared, memory.
    #[must_use]
    pub const fn with_memory(memory: Arc<Memory>, precision: usize) -> Self {
        Self { memory,
               precision,
               last_result: None }
    }

    #[must_use]
    pub const fn memory(&self) -> &Arc<Memory> {
        &self.memory
    }

    /// The value of the last expression that evaluated successfully.
    #[must_use]
    pub const fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Executes one line of input and returns the reply for it.
    pub fn execute(&mut self, line: &str) -> Reply {
        let command = Command::parse(line);
        debug!(?command, "executing");

        match command {
            Command::Evaluate(expression) => match calculate(expression, self.precision) {
                Ok(calculation) => {
                    self.last_result = Some(calculation.result);
                    Reply::Calculated(calculation)
                },
                Err(err) => {
                    info!(expression, message = %err.message, "evaluation failed");
                    Reply::Failed(err)
                },
            },
            Command::Store(Some(text)) => match self.memory.store_str(text) {
                Ok(_) => Reply::Acknowledged(MessageResponse::new(STORED)),
                Err(err) => Reply::Failed(err.into()),
            },
            Command::Store(None) => match self.last_result.map(|value| self.memory.store(value)) {
                Some(Ok(())) => Reply::Acknowledged(MessageResponse::new(STORED)),
                Some(Err(err)) => Reply::Failed(err.into()),
                None => Reply::Failed(ErrorResponse::new(VALUE_REQUIRED)),
            },
            Command::Recall => Reply::Recalled(MemoryResponse::new(self.memory.recall())),
            Command::Clear => {
                self.memory.clear();
                Reply::Acknowledged(MessageResponse::new(CLEARED))
            },
        }
    }
}
