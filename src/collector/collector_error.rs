use std::error::Error;
use std::fmt;

/// Failures that can occur before a fetch is even attempted. Fetch outcomes
/// themselves are not errors; see `FetchOutcome`.
#[derive(Debug)]
pub enum CollectorError {
    Init(String),
    BadUrl(String),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectorError::Init(msg) => write!(f, "HTTP client init error: {msg}"),
            CollectorError::BadUrl(msg) => write!(f, "Bad target URL: {msg}"),
        }
    }
}

impl Error for CollectorError {}
