use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Usage(String),
    Transport(String),
    Api(u16, String),
    MalformedResponse(String),
    BadStatus { token: String },
    InvalidDateFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Usage(g) => write!(f, "{}", g),
            Error::Transport(g) => write!(f, "http get: {}", g),
            Error::Api(status, body) => match summarize(body) {
                Some(summary) => write!(f, "unexpected HTTP status {} ({})", status, summary),
                None => write!(f, "unexpected HTTP status {}", status),
            },
            Error::MalformedResponse(g) => write!(f, "json decode: {}", g),
            Error::BadStatus { token } => {
                write!(f, "bad status (is the token '{}' correct?)", token)
            }
            Error::InvalidDateFormat(date) => {
                write!(f, "parse date {}: expected YYYYMMDD", date)
            }
        }
    }
}

impl std::error::Error for Error {}

const SUMMARY_CHARS: usize = 80;

/// First non-blank line of a response body, cut to `SUMMARY_CHARS`.
fn summarize(body: &str) -> Option<String> {
    let line = body.lines().map(str::trim).find(|l| !l.is_empty())?;
    if line.chars().count() > SUMMARY_CHARS {
        let cut: String = line.chars().take(SUMMARY_CHARS).collect();
        Some(format!("{}...", cut))
    } else {
        Some(line.to_string())
    }
}
