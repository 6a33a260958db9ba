use crate::parse;
use reqwest::StatusCode;
use std::fmt::{self, Display, Formatter};
use url::Url;

/// Why a week could not be extracted or stored.
#[derive(Debug)]
pub enum Error {
    Parse(parse::Error),
    /// The portal answered with a non-success status.
    Status { url: Url, status: StatusCode },
    Request(reqwest::Error),
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
}

impl Error {
    /// `self` followed by every underlying cause, separated by `: `.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }

    pub fn config_error(msg: &str) -> Self {
        Self::Config(msg.to_string())
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(_) => write!(f, "Parse error"),
            Self::Status { url, status } => write!(f, "Unable to download {url}: {status}"),
            Self::Request(_) => write!(f, "Request error"),
            Self::Io(_) => write!(f, "IO error"),
            Self::Json(_) => write!(f, "Json error"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Request(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status { .. } | Self::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
