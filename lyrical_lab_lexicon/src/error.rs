// Errors raised while loading or building lexicon data: dictionary file
// I/O, JSON and CMUdict parse failures, and unsupported hyphenation locales.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading or building lexicon data.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("dictionary line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
