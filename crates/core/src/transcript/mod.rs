mod json;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use json::JsonTranscriptSource;

/// Word interval in seconds, `start <= end`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    pub fn new(start: f64, end: f64) -> Result<Self, TranscriptError> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 || end < start {
            return Err(TranscriptError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// One recognized word. `span` is `None` when the recognizer only produced
/// segment-level text without word timing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Word {
    /// 0-based utterance position.
    pub index: usize,
    pub text: String,
    pub span: Option<TimeSpan>,
}

impl Word {
    pub fn new(index: usize, text: &str, span: Option<TimeSpan>) -> Result<Self, TranscriptError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TranscriptError::EmptyWord { index });
        }
        Ok(Self {
            index,
            text: trimmed.to_owned(),
            span,
        })
    }
}

/// Output of the external ASR/translation collaborator: the recognized words
/// in utterance order plus one translation string for the whole utterance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub words: Vec<Word>,
    pub translation: String,
}

impl Transcript {
    /// Whether every word carries timing, i.e. exact pitch alignment is
    /// possible. A single untimed word forces the fallback partition.
    pub fn has_full_timing(&self) -> bool {
        self.words.iter().all(|w| w.span.is_some())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("word {index} is empty after trimming")]
    EmptyWord { index: usize },
    #[error("invalid word span [{start}, {end}]")]
    InvalidSpan { start: f64, end: f64 },
    #[error("failed to read transcript {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse transcript {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// External ASR/translation collaborator contract.
pub trait TranscriptSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<Transcript, TranscriptError>>;
}
