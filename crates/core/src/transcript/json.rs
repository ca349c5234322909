use crate::transcript::{TimeSpan, Transcript, TranscriptError, TranscriptSource, Word};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;
use std::path::PathBuf;

/// Reads a Whisper-style transcription document from disk.
///
/// Expected shape: `segments[].words[]` with `word`/`start`/`end` when the
/// recognizer ran with word timestamps, or segments with only `text`
/// otherwise, plus a top-level `translation` of the whole utterance.
#[derive(Clone, Debug)]
pub struct JsonTranscriptSource {
    path: PathBuf,
}

impl JsonTranscriptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Deserialize)]
struct TranscriptDoc {
    #[serde(default)]
    segments: Vec<SegmentDoc>,
    #[serde(default)]
    translation: String,
}

#[derive(Deserialize)]
struct SegmentDoc {
    #[serde(default)]
    text: String,
    #[serde(default)]
    words: Vec<WordDoc>,
}

#[derive(Deserialize)]
struct WordDoc {
    word: String,
    start: Option<f64>,
    end: Option<f64>,
}

fn parse_doc(doc: TranscriptDoc) -> Result<Transcript, TranscriptError> {
    let mut words = Vec::new();
    for seg in &doc.segments {
        if seg.words.is_empty() {
            // Segment-level text only: whitespace-split, no timing.
            for token in seg.text.split_whitespace() {
                words.push(Word::new(words.len(), token, None)?);
            }
            continue;
        }
        for w in &seg.words {
            if w.word.trim().is_empty() {
                continue;
            }
            let span = match (w.start, w.end) {
                (Some(start), Some(end)) => Some(TimeSpan::new(start, end)?),
                _ => None,
            };
            words.push(Word::new(words.len(), &w.word, span)?);
        }
    }
    tracing::debug!(words = words.len(), "parsed transcript document");
    Ok(Transcript {
        words,
        translation: doc.translation.trim().to_owned(),
    })
}

impl TranscriptSource for JsonTranscriptSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Transcript, TranscriptError>> {
        async move {
            let path = self.path.display().to_string();
            let raw = tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| TranscriptError::Io {
                    path: path.clone(),
                    source,
                })?;
            let doc: TranscriptDoc =
                serde_json::from_str(&raw).map_err(|source| TranscriptError::Parse {
                    path,
                    source,
                })?;
            parse_doc(doc)
        }
        .boxed()
    }
}
