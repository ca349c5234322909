use crate::align::{align_word_pitches, AlignError};
use crate::annotate::{annotate, ThresholdResult};
use crate::config::ThresholdConfig;
use crate::emphasis::{compute_ratios, select_focus};
use crate::pitch::PitchContour;
use crate::transcript::Transcript;
use serde::Serialize;

pub const NO_SPEECH_MESSAGE: &str =
    "No speech detected. Please speak clearly into the microphone.";

#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("{NO_SPEECH_MESSAGE}")]
    NoSpeech,
    #[error(transparent)]
    Align(#[from] AlignError),
}

/// Successful analysis: one result per configured threshold plus the
/// unannotated translation.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub all_results: Vec<ThresholdResult>,
    pub base_translation: String,
}

/// The two output shapes the caller can receive: the full result set, or a
/// single error string. Never a mix.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success(AnalysisReport),
    Failure { error: String },
}

impl From<Result<AnalysisReport, AnalysisError>> for AnalysisResponse {
    fn from(result: Result<AnalysisReport, AnalysisError>) -> Self {
        match result {
            Ok(report) => Self::Success(report),
            Err(e) => Self::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// Runs the full emphasis analysis: word-pitch alignment, adjacent ratios,
/// then the focus decision and annotation at every configured threshold.
///
/// Stateless and deterministic; takes only immutable inputs, so concurrent
/// calls need no synchronization. Retrying on failure cannot change the
/// outcome, so no retries are attempted.
pub fn analyze(
    transcript: &Transcript,
    contour: &dyn PitchContour,
    thresholds: &ThresholdConfig,
) -> Result<AnalysisReport, AnalysisError> {
    if transcript.words.is_empty() {
        return Err(AnalysisError::NoSpeech);
    }

    let pitches = align_word_pitches(&transcript.words, contour)?;
    let ratios = compute_ratios(&pitches);

    let all_results = thresholds
        .values()
        .into_iter()
        .map(|t| {
            let focus = select_focus(&ratios, t);
            annotate(&transcript.words, &pitches, &transcript.translation, t, focus)
        })
        .collect::<Vec<_>>();

    tracing::info!(
        words = transcript.words.len(),
        thresholds = all_results.len(),
        "emphasis analysis complete"
    );

    Ok(AnalysisReport {
        all_results,
        base_translation: transcript.translation.clone(),
    })
}
