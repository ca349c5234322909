use crate::pitch::{PitchContour, PitchError};
use crate::transcript::Word;

/// Sampling step inside a word's span, in seconds.
pub const PITCH_SAMPLE_STEP: f64 = 0.01;

#[derive(thiserror::Error, Debug)]
pub enum AlignError {
    #[error(transparent)]
    Pitch(#[from] PitchError),
}

/// Maps each word to one representative pitch value.
///
/// When every word carries timing, the contour is sampled at 10 ms steps
/// over each word's `[start, end)` span. Otherwise the contour's frames are
/// partitioned evenly across the words. The even split ignores real word
/// durations, so with uneven words some pitch lands on a neighbor; this is
/// a known approximation of the fallback, kept as-is.
///
/// A word whose samples are all unvoiced gets 0.0. Output length always
/// equals word count. Pure function of its inputs.
pub fn align_word_pitches(
    words: &[Word],
    contour: &dyn PitchContour,
) -> Result<Vec<f64>, AlignError> {
    if words.is_empty() {
        return Ok(Vec::new());
    }
    if words.iter().all(|w| w.span.is_some()) {
        align_exact(words, contour)
    } else {
        tracing::debug!(words = words.len(), "word timing missing, using frame partition");
        align_partitioned(words.len(), contour)
    }
}

fn align_exact(words: &[Word], contour: &dyn PitchContour) -> Result<Vec<f64>, AlignError> {
    let mut values = Vec::with_capacity(words.len());
    for word in words {
        let span = word.span.as_ref().ok_or_else(|| {
            PitchError::Query(format!("word {} has no span in exact mode", word.index))
        })?;
        let steps = ((span.end - span.start) / PITCH_SAMPLE_STEP).ceil().max(0.0) as usize;
        let mut voiced = MeanAccumulator::default();
        for k in 0..steps {
            let t = span.start + k as f64 * PITCH_SAMPLE_STEP;
            if let Some(hz) = contour.value_at(t)? {
                voiced.push(hz);
            }
        }
        values.push(voiced.mean_or_zero());
    }
    Ok(values)
}

fn align_partitioned(n: usize, contour: &dyn PitchContour) -> Result<Vec<f64>, AlignError> {
    let total = contour.frame_count();
    let frames_per_word = (total / n).max(1);
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        let lo = (i * frames_per_word).min(total);
        let hi = ((i + 1) * frames_per_word).min(total);
        let mut voiced = MeanAccumulator::default();
        for frame in lo..hi {
            let t = contour.time_at_frame(frame)?;
            if let Some(hz) = contour.value_at(t)? {
                voiced.push(hz);
            }
        }
        values.push(voiced.mean_or_zero());
    }
    Ok(values)
}

#[derive(Default)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean_or_zero(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}
