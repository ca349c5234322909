use crate::pitch::{PitchContour, PitchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// F0 contour sampled on a fixed-step frame grid, the shape a Praat-style
/// pitch analysis produces. Frame values `<= 0` encode unvoiced frames.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SampledPitchContour {
    time_step: f64,
    #[serde(default)]
    first_frame_time: f64,
    frames: Vec<f64>,
}

impl SampledPitchContour {
    pub fn new(
        frames: Vec<f64>,
        time_step: f64,
        first_frame_time: f64,
    ) -> Result<Self, PitchError> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(PitchError::InvalidTimeStep(time_step));
        }
        Ok(Self {
            time_step,
            first_frame_time,
            frames,
        })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, PitchError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PitchError::Io {
                path: display.clone(),
                source,
            })?;
        let contour: Self = serde_json::from_str(&raw).map_err(|source| PitchError::Parse {
            path: display,
            source,
        })?;
        // Re-validate: serde bypasses the constructor.
        Self::new(contour.frames, contour.time_step, contour.first_frame_time)
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    fn frame_index_at(&self, time: f64) -> Option<usize> {
        if !time.is_finite() {
            return None;
        }
        let pos = (time - self.first_frame_time) / self.time_step;
        let idx = pos.round();
        if idx < 0.0 || idx >= self.frames.len() as f64 {
            return None;
        }
        Some(idx as usize)
    }
}

impl PitchContour for SampledPitchContour {
    fn value_at(&self, time: f64) -> Result<Option<f64>, PitchError> {
        let value = self
            .frame_index_at(time)
            .map(|i| self.frames[i])
            .filter(|v| v.is_finite() && *v > 0.0);
        Ok(value)
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn time_at_frame(&self, index: usize) -> Result<f64, PitchError> {
        if index >= self.frames.len() {
            return Err(PitchError::FrameOutOfRange {
                index,
                count: self.frames.len(),
            });
        }
        Ok(self.first_frame_time + index as f64 * self.time_step)
    }
}
