mod sampled;

pub use sampled::SampledPitchContour;

#[derive(thiserror::Error, Debug)]
pub enum PitchError {
    #[error("frame index {index} out of range (frame count {count})")]
    FrameOutOfRange { index: usize, count: usize },
    #[error("pitch contour time step must be > 0, got {0}")]
    InvalidTimeStep(f64),
    #[error("failed to read pitch contour {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse pitch contour {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("pitch query failed: {0}")]
    Query(String),
}

/// External acoustic collaborator contract: a time-queryable F0 contour.
///
/// The core only queries a contour, never mutates it. `value_at` returns
/// `None` for unvoiced or out-of-range times; any `Err` aborts the whole
/// analysis.
pub trait PitchContour: Send + Sync {
    /// Pitch in Hz at time `t` seconds, or `None` when unvoiced or outside
    /// the analyzed range.
    fn value_at(&self, time: f64) -> Result<Option<f64>, PitchError>;

    /// Total number of analysis frames, used by the fallback alignment.
    fn frame_count(&self) -> usize;

    /// Center time of frame `index` in seconds.
    fn time_at_frame(&self, index: usize) -> Result<f64, PitchError>;
}
