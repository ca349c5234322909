use serde::Serialize;

/// Ratio recorded when either endpoint of a pair is unvoiced. Neutral under
/// the configured thresholds (all < 100), but it is compared against them
/// like any measured ratio, never special-cased.
pub const SENTINEL_RATIO: f64 = 100.0;

/// Pitch ratio between one word and the next, as a percentage.
///
/// `sentinel` records unvoiced provenance: a measured ratio of exactly
/// 100.0 and the unvoiced fallback carry the same `value` but differ here.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct PitchRatio {
    pub value: f64,
    pub sentinel: bool,
}

impl PitchRatio {
    fn measured(value: f64) -> Self {
        Self {
            value,
            sentinel: false,
        }
    }

    fn unvoiced() -> Self {
        Self {
            value: SENTINEL_RATIO,
            sentinel: true,
        }
    }
}

/// Adjacent-word pitch ratios: `(next / current) × 100` when both values are
/// voiced, the sentinel otherwise. Output length is `n - 1` for `n` words
/// (empty for a single word).
pub fn compute_ratios(pitches: &[f64]) -> Vec<PitchRatio> {
    pitches
        .windows(2)
        .map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            if current > 0.0 && next > 0.0 {
                PitchRatio::measured(next / current * 100.0)
            } else {
                PitchRatio::unvoiced()
            }
        })
        .collect()
}

/// Selects the focus-word index for one threshold.
///
/// A ratio strictly below the threshold marks a disproportionate pitch drop
/// after its word (post-focal lowering). Among the candidates the minimum
/// ratio wins; ties go to the lowest index. `None` when no ratio qualifies.
pub fn select_focus(ratios: &[PitchRatio], threshold: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, ratio) in ratios.iter().enumerate() {
        if ratio.value >= threshold {
            continue;
        }
        match best {
            Some((_, value)) if value <= ratio.value => {}
            _ => best = Some((i, ratio.value)),
        }
    }
    best.map(|(i, _)| i)
}
