use crate::transcript::Word;
use serde::Serialize;

/// Marker wrapped around the focus word in the source-language text.
pub const FOCUS_MARKER: &str = "*";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum EmphasisLabel {
    Focus,
    Neutral,
}

/// One row of the per-word diagnostic table.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WordReading {
    pub word: String,
    /// Aligned pitch in Hz, rounded to 2 decimal places.
    pub pitch: f64,
    pub emphasis: EmphasisLabel,
}

/// The annotated rendering of one threshold's decision.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ThresholdResult {
    /// Threshold rounded to 2 decimal places for display.
    pub threshold: f64,
    pub source_text: String,
    pub translation_text: String,
    pub table: Vec<WordReading>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders one threshold's result: the source text with the focus word
/// wrapped in markers, the translation display string, and the word table.
pub fn annotate(
    words: &[Word],
    pitches: &[f64],
    translation: &str,
    threshold: f64,
    focus: Option<usize>,
) -> ThresholdResult {
    debug_assert_eq!(words.len(), pitches.len());

    let source_text = words
        .iter()
        .map(|w| match focus {
            Some(f) if f == w.index => format!("{FOCUS_MARKER}{}{FOCUS_MARKER}", w.text),
            _ => w.text.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let translation_text = match focus.and_then(|f| words.get(f)) {
        Some(focus_word) => format!("<i>{translation}</i> (Focus: {})", focus_word.text),
        None => translation.to_owned(),
    };

    let table = words
        .iter()
        .zip(pitches)
        .map(|(w, &pitch)| WordReading {
            word: w.text.clone(),
            pitch: round2(pitch),
            emphasis: if focus == Some(w.index) {
                EmphasisLabel::Focus
            } else {
                EmphasisLabel::Neutral
            },
        })
        .collect();

    ThresholdResult {
        threshold: round2(threshold),
        source_text,
        translation_text,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new(i, t, None).expect("word"))
            .collect()
    }

    #[test]
    fn focus_word_is_wrapped_in_markers() {
        let ws = words(&["나는", "사과를", "좋아해"]);
        let r = annotate(&ws, &[120.0, 60.0, 90.0], "I like apples.", 73.35205304, Some(0));
        assert_eq!(r.source_text, "*나는* 사과를 좋아해");
        assert_eq!(r.translation_text, "<i>I like apples.</i> (Focus: 나는)");
    }

    #[test]
    fn no_focus_leaves_text_unmarked() {
        let ws = words(&["나는", "사과를"]);
        let r = annotate(&ws, &[120.0, 130.0], "I like apples.", 54.10433993, None);
        assert_eq!(r.source_text, "나는 사과를");
        assert_eq!(r.translation_text, "I like apples.");
    }

    #[test]
    fn table_labels_focus_and_neutral_rows() {
        let ws = words(&["a", "b", "c"]);
        let r = annotate(&ws, &[100.0, 50.0, 75.0], "t", 70.0, Some(1));
        let labels: Vec<_> = r.table.iter().map(|row| row.emphasis).collect();
        assert_eq!(
            labels,
            vec![
                EmphasisLabel::Neutral,
                EmphasisLabel::Focus,
                EmphasisLabel::Neutral
            ]
        );
    }

    #[test]
    fn table_pitch_is_rounded_to_two_decimals() {
        let ws = words(&["a"]);
        let r = annotate(&ws, &[123.456789], "t", 73.35205304, None);
        assert_eq!(r.table[0].pitch, 123.46);
        assert_eq!(r.threshold, 73.35);
    }

    #[test]
    fn stripping_markers_round_trips_the_word_sequence() {
        let texts = ["나는", "사과를", "좋아해"];
        let ws = words(&texts);
        let r = annotate(&ws, &[120.0, 60.0, 90.0], "t", 73.35, Some(1));
        let recovered: Vec<String> = r
            .source_text
            .split(' ')
            .map(|w| w.replace(FOCUS_MARKER, ""))
            .collect();
        assert_eq!(recovered, texts);
    }

    #[test]
    fn label_serializes_as_display_word() {
        assert_eq!(
            serde_json::to_string(&EmphasisLabel::Focus).expect("serialize"),
            "\"Focus\""
        );
        assert_eq!(
            serde_json::to_string(&EmphasisLabel::Neutral).expect("serialize"),
            "\"Neutral\""
        );
    }
}
