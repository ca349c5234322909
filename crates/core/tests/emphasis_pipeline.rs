//! End-to-end analysis over JSON fixtures, from collaborator documents to
//! the response envelope.

use focus_translator_core::analysis::{analyze, AnalysisResponse};
use focus_translator_core::config::{ThresholdConfig, NUM_THRESHOLDS};
use focus_translator_core::pitch::SampledPitchContour;
use focus_translator_core::transcript::{JsonTranscriptSource, TranscriptSource};
use std::path::PathBuf;

fn fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("focus-translator-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write fixture");
    path
}

const TRANSCRIPT_TIMED: &str = r#"{
    "segments": [{
        "text": " 나는 사과를 좋아해",
        "words": [
            {"word": " 나는", "start": 0.0, "end": 0.01},
            {"word": " 사과를", "start": 0.01, "end": 0.02},
            {"word": " 좋아해", "start": 0.02, "end": 0.03}
        ]
    }],
    "translation": "I like apples."
}"#;

const CONTOUR: &str = r#"{
    "time_step": 0.01,
    "frames": [120.0, 60.0, 90.0]
}"#;

#[tokio::test]
async fn timed_transcript_analysis_end_to_end() {
    let transcript_path = fixture("timed.json", TRANSCRIPT_TIMED);
    let contour_path = fixture("contour.json", CONTOUR);

    let transcript = JsonTranscriptSource::new(&transcript_path)
        .fetch()
        .await
        .expect("transcript");
    let contour = SampledPitchContour::load(&contour_path).await.expect("contour");

    let report = analyze(&transcript, &contour, &ThresholdConfig::default()).expect("report");

    assert_eq!(report.all_results.len(), NUM_THRESHOLDS);
    assert_eq!(report.base_translation, "I like apples.");

    // Pitches 120/60/90 give ratios 50.0 and 150.0: the drop after the
    // first word is below every threshold in the sweep.
    for result in &report.all_results {
        assert_eq!(result.source_text, "*나는* 사과를 좋아해");
        assert_eq!(result.translation_text, "<i>I like apples.</i> (Focus: 나는)");
        assert_eq!(result.table.len(), 3);
        assert_eq!(result.table[0].pitch, 120.0);
        assert_eq!(result.table[1].pitch, 60.0);
    }

    let thresholds: Vec<f64> = report.all_results.iter().map(|r| r.threshold).collect();
    assert_eq!(
        thresholds,
        vec![73.35, 70.14, 66.94, 63.73, 60.52, 57.31, 54.10]
    );

    let _ = std::fs::remove_file(transcript_path);
    let _ = std::fs::remove_file(contour_path);
}

#[tokio::test]
async fn untimed_transcript_uses_the_frame_partition() {
    let transcript_path = fixture(
        "untimed.json",
        r#"{
            "segments": [{"text": "나는 사과를 좋아해"}],
            "translation": "I like apples."
        }"#,
    );
    let contour_path = fixture("contour-untimed.json", CONTOUR);

    let transcript = JsonTranscriptSource::new(&transcript_path)
        .fetch()
        .await
        .expect("transcript");
    assert!(!transcript.has_full_timing());

    let contour = SampledPitchContour::load(&contour_path).await.expect("contour");
    let report = analyze(&transcript, &contour, &ThresholdConfig::default()).expect("report");

    // 3 frames over 3 words partition into the same per-word pitches as the
    // timed document, so the same focus decision falls out.
    for result in &report.all_results {
        assert_eq!(result.source_text, "*나는* 사과를 좋아해");
    }

    let _ = std::fs::remove_file(transcript_path);
    let _ = std::fs::remove_file(contour_path);
}

#[tokio::test]
async fn response_envelope_matches_the_service_shape() {
    let transcript_path = fixture("envelope.json", TRANSCRIPT_TIMED);
    let contour_path = fixture("contour-envelope.json", CONTOUR);

    let transcript = JsonTranscriptSource::new(&transcript_path)
        .fetch()
        .await
        .expect("transcript");
    let contour = SampledPitchContour::load(&contour_path).await.expect("contour");

    let response = AnalysisResponse::from(analyze(
        &transcript,
        &contour,
        &ThresholdConfig::default(),
    ));
    let json = serde_json::to_value(&response).expect("serialize");

    assert_eq!(json["base_translation"], "I like apples.");
    assert_eq!(
        json["all_results"][0]["table"][0]["emphasis"],
        "Focus"
    );
    assert_eq!(
        json["all_results"][0]["table"][1]["emphasis"],
        "Neutral"
    );

    let _ = std::fs::remove_file(transcript_path);
    let _ = std::fs::remove_file(contour_path);
}
