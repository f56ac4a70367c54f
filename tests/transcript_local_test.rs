use timescope::{
    build_grounded_prompt, build_transcript_context, extract_time_window, load_transcript,
    ScopedQuestion,
};

fn testdata(name: &str) -> String {
    format!("{}/tests/testdata/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[tokio::test]
async fn test_read_local_deepgram_transcript() {
    let transcript = load_transcript(testdata("deepgram_utterances.json")).await;
    assert!(
        transcript.is_ok(),
        "Failed to load transcript: {:?}",
        transcript.err()
    );
    let transcript = transcript.unwrap();

    assert_eq!(transcript.duration, Some(185.4));
    assert_eq!(transcript.segments.len(), 6);
    assert_eq!(
        transcript.segments[0].text,
        "Welcome everyone, thanks for joining the quarterly review."
    );
}

#[tokio::test]
async fn test_scope_question_to_transcript_slice() {
    let transcript = load_transcript(testdata("deepgram_utterances.json"))
        .await
        .unwrap();

    let question = ScopedQuestion::from_prompt(
        "between 1:20 and 2:10 what did they say about pricing?",
        Some("transcript-1".to_string()),
    );
    assert!(question.uses_transcript());
    let window = question.window().unwrap();

    let context = build_transcript_context(
        &transcript.segments,
        question.start_time,
        question.end_time,
    );
    let lines: Vec<&str> = context.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[00:01:01 - 00:01:32] On pricing, the standard plan moves to twelve dollars in March.",
            "[00:01:33 - 00:02:08] Enterprise customers keep their current rate until renewal.",
        ]
    );

    let prompt = build_grounded_prompt(&question.message, &transcript.segments, Some(window))
        .unwrap();
    assert!(prompt.contains("Time window: 80.0s to 130.0s."));
    assert!(!prompt.contains("see you next month"));
    assert!(!prompt.contains("hiring"));
}

#[tokio::test]
async fn test_read_local_stored_transcript() {
    let transcript = load_transcript(testdata("stored_transcript.json"))
        .await
        .unwrap();
    assert_eq!(transcript.filename.as_deref(), Some("standup.m4a"));
    assert_eq!(transcript.segments.len(), 4);

    let window = extract_time_window("what was said at 01:00:10?").unwrap();
    let context = build_transcript_context(
        &transcript.segments,
        Some(window.start as f64),
        Some(window.end as f64),
    );
    assert_eq!(
        context,
        "[01:00:00 - 01:00:50] Late addition: the outage report is due Friday."
    );
}
