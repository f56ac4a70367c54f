use std::env;
use timescope::window::scan_timestamp_tokens;
use timescope::{
    build_transcript_context, extract_time_window, looks_transcript_related, Transcript,
    WindowConfig,
};

fn main() {
    println!("🔍 Time Window Probe");
    println!("====================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: time_window_probe <prompt> [transcript.json]");
        println!("Example: time_window_probe \"what happened at 01:20-02:10\" tests/testdata/deepgram_utterances.json");
        return;
    }
    let prompt = &args[1];

    let tokens = scan_timestamp_tokens(prompt, WindowConfig::default().max_matches);
    println!("💬 Prompt: {}", prompt);
    println!("🕒 Timestamp mentions: {}", tokens.len());
    for token in &tokens {
        println!("   {} -> {}s (at byte {})", token.raw, token.seconds, token.offset);
    }

    let window = extract_time_window(prompt);
    match window {
        Some(w) => println!("🎯 Window: {} ({}s to {}s)", w.label(), w.start, w.end),
        None => println!("🎯 Window: none, whole transcript applies"),
    }

    let Some(path) = args.get(2) else {
        return;
    };

    match scope_transcript(path, prompt, window) {
        Ok(_) => println!("\n✅ Done"),
        Err(e) => println!("\n❌ Failed: {}", e),
    }
}

fn scope_transcript(
    path: &str,
    prompt: &str,
    window: Option<timescope::TimeWindow>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(path)?;
    let transcript = Transcript::from_json_slice(&data)?;

    println!();
    println!("📄 Transcript: {}", path);
    println!("📏 Segments: {}", transcript.segments.len());
    if let Some(duration) = transcript.duration {
        println!("⏱️  Duration: {:.1}s", duration);
    }

    let related = looks_transcript_related(
        prompt,
        window.map(|w| w.start as f64),
        window.map(|w| w.end as f64),
    );
    println!("🔗 Refers to transcript: {}", related);

    let context = build_transcript_context(
        &transcript.segments,
        window.map(|w| w.start as f64),
        window.map(|w| w.end as f64),
    );
    if context.is_empty() {
        println!("⚠️  No transcript content in the requested time range");
    } else {
        println!();
        println!("{}", context);
    }

    Ok(())
}
