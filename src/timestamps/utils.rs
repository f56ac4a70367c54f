/// Format a second offset as `HH:MM:SS`
pub fn format_hms(seconds: f64) -> String {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return "00:00:00".to_string();
    }

    let total_seconds = seconds as u64;
    let secs = total_seconds % 60;
    let minutes = (total_seconds % 3600) / 60;
    let hours = total_seconds / 3600;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
