/// Parse a colon-delimited timestamp (`m:ss` or `h:mm:ss`) into whole seconds.
///
/// Components are not range checked, so `"99:99"` yields `6039`. Returns
/// `None` for anything that is not a timestamp, including values that would
/// overflow.
pub fn parse_timestamp(text: &str) -> Option<u64> {
    let components = parse_components(text)?;
    combine(&components)
}

/// Like [`parse_timestamp`], but every component after the leading one must
/// be `0..=59`. The leading component stays unbounded (`"90:00"` is fine).
pub fn parse_timestamp_strict(text: &str) -> Option<u64> {
    let components = parse_components(text)?;
    if components.iter().skip(1).any(|&c| c > 59) {
        return None;
    }
    combine(&components)
}

fn parse_components(text: &str) -> Option<Vec<u64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    parts
        .iter()
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u64>().ok()
        })
        .collect()
}

fn combine(components: &[u64]) -> Option<u64> {
    match *components {
        [minutes, seconds] => minutes.checked_mul(60)?.checked_add(seconds),
        [hours, minutes, seconds] => hours
            .checked_mul(3600)?
            .checked_add(minutes.checked_mul(60)?)?
            .checked_add(seconds),
        _ => None,
    }
}
