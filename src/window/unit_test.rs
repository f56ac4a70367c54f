use crate::window::{
    extract_time_window, extract_time_window_with, scan_timestamp_tokens, TimeWindow,
    WindowConfig,
};
use proptest::prelude::*;

#[cfg(test)]
mod test_helpers {
    use crate::window::scan_timestamp_tokens;

    /// Cut `text` right after its fourth timestamp mention, if it has one.
    pub fn truncate_after_fourth_mention(text: &str) -> &str {
        match scan_timestamp_tokens(text, 4).get(3) {
            Some(fourth) => &text[..fourth.end()],
            None => text,
        }
    }
}

#[test]
fn test_empty_and_plain_text() {
    assert_eq!(extract_time_window(""), None);
    assert_eq!(extract_time_window("   \n\t"), None);
    assert_eq!(extract_time_window("hello"), None);
    assert_eq!(extract_time_window("room 42 at noon"), None);
}

#[test]
fn test_range_with_dash() {
    assert_eq!(
        extract_time_window("what happened at 01:20-02:10"),
        Some(TimeWindow { start: 80, end: 130 })
    );
}

#[test]
fn test_range_with_words() {
    assert_eq!(
        extract_time_window("between 1:20 and 2:10 discuss pricing"),
        Some(TimeWindow { start: 80, end: 130 })
    );
    assert_eq!(
        extract_time_window("from 0:30 to 1:00"),
        Some(TimeWindow { start: 30, end: 60 })
    );
    assert_eq!(
        extract_time_window("from 0:30 UNTIL 1:00:00"),
        Some(TimeWindow { start: 30, end: 3600 })
    );
}

#[test]
fn test_reversed_range_is_normalised() {
    assert_eq!(
        extract_time_window("2:10 - 1:20"),
        Some(TimeWindow { start: 80, end: 130 })
    );
}

#[test]
fn test_single_point_is_padded() {
    assert_eq!(
        extract_time_window("around 01:20 something important"),
        Some(TimeWindow { start: 60, end: 100 })
    );
}

#[test]
fn test_single_point_clamps_at_zero() {
    assert_eq!(
        extract_time_window("at 00:05 then later"),
        Some(TimeWindow { start: 0, end: 25 })
    );
}

#[test]
fn test_two_points_without_connector_use_first() {
    assert_eq!(
        extract_time_window("compare 1:20 with 2:10"),
        Some(TimeWindow { start: 60, end: 100 })
    );
}

#[test]
fn test_only_first_two_matches_form_a_range() {
    // The connector sits between the second and third mention only.
    assert_eq!(
        extract_time_window("1:00, 2:00 - 3:00"),
        Some(TimeWindow { start: 40, end: 80 })
    );
}

#[test]
fn test_scan_stops_after_four_matches() {
    let text = "0:10 0:20 0:30 0:40 0:50 1:00";
    let tokens = scan_timestamp_tokens(text, 4);
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[3].raw, "0:40");
    assert_eq!(tokens[0].offset, 0);
    assert_eq!(tokens[1].offset, 5);

    assert_eq!(
        extract_time_window(text),
        extract_time_window("0:10 0:20 0:30 0:40")
    );
}

#[test]
fn test_bounded_digits() {
    // Three leading digits or a single trailing digit do not form a token.
    assert_eq!(extract_time_window("call 123:45 now"), None);
    assert_eq!(extract_time_window("ratio 1:2"), None);
}

#[test]
fn test_idempotent() {
    let text = "what about 3:15 until 4:00?";
    assert_eq!(extract_time_window(text), extract_time_window(text));
}

#[test]
fn test_strict_config_skips_out_of_range_tokens() {
    let text = "at 1:75 and 2:10";
    assert_eq!(
        extract_time_window(text),
        Some(TimeWindow { start: 130, end: 135 })
    );

    let strict = WindowConfig {
        strict_components: true,
        ..WindowConfig::default()
    };
    assert_eq!(
        extract_time_window_with(text, &strict),
        Some(TimeWindow { start: 110, end: 150 })
    );
}

#[test]
fn test_custom_padding() {
    let config = WindowConfig {
        point_padding_secs: 5,
        ..WindowConfig::default()
    };
    assert_eq!(
        extract_time_window_with("at 1:00", &config),
        Some(TimeWindow { start: 55, end: 65 })
    );
}

#[test]
fn test_config_deserialises_with_defaults() {
    let config: WindowConfig = serde_json::from_str(r#"{"point_padding_secs": 30}"#).unwrap();
    assert_eq!(config.point_padding_secs, 30);
    assert_eq!(config.max_matches, 4);
    assert!(!config.strict_components);
}

#[test]
fn test_window_helpers() {
    let window = TimeWindow::new(130, 80);
    assert_eq!(window, TimeWindow { start: 80, end: 130 });
    assert_eq!(window.duration(), 50);
    assert!(window.contains(80));
    assert!(!window.contains(131));
    assert!(window.overlaps(70.0, 80.0));
    assert!(!window.overlaps(131.5, 140.0));
    assert_eq!(window.label(), "00:01:20-00:02:10");
    assert_eq!(TimeWindow::around(5, 20), TimeWindow { start: 0, end: 25 });
}

fn prompt_with_mentions() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[0-9]{1,2}:[0-9]{2}",
            "[0-9]{1,2}:[0-9]{2}:[0-9]{2}",
            " (to|and|-|until|,|then) ",
            "[a-zA-Z ]{0,6}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_window_end_not_before_start(text in "\\PC*") {
        if let Some(window) = extract_time_window(&text) {
            prop_assert!(window.end >= window.start);
        }
    }

    #[test]
    fn prop_window_end_not_before_start_with_mentions(text in prompt_with_mentions()) {
        if let Some(window) = extract_time_window(&text) {
            prop_assert!(window.end >= window.start);
        }
    }

    #[test]
    fn prop_only_first_four_mentions_matter(text in prompt_with_mentions()) {
        let truncated = test_helpers::truncate_after_fourth_mention(&text);
        prop_assert_eq!(extract_time_window(&text), extract_time_window(truncated));
    }

    #[test]
    fn prop_arbitrary_text_only_first_four_mentions_matter(text in "\\PC*") {
        let truncated = test_helpers::truncate_after_fourth_mention(&text);
        prop_assert_eq!(extract_time_window(&text), extract_time_window(truncated));
    }
}
