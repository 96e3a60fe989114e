//! Common helper functions for output formatting.

use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a score with one decimal place.
pub fn format_score(score: f64) -> String {
    if score.is_nan() {
        "-".to_string()
    } else {
        format!("{score:.1}")
    }
}

/// Formats a player range like `2-4`, or `2` when both ends agree.
pub fn format_range(min: u32, max: u32) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

/// Formats a rating for display, highlighting strong ratings.
pub fn format_rating(rating: f64, use_colors: bool) -> String {
    let label = format_score(rating);
    if !use_colors {
        return label;
    }
    if rating >= 8.0 {
        label.green().to_string()
    } else if rating < 5.0 {
        label.dimmed().to_string()
    } else {
        label
    }
}

/// Formats a section header.
pub fn format_header(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}
