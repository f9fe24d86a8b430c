//! Display formatting shared by every scene.

/// Compact score notation: `2_300_000 → "2.3M"`, `1500 → "1.5K"`, `500 → "500"`.
///
/// Values below a thousand print as-is; fractional ones (averages) keep up to
/// three decimals with trailing zeros trimmed.
pub fn format_score(score: f64) -> String {
    if score >= 1_000_000.0 {
        format!("{:.1}M", score / 1_000_000.0)
    } else if score >= 1_000.0 {
        format!("{:.1}K", score / 1_000.0)
    } else if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        let s = format!("{score:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Relative age of an event given in whole minutes: `"30m ago"`, `"1h ago"`,
/// `"1d ago"`. Negative input (clock skew on the server) reads as `"0m ago"`.
pub fn format_time_ago(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_compact_notation() {
        assert_eq!(format_score(500.0), "500");
        assert_eq!(format_score(1500.0), "1.5K");
        assert_eq!(format_score(2_300_000.0), "2.3M");
        assert_eq!(format_score(1_234_567.0), "1.2M");
        assert_eq!(format_score(1_000.0), "1.0K");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn score_fractional_below_thousand() {
        assert_eq!(format_score(523.25), "523.25");
        assert_eq!(format_score(12.5), "12.5");
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(format_time_ago(30), "30m ago");
        assert_eq!(format_time_ago(59), "59m ago");
        assert_eq!(format_time_ago(60), "1h ago");
        assert_eq!(format_time_ago(90), "1h ago");
        assert_eq!(format_time_ago(1439), "23h ago");
        assert_eq!(format_time_ago(1500), "1d ago");
        assert_eq!(format_time_ago(4320), "3d ago");
    }

    #[test]
    fn time_ago_clamps_negative() {
        assert_eq!(format_time_ago(-5), "0m ago");
    }
}
