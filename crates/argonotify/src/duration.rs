/// Shown in the Duration field when the caller supplied no duration at all.
pub const UNKNOWN: &str = "N/A";

const DAY: u64 = 86_400;
const HOUR: u64 = 3_600;
const MINUTE: u64 = 60;

/// Render a seconds count as a descending-unit human string, e.g.
/// `3725` → `"1 hours, 2 minutes, 5 seconds"`.
///
/// Fractional seconds are truncated. Rendering starts at the largest
/// non-zero unit and always includes every smaller unit down to seconds;
/// unit labels stay plural regardless of count.
pub fn humanize(secs: f64) -> String {
    let mut rest = secs.max(0.0) as u64;

    let days = rest / DAY;
    rest -= days * DAY;
    let hours = rest / HOUR;
    rest -= hours * HOUR;
    let minutes = rest / MINUTE;
    let seconds = rest - minutes * MINUTE;

    if days > 0 {
        return format!("{days} days, {hours} hours, {minutes} minutes, {seconds} seconds");
    }
    if hours > 0 {
        return format!("{hours} hours, {minutes} minutes, {seconds} seconds");
    }
    if minutes > 0 {
        return format!("{minutes} minutes, {seconds} seconds");
    }
    format!("{seconds} seconds")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_single_unit() {
        assert_eq!(humanize(0.0), "0 seconds");
    }

    #[test]
    fn seconds_only() {
        assert_eq!(humanize(59.0), "59 seconds");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(humanize(59.9), "59 seconds");
    }

    #[test]
    fn hours_pull_in_all_smaller_units() {
        assert_eq!(humanize(3725.0), "1 hours, 2 minutes, 5 seconds");
    }

    #[test]
    fn exact_day_renders_four_components() {
        assert_eq!(humanize(86_400.0), "1 days, 0 hours, 0 minutes, 0 seconds");
    }

    #[test]
    fn days_present_means_four_components() {
        assert_eq!(humanize(90_061.0), "1 days, 1 hours, 1 minutes, 1 seconds");
        let rendered = humanize(1_000_000.0);
        assert_eq!(rendered.matches(',').count(), 3);
        assert_eq!(rendered, "11 days, 13 hours, 46 minutes, 40 seconds");
    }

    #[test]
    fn labels_stay_plural_at_one() {
        assert_eq!(humanize(61.0), "1 minutes, 1 seconds");
    }
}
