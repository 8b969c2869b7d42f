//! Pure helpers behind the time labels and the progress bar.

/// Render seconds as `m:ss`.
///
/// Minutes are unbounded (no hour segment). Anything that is not a finite,
/// non-negative number renders as "0:00".
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Progress bar value in percent. 0 while the duration is unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    current_time / duration * 100.0
}

/// Playhead position for a progress value. None while the duration is unknown.
pub fn seek_target(percent: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !percent.is_finite() {
        return None;
    }
    Some(percent / 100.0 * duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3.0), "0:03");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(599.0), "9:59");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(60.2), "1:00");
    }

    #[test]
    fn long_durations_never_grow_an_hour_segment() {
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(7325.0), "122:05");
    }

    #[test]
    fn non_finite_and_negative_render_as_zero() {
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-4.0), "0:00");
    }

    #[test]
    fn progress_tolerates_unknown_duration() {
        assert_eq!(progress_percent(3.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(3.0, 0.0), 0.0);
        assert_eq!(progress_percent(15.0, 60.0), 25.0);
    }

    #[test]
    fn seek_scales_percent_onto_duration() {
        assert_eq!(seek_target(50.0, 120.0), Some(60.0));
        assert_eq!(seek_target(0.0, 120.0), Some(0.0));
        assert_eq!(seek_target(100.0, 42.5), Some(42.5));
        assert_eq!(seek_target(50.0, f64::NAN), None);
        assert_eq!(seek_target(50.0, 0.0), None);
    }
}
