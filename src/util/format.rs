//! Formatting and rounding utilities
//! 
//! Percentages shown by the quiz and result screens, and display of the
//! configured delays.

use std::time::Duration;

/// Round `part / whole` to a whole percentage
///
/// Rounds half away from zero, so 2 of 3 gives 67 and 1 of 8 gives 13.
/// A zero `whole` yields 0.
///
/// # Examples
/// ```
/// use quizflow::util::format::round_percent;
///
/// assert_eq!(round_percent(2, 3), 67);
/// assert_eq!(round_percent(3, 3), 100);
/// assert_eq!(round_percent(0, 0), 0);
/// ```
pub fn round_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let ratio = f64::from(part.min(whole)) / f64::from(whole);
    (ratio * 100.0).round() as u8
}

/// Convert a 0.0..=1.0 progress ratio into a gauge percentage
pub fn progress_percent(ratio: f64) -> u16 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u16
}

/// Format a delay the way it is written in the config file
///
/// # Examples
/// ```
/// use quizflow::util::format::format_delay;
/// use std::time::Duration;
///
/// assert_eq!(format_delay(Duration::from_secs(3)), "3s");
/// assert_eq!(format_delay(Duration::from_millis(1500)), "1s 500ms");
/// ```
pub fn format_delay(delay: Duration) -> String {
    humantime::format_duration(delay).to_string()
}
