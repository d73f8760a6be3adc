/// Program completion as a percentage of its length in weeks.
///
/// Not clamped: a lifter who keeps logging past the last week sees values
/// above 100. A zero-week program reports 0.
pub fn week_progress_percent(current_week: u32, total_weeks: u32) -> f64 {
    if total_weeks == 0 {
        return 0.0;
    }
    f64::from(current_week) / f64::from(total_weeks) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_through_twelve_weeks() {
        assert_eq!(week_progress_percent(6, 12), 50.0);
    }

    #[test]
    fn first_week_is_one_twelfth() {
        let pct = week_progress_percent(1, 12);
        assert!((pct - 8.333_333).abs() < 1e-4);
    }

    #[test]
    fn past_the_last_week_exceeds_one_hundred() {
        let pct = week_progress_percent(13, 12);
        assert!((pct - 108.333_333).abs() < 1e-4);
    }

    #[test]
    fn zero_week_program_reports_zero() {
        assert_eq!(week_progress_percent(5, 0), 0.0);
    }
}
