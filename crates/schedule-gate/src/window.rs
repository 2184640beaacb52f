//! Window membership: the time-of-day comparator and the weekly
//! decision table.
//!
//! The weekly evaluator is a three-case split over the relation between
//! start day and end day (`==`, `<`, `>`). Days strictly inside a multi-day
//! span are in-window regardless of time; the boundary days are open from
//! `start_time` (inclusive) and closed at `end_time` (inclusive). This
//! replaces the equivalent but heavier approach of materializing one
//! concrete datetime range per day of the week and testing containment.

use serde::Serialize;

use crate::clock::{ClockTime, Weekday};

// ── Time-of-day comparator ──────────────────────────────────────────────────

/// Whether `current` lies inside the daily span from `start` to `end`.
///
/// Inclusive at both edges. When `start > end` the span wraps past
/// midnight and membership means `current >= start || current <= end`.
/// This function has no notion of weekday; the weekly evaluator reuses it
/// on the days where time matters.
///
/// # Examples
///
/// ```
/// use schedule_gate::{in_time_window, ClockTime};
///
/// let start = ClockTime::new(22, 0, 0).unwrap();
/// let end = ClockTime::new(2, 0, 0).unwrap();
/// // Wrapped span: 22:00 through 02:00 the next morning
/// assert!(in_time_window(ClockTime::new(23, 30, 0).unwrap(), start, end));
/// assert!(in_time_window(ClockTime::new(1, 0, 0).unwrap(), start, end));
/// assert!(!in_time_window(ClockTime::new(12, 0, 0).unwrap(), start, end));
/// ```
pub fn in_time_window(current: ClockTime, start: ClockTime, end: ClockTime) -> bool {
    if start <= end {
        start <= current && current <= end
    } else {
        current >= start || current <= end
    }
}

// ── Weekly window ───────────────────────────────────────────────────────────

/// A recurring weekly interval from (start day, start time) to
/// (end day, end time).
///
/// Any combination of boundaries is representable, including windows that
/// wrap across the week boundary (`start_day > end_day`, e.g. Friday
/// through Monday). A single-day window whose start time exceeds its end
/// time is empty: a same-day window cannot wrap past midnight without
/// changing day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyWindow {
    pub start_day: Weekday,
    pub start_time: ClockTime,
    pub end_day: Weekday,
    pub end_time: ClockTime,
}

impl WeeklyWindow {
    pub fn new(
        start_day: Weekday,
        start_time: ClockTime,
        end_day: Weekday,
        end_time: ClockTime,
    ) -> Self {
        Self {
            start_day,
            start_time,
            end_day,
            end_time,
        }
    }

    /// Decide membership for a weekday/time pair.
    ///
    /// Exhaustive over the three relations between start day and end day:
    ///
    /// - equal: single-day window, non-wrapped time test only
    /// - less: span inside one week; interior days in regardless of time
    /// - greater: span wraps the week boundary; days after the start day
    ///   or before the end day are interior
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_gate::{ClockTime, Weekday, WeeklyWindow};
    ///
    /// // Friday 22:00 through Monday 07:30
    /// let window = WeeklyWindow::new(
    ///     Weekday::Friday,
    ///     ClockTime::new(22, 0, 0).unwrap(),
    ///     Weekday::Monday,
    ///     ClockTime::new(7, 30, 0).unwrap(),
    /// );
    /// assert!(window.contains(Weekday::Saturday, ClockTime::new(12, 0, 0).unwrap()));
    /// assert!(!window.contains(Weekday::Friday, ClockTime::new(21, 0, 0).unwrap()));
    /// ```
    pub fn contains(&self, weekday: Weekday, time: ClockTime) -> bool {
        use std::cmp::Ordering;

        match self.start_day.cmp(&self.end_day) {
            Ordering::Equal => {
                weekday == self.start_day
                    && self.start_time <= self.end_time
                    && in_time_window(time, self.start_time, self.end_time)
            }
            Ordering::Less => {
                (self.start_day < weekday && weekday < self.end_day)
                    || self.opens_on_start_day(weekday, time)
                    || self.closes_on_end_day(weekday, time)
            }
            Ordering::Greater => {
                weekday > self.start_day
                    || weekday < self.end_day
                    || self.opens_on_start_day(weekday, time)
                    || self.closes_on_end_day(weekday, time)
            }
        }
    }

    /// Decide membership for a full instant, projecting weekday and time
    /// of day via the canonical projections.
    pub fn contains_instant(&self, instant: &chrono::NaiveDateTime) -> bool {
        self.contains(
            Weekday::from_instant(instant),
            ClockTime::from_instant(instant),
        )
    }

    /// The window is open from `start_time` onward on its first day.
    fn opens_on_start_day(&self, weekday: Weekday, time: ClockTime) -> bool {
        weekday == self.start_day && time >= self.start_time
    }

    /// The window closes at `end_time` on its last day.
    fn closes_on_end_day(&self, weekday: Weekday, time: ClockTime) -> bool {
        weekday == self.end_day && time <= self.end_time
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> ClockTime {
        ClockTime::new(h, m, s).unwrap()
    }

    fn window(sd: Weekday, st: ClockTime, ed: Weekday, et: ClockTime) -> WeeklyWindow {
        WeeklyWindow::new(sd, st, ed, et)
    }

    // ── in_time_window tests ────────────────────────────────────────────

    #[test]
    fn test_time_window_non_wrapped_inclusive_both_ends() {
        let start = t(8, 0, 0);
        let end = t(18, 0, 0);
        assert!(in_time_window(t(8, 0, 0), start, end));
        assert!(in_time_window(t(12, 0, 0), start, end));
        assert!(in_time_window(t(18, 0, 0), start, end));
        assert!(!in_time_window(t(18, 0, 1), start, end));
        assert!(!in_time_window(t(7, 59, 59), start, end));
    }

    #[test]
    fn test_time_window_wrapped_past_midnight() {
        let start = t(22, 0, 0);
        let end = t(7, 30, 0);
        assert!(in_time_window(t(22, 0, 0), start, end));
        assert!(in_time_window(t(23, 59, 59), start, end));
        assert!(in_time_window(t(0, 0, 0), start, end));
        assert!(in_time_window(t(7, 30, 0), start, end));
        assert!(!in_time_window(t(7, 30, 1), start, end));
        assert!(!in_time_window(t(21, 59, 59), start, end));
        assert!(!in_time_window(t(12, 0, 0), start, end));
    }

    #[test]
    fn test_time_window_degenerate_single_instant() {
        let noon = t(12, 0, 0);
        assert!(in_time_window(noon, noon, noon));
        assert!(!in_time_window(t(12, 0, 1), noon, noon));
    }

    // ── Case A: single-day windows ──────────────────────────────────────

    #[test]
    fn test_single_day_inclusive_boundaries() {
        let w = window(Weekday::Tuesday, t(8, 0, 0), Weekday::Tuesday, t(18, 0, 0));
        assert!(w.contains(Weekday::Tuesday, t(8, 0, 0)));
        assert!(w.contains(Weekday::Tuesday, t(18, 0, 0)));
        assert!(!w.contains(Weekday::Tuesday, t(18, 0, 1)));
        assert!(!w.contains(Weekday::Tuesday, t(7, 59, 59)));
    }

    #[test]
    fn test_single_day_wrong_weekday() {
        let w = window(Weekday::Monday, t(8, 0, 0), Weekday::Monday, t(18, 0, 0));
        assert!(w.contains(Weekday::Monday, t(12, 0, 0)));
        assert!(!w.contains(Weekday::Tuesday, t(12, 0, 0)));
    }

    #[test]
    fn test_single_day_inverted_times_is_empty() {
        // A same-day window cannot wrap past midnight without changing day
        let w = window(Weekday::Monday, t(22, 0, 0), Weekday::Monday, t(7, 30, 0));
        assert!(!w.contains(Weekday::Monday, t(23, 0, 0)));
        assert!(!w.contains(Weekday::Monday, t(6, 0, 0)));
        assert!(!w.contains(Weekday::Tuesday, t(23, 0, 0)));
    }

    // ── Case B: multi-day span inside one week ──────────────────────────

    #[test]
    fn test_multi_day_interior_days_ignore_time() {
        let w = window(Weekday::Monday, t(9, 0, 0), Weekday::Friday, t(17, 0, 0));
        assert!(w.contains(Weekday::Tuesday, t(0, 0, 0)));
        assert!(w.contains(Weekday::Wednesday, t(23, 59, 59)));
        assert!(w.contains(Weekday::Thursday, t(3, 0, 0)));
    }

    #[test]
    fn test_multi_day_boundary_days_use_time() {
        let w = window(Weekday::Monday, t(9, 0, 0), Weekday::Friday, t(17, 0, 0));
        assert!(w.contains(Weekday::Monday, t(9, 0, 0)));
        assert!(!w.contains(Weekday::Monday, t(8, 59, 59)));
        assert!(w.contains(Weekday::Friday, t(17, 0, 0)));
        assert!(!w.contains(Weekday::Friday, t(17, 0, 1)));
    }

    #[test]
    fn test_multi_day_outside_span() {
        let w = window(Weekday::Monday, t(9, 0, 0), Weekday::Friday, t(17, 0, 0));
        assert!(!w.contains(Weekday::Saturday, t(12, 0, 0)));
        assert!(!w.contains(Weekday::Sunday, t(12, 0, 0)));
    }

    // ── Case C: spans wrapping the week boundary ────────────────────────

    #[test]
    fn test_week_wrap_friday_to_monday() {
        let w = window(Weekday::Friday, t(22, 0, 0), Weekday::Monday, t(7, 30, 0));
        // Interior days are in at any time
        assert!(w.contains(Weekday::Saturday, t(0, 0, 0)));
        assert!(w.contains(Weekday::Saturday, t(12, 0, 0)));
        assert!(w.contains(Weekday::Sunday, t(23, 59, 59)));
        // Boundary days
        assert!(w.contains(Weekday::Monday, t(6, 0, 0)));
        assert!(!w.contains(Weekday::Monday, t(8, 0, 0)));
        assert!(!w.contains(Weekday::Friday, t(21, 0, 0)));
        assert!(w.contains(Weekday::Friday, t(23, 0, 0)));
        // Days fully outside
        assert!(!w.contains(Weekday::Wednesday, t(12, 0, 0)));
    }

    #[test]
    fn test_week_wrap_sunday_to_thursday() {
        let w = window(Weekday::Sunday, t(22, 0, 0), Weekday::Thursday, t(7, 30, 0));
        assert!(w.contains(Weekday::Tuesday, t(6, 0, 0)));
        assert!(w.contains(Weekday::Monday, t(12, 0, 0)));
        assert!(w.contains(Weekday::Sunday, t(22, 0, 0)));
        assert!(!w.contains(Weekday::Sunday, t(21, 59, 59)));
        assert!(w.contains(Weekday::Thursday, t(7, 30, 0)));
        assert!(!w.contains(Weekday::Thursday, t(8, 0, 0)));
        assert!(!w.contains(Weekday::Friday, t(8, 0, 0)));
        assert!(!w.contains(Weekday::Saturday, t(12, 0, 0)));
    }

    #[test]
    fn test_week_wrap_boundary_day_adjacent_to_end() {
        // Saturday 10:00 through Tuesday 10:00: Wednesday is just past the
        // close and must be out at any time
        let w = window(Weekday::Saturday, t(10, 0, 0), Weekday::Tuesday, t(10, 0, 0));
        assert!(w.contains(Weekday::Sunday, t(0, 0, 0)));
        assert!(w.contains(Weekday::Monday, t(23, 0, 0)));
        assert!(w.contains(Weekday::Tuesday, t(10, 0, 0)));
        assert!(!w.contains(Weekday::Tuesday, t(10, 0, 1)));
        assert!(!w.contains(Weekday::Wednesday, t(0, 0, 0)));
        assert!(!w.contains(Weekday::Friday, t(12, 0, 0)));
    }

    // ── Instant projection ──────────────────────────────────────────────

    #[test]
    fn test_contains_instant_projects_weekday_and_time() {
        use chrono::NaiveDate;

        let w = window(Weekday::Monday, t(8, 0, 0), Weekday::Monday, t(18, 0, 0));
        // 2024-06-03 was a Monday, 2024-06-04 a Tuesday
        let monday_noon = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let tuesday_noon = NaiveDate::from_ymd_opt(2024, 6, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!(w.contains_instant(&monday_noon));
        assert!(!w.contains_instant(&tuesday_noon));
    }
}
