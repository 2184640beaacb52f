//! # schedule-gate
//!
//! Weekly schedule window predicates for rule conditions.
//!
//! Given a caller-supplied instant and a recurring weekly window (start
//! weekday + start time, end weekday + end time), schedule-gate decides
//! whether the instant falls inside the window, with an optional `not`
//! modifier. Same-day windows, windows that cross midnight, windows
//! spanning several weekdays, and windows that wrap across the week
//! boundary are all handled by one three-case decision table rather than
//! by materializing concrete datetime ranges for the week.
//!
//! All functions take explicit inputs (no system clock access) — the
//! caller provides the instant, keeping evaluation deterministic and
//! testable with literal timestamps. Evaluation is stateless and
//! side-effect-free; concurrent callers need no locking.
//!
//! Weekday convention: **Monday = 0 … Sunday = 6**, applied end-to-end.
//!
//! ## Modules
//!
//! - [`clock`] — weekday and clock-time value types
//! - [`window`] — the time-of-day comparator and weekly membership table
//! - [`predicate`] — soft-failing wrappers over raw rule-condition fields
//! - [`error`] — error types

pub mod clock;
pub mod error;
pub mod predicate;
pub mod window;

pub use clock::{ClockTime, Weekday};
pub use error::GateError;
pub use predicate::{
    evaluate_daily, evaluate_weekly, DailyTerms, Outcome, Verdict, WeeklyTerms,
};
pub use window::{in_time_window, WeeklyWindow};
