//! Soft-failing predicate wrappers over raw rule-condition fields.
//!
//! Rule conditions arrive with sentinel defaults: `-1` for an unset day
//! index and `"-1:-1:-1"` (or any value containing `"-1"`) for an unset
//! time. An unset or malformed window never blocks evaluation by erroring —
//! it resolves to "condition not met" and the `not_operator` then applies
//! exactly as it would to an evaluated result. The [`Verdict`] tag records
//! which path produced the boolean, so callers and tests can tell an
//! evaluated result from a defaulted one.
//!
//! The instant is always caller-supplied (no system clock access), already
//! expressed in the same civil-time frame as the window boundaries.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::{ClockTime, Weekday};
use crate::error::{GateError, Result};
use crate::window::{in_time_window, WeeklyWindow};

/// Sentinel for an unset day-of-week field.
const UNSET_DAY: i64 = -1;
/// Fragment marking an unset time field.
const UNSET_TIME_MARK: &str = "-1";

fn unset_day() -> i64 {
    UNSET_DAY
}

fn unset_time() -> String {
    "-1:-1:-1".to_string()
}

// ── Raw condition terms ─────────────────────────────────────────────────────

/// Raw weekly-window condition fields as they arrive from the surrounding
/// rule structure. Missing fields deserialize to the unset sentinels.
///
/// Day indices follow the crate convention (Monday = 0 … Sunday = 6);
/// times are 24-hour `HH:MM:SS` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTerms {
    #[serde(default = "unset_day")]
    pub start_day_of_week: i64,
    #[serde(default = "unset_time")]
    pub start_time: String,
    #[serde(default = "unset_day")]
    pub end_day_of_week: i64,
    #[serde(default = "unset_time")]
    pub end_time: String,
    #[serde(default)]
    pub not_operator: bool,
}

/// Raw time-of-day condition fields — the degenerate window with no
/// weekday dimension, sharing the daily comparator (wrapped branch
/// included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTerms {
    #[serde(default = "unset_time")]
    pub start: String,
    #[serde(default = "unset_time")]
    pub end: String,
    #[serde(default)]
    pub not_operator: bool,
}

// ── Verdict ─────────────────────────────────────────────────────────────────

/// How a [`Verdict`] boolean was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The window was well-formed and membership was computed.
    Evaluated,
    /// The window was unset or malformed; the result defaulted to
    /// "condition not met" (before negation).
    ConfigDefaulted(GateError),
}

/// The final predicate result plus the path that produced it.
///
/// `value` is the externally visible boolean; `outcome` distinguishes an
/// evaluated membership test from the soft-failure default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub value: bool,
    pub outcome: Outcome,
}

impl Verdict {
    fn evaluated(negate: bool, result: bool) -> Self {
        Verdict {
            value: negate ^ result,
            outcome: Outcome::Evaluated,
        }
    }

    fn defaulted(negate: bool, err: GateError) -> Self {
        // Soft failure reads as "condition not met", then negates like any
        // other result: false unless negated.
        Verdict {
            value: negate ^ false,
            outcome: Outcome::ConfigDefaulted(err),
        }
    }

    /// Whether this verdict came from the soft-failure path.
    pub fn is_defaulted(&self) -> bool {
        matches!(self.outcome, Outcome::ConfigDefaulted(_))
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> bool {
        verdict.value
    }
}

// ── Evaluation ──────────────────────────────────────────────────────────────

/// Evaluate the weekly day-and-time-range predicate at `instant`.
///
/// # Arguments
///
/// * `terms` — Raw condition fields, possibly holding unset sentinels
/// * `instant` — The instant to test, in the window's civil-time frame
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_gate::{evaluate_weekly, WeeklyTerms};
///
/// // Friday 22:00 through Monday 07:30
/// let terms = WeeklyTerms {
///     start_day_of_week: 4,
///     start_time: "22:00:00".into(),
///     end_day_of_week: 0,
///     end_time: "07:30:00".into(),
///     not_operator: false,
/// };
/// // 2024-06-08 was a Saturday
/// let saturday_noon = NaiveDate::from_ymd_opt(2024, 6, 8)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// assert!(evaluate_weekly(&terms, saturday_noon).value);
/// ```
pub fn evaluate_weekly(terms: &WeeklyTerms, instant: NaiveDateTime) -> Verdict {
    let negate = terms.not_operator;
    match build_window(terms) {
        Ok(window) => Verdict::evaluated(negate, window.contains_instant(&instant)),
        Err(err) => Verdict::defaulted(negate, err),
    }
}

/// Evaluate the plain time-of-day-range predicate at `instant`.
///
/// Weekday is ignored; a `start > end` range wraps past midnight. The
/// soft-failure policy matches [`evaluate_weekly`].
pub fn evaluate_daily(terms: &DailyTerms, instant: NaiveDateTime) -> Verdict {
    let negate = terms.not_operator;
    let span = parse_time(&terms.start, "start")
        .and_then(|start| Ok((start, parse_time(&terms.end, "end")?)));
    match span {
        Ok((start, end)) => {
            let current = ClockTime::from_instant(&instant);
            Verdict::evaluated(negate, in_time_window(current, start, end))
        }
        Err(err) => Verdict::defaulted(negate, err),
    }
}

/// Validate the raw fields into a [`WeeklyWindow`].
///
/// # Errors
///
/// Returns [`GateError::UnsetField`] for sentinel values and
/// [`GateError::InvalidWeekday`] / [`GateError::InvalidClockTime`] for
/// out-of-range or unparseable ones. The callers above map every variant
/// to the soft default.
fn build_window(terms: &WeeklyTerms) -> Result<WeeklyWindow> {
    let start_day = parse_day(terms.start_day_of_week, "start_day_of_week")?;
    let end_day = parse_day(terms.end_day_of_week, "end_day_of_week")?;
    let start_time = parse_time(&terms.start_time, "start_time")?;
    let end_time = parse_time(&terms.end_time, "end_time")?;
    Ok(WeeklyWindow::new(start_day, start_time, end_day, end_time))
}

fn parse_day(raw: i64, field: &'static str) -> Result<Weekday> {
    if raw == UNSET_DAY {
        return Err(GateError::UnsetField(field));
    }
    Weekday::from_index(raw)
}

fn parse_time(raw: &str, field: &'static str) -> Result<ClockTime> {
    if raw.contains(UNSET_TIME_MARK) {
        return Err(GateError::UnsetField(field));
    }
    raw.parse()
}

// ── Tests ───────────────────────────────────────────────────────────────────
