//! Countdown timing state machine
use crate::window::TimeWindow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Remaining time until the end of the promotional window, decomposed into
/// calendar-free units. Recomputed once per second by the consumer; never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub expired: bool,
}

impl CountdownState {
    /// The zero quadruple with the expiry flag raised.
    #[must_use]
    pub const fn expired() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            expired: true,
        }
    }

    /// Decompose the state into display segments for the requested format,
    /// folding dropped coarse units into the next finer displayed unit
    /// (days into hours, hours into minutes).
    #[must_use]
    pub fn segments(&self, format: CountdownFormat) -> Vec<Segment> {
        let total_hours = self.days * 24 + self.hours;
        let total_minutes = total_hours * 60 + self.minutes;
        match format {
            CountdownFormat::DdHhMmSs => vec![
                Segment::new(self.days, TimeUnit::Days),
                Segment::new(self.hours, TimeUnit::Hours),
                Segment::new(self.minutes, TimeUnit::Minutes),
                Segment::new(self.seconds, TimeUnit::Seconds),
            ],
            CountdownFormat::HhMmSs => vec![
                Segment::new(total_hours, TimeUnit::Hours),
                Segment::new(self.minutes, TimeUnit::Minutes),
                Segment::new(self.seconds, TimeUnit::Seconds),
            ],
            CountdownFormat::HhMm => vec![
                Segment::new(total_hours, TimeUnit::Hours),
                Segment::new(self.minutes, TimeUnit::Minutes),
            ],
            CountdownFormat::MmSs => vec![
                Segment::new(total_minutes, TimeUnit::Minutes),
                Segment::new(self.seconds, TimeUnit::Seconds),
            ],
        }
    }
}

/// Output granularity selected by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownFormat {
    #[default]
    #[serde(rename = "dd:hh:mm:ss")]
    DdHhMmSs,
    #[serde(rename = "hh:mm:ss")]
    HhMmSs,
    #[serde(rename = "hh:mm")]
    HhMm,
    #[serde(rename = "mm:ss")]
    MmSs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Days => "DAYS",
            Self::Hours => "HRS",
            Self::Minutes => "MINS",
            Self::Seconds => "SECS",
        }
    }
}

/// One displayed unit of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub value: u64,
    pub unit: TimeUnit,
}

impl Segment {
    #[must_use]
    pub const fn new(value: u64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Zero-padded to at least two digits; wider values are left as-is.
    #[must_use]
    pub fn display_value(&self) -> String {
        format_unit(self.value)
    }
}

/// Zero-pad a unit value to at least two digits.
#[must_use]
pub fn format_unit(value: u64) -> String {
    format!("{value:02}")
}

/// Recompute the countdown at `now`. Returns `None` when the window carries
/// no end bound (nothing to count down towards). A non-positive remaining
/// duration yields the zero quadruple with `expired` set.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn tick(now: NaiveDateTime, window: &TimeWindow) -> Option<CountdownState> {
    let end = window.end?;
    let difference = (end - now).num_milliseconds();
    if difference <= 0 {
        return Some(CountdownState::expired());
    }

    let days = (difference / MILLIS_PER_DAY) as u64;
    let hours = ((difference % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u64;
    let minutes = ((difference % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u64;
    let seconds = ((difference % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u64;

    Some(CountdownState {
        days,
        hours,
        minutes,
        seconds,
        expired: false,
    })
}

/// Whether the consumer should render the countdown at all: a state exists,
/// it has not expired, the promotion has begun, and the host flag is up.
/// Expiry alone gates the end of the window; there is no separate
/// `now > end` check.
#[must_use]
pub fn should_display(
    now: NaiveDateTime,
    window: &TimeWindow,
    state: Option<&CountdownState>,
    show: bool,
) -> bool {
    let Some(state) = state else {
        return false;
    };
    show && !state.expired && window.has_started(now)
}
