//! Promotional time window parsing
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Errors raised while assembling a [`TimeWindow`] from host-supplied strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("malformed date: {0}")]
    MalformedDate(String),
    #[error("malformed time: {0}")]
    MalformedTime(String),
    #[error("window ends before it starts")]
    InvertedBounds,
}

/// The active promotional period. Either bound may be absent; an absent end
/// bound means there is no countdown to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeWindow {
    /// Combine `YYYY-MM-DD` dates with `HH:MM` (or `HH:MM:SS`) times into a
    /// window. A bound is only formed when both its date and time are
    /// supplied; a bound with one half missing is treated as absent. A bound
    /// whose strings are present but unparseable is an error so callers can
    /// log it before suppressing the widget.
    ///
    /// # Errors
    ///
    /// Returns an error for unparseable dates or times, or when both bounds
    /// are present and the start falls after the end.
    pub fn from_parts(
        start_date: Option<&str>,
        start_time: Option<&str>,
        end_date: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<Self, WindowError> {
        let window = Self {
            start: parse_bound(start_date, start_time)?,
            end: parse_bound(end_date, end_time)?,
        };
        if let (Some(start), Some(end)) = (window.start, window.end)
            && start > end
        {
            return Err(WindowError::InvertedBounds);
        }
        Ok(window)
    }

    /// Whether the promotion has begun at `now`. Windows without a start
    /// bound are considered already under way.
    #[must_use]
    pub fn has_started(&self, now: NaiveDateTime) -> bool {
        self.start.is_none_or(|start| now >= start)
    }
}

fn parse_bound(
    date: Option<&str>,
    time: Option<&str>,
) -> Result<Option<NaiveDateTime>, WindowError> {
    let (Some(date), Some(time)) = (date, time) else {
        return Ok(None);
    };
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| WindowError::MalformedDate(date.to_string()))?;
    Ok(Some(date.and_time(parse_time(time)?)))
}

fn parse_time(raw: &str) -> Result<NaiveTime, WindowError> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| WindowError::MalformedTime(raw.to_string()))
}
