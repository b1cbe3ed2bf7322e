//! Local wall-clock access shared by the widgets.
use chrono::NaiveDateTime;

/// Current local time as a naive timestamp. The widgets do no timezone
/// arithmetic; host-supplied dates are interpreted in the same local frame.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
