//! Promobar Core
//!
//! Platform-agnostic logic for the Promobar storefront widgets: the
//! countdown timing state machine and the spend-milestone progress engine.
//! This crate computes derived display state only; rendering and scheduling
//! live with the consumer.

pub mod countdown;
pub mod milestone;
pub mod selection;
pub mod window;

// Re-export commonly used types
pub use countdown::{
    CountdownFormat, CountdownState, Segment, TimeUnit, format_unit, should_display, tick,
};
pub use milestone::{MilestoneCatalog, MilestoneEntry, ProgressState, RewardKind, evaluate};
pub use selection::SelectionState;
pub use window::{TimeWindow, WindowError};
