//! Spend milestones and progress evaluation
use serde::{Deserialize, Serialize};

const DEFAULT_MILESTONE_DATA: &str =
    include_str!("../../promobar-web/static/assets/data/milestones.json");

/// Kind of reward unlocked at a milestone. Copy shown to shoppers is a pure
/// function of the kind and whether the reward has been selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewardKind {
    Gift,
    DiscountTag,
    ShippingDiscount,
}

impl RewardKind {
    /// Lowercase phrase for inline copy ("unlock a free gift").
    #[must_use]
    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::Gift => "free gift",
            Self::DiscountTag => "cart discount",
            Self::ShippingDiscount => "shipping discount",
        }
    }

    /// Capitalized heading for a reward row.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Gift => "Free gift",
            Self::DiscountTag => "Cart discount",
            Self::ShippingDiscount => "Shipping discount",
        }
    }

    /// Label on the reward action button, flipping once acted on.
    #[must_use]
    pub const fn action_label(self, selected: bool) -> &'static str {
        match (self, selected) {
            (Self::Gift, false) => "Select gifts",
            (Self::Gift, true) => "Selected gifts",
            (_, false) => "Apply code",
            (_, true) => "Applied code",
        }
    }
}

/// A single spend milestone. Static configuration; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneEntry {
    pub id: String,
    #[serde(default)]
    pub spend_threshold: f64,
    pub reward_kind: RewardKind,
}

/// The ordered milestone list supplied to the engine at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MilestoneCatalog {
    #[serde(default)]
    pub milestones: Vec<MilestoneEntry>,
}

impl MilestoneCatalog {
    /// Load the embedded default catalog. Falls back to an empty catalog if
    /// the embedded data fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_MILESTONE_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// The largest spend threshold in the catalog, if any.
    #[must_use]
    pub fn max_threshold(&self) -> Option<f64> {
        self.milestones
            .iter()
            .map(|entry| entry.spend_threshold)
            .reduce(f64::max)
    }
}

/// Derived display state for a spend amount against a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    /// First entry, in list order, whose threshold exceeds the spend.
    pub next_milestone: Option<MilestoneEntry>,
    /// All entries, in list order, whose threshold is within the spend.
    pub reached: Vec<MilestoneEntry>,
    /// Fill fraction of the progress bar, clamped to [0, 1]. Zero when the
    /// catalog is empty or its thresholds are unusable.
    pub progress_fraction: f64,
    max_threshold: f64,
}

impl ProgressState {
    /// Marker position for an entry along the bar, clamped to [0, 1].
    #[must_use]
    pub fn marker_fraction(&self, entry: &MilestoneEntry) -> f64 {
        if self.max_threshold > 0.0 {
            (entry.spend_threshold / self.max_threshold).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction * 100.0
    }

    #[must_use]
    pub fn all_reached(&self) -> bool {
        self.next_milestone.is_none() && !self.reached.is_empty()
    }
}

/// Evaluate the spend amount against the catalog. Non-finite or negative
/// spend is treated as zero so the display layer never sees `NaN` widths,
/// and an empty catalog resolves to 0% progress with no markers.
#[must_use]
pub fn evaluate(current_spend: f64, catalog: &MilestoneCatalog) -> ProgressState {
    let spend = if current_spend.is_finite() {
        current_spend.max(0.0)
    } else {
        0.0
    };
    let max_threshold = catalog
        .max_threshold()
        .filter(|max| max.is_finite() && *max > 0.0);

    let next_milestone = catalog
        .milestones
        .iter()
        .find(|entry| entry.spend_threshold > spend)
        .cloned();
    let reached = catalog
        .milestones
        .iter()
        .filter(|entry| entry.spend_threshold <= spend)
        .cloned()
        .collect();
    let progress_fraction =
        max_threshold.map_or(0.0, |max| (spend / max).clamp(0.0, 1.0));

    ProgressState {
        next_milestone,
        reached,
        progress_fraction,
        max_threshold: max_threshold.unwrap_or(0.0),
    }
}
