use crate::constants::{GOLD_THRESHOLD, SILVER_THRESHOLD};

/// Membership tier derived from a points balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Gold,
    Silver,
    Bronze,
}

impl Level {
    /// Assign a tier from a points balance
    ///
    /// Thresholds are inclusive on the lower bound of each tier, so a
    /// balance sitting exactly on a threshold lands in the higher tier.
    /// Total over f64: negative balances fall into the base tier.
    pub fn for_points(points: f64) -> Self {
        if points >= GOLD_THRESHOLD {
            Level::Gold
        } else if points >= SILVER_THRESHOLD {
            Level::Silver
        } else {
            Level::Bronze
        }
    }

    /// The label persisted in the store and returned to clients
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Gold => "Gold Member",
            Level::Silver => "Silver Member",
            Level::Bronze => "Bronze Member",
        }
    }
}
