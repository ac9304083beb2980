//! Per-hand settlement outcomes.

use serde::{Deserialize, Serialize};

/// Settlement outcome for a single player hand.
///
/// A hand stays [`Pending`](Self::Pending) until it busts on a hit or the
/// dealer phase settles the round; stood and doubled hands are only resolved
/// by settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Not settled yet.
    Pending,
    /// The hand beat the dealer (or the dealer busted).
    Win,
    /// The hand busted or lost the comparison.
    Loss,
    /// Tie; the wager is returned.
    Push,
}

impl Outcome {
    /// Returns whether the outcome has been settled.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
