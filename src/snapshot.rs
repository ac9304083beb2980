//! Serializable round views for a request/response boundary.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Outcome;
use crate::round::Round;

/// A wire-friendly view of one round.
///
/// While the round is live the dealer's hole card and running total stay
/// hidden; once it ends the full dealer hand and the per-hand outcomes are
/// included. Field names serialize in camelCase for JSON consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    /// Every player hand, in fixed order.
    pub player_hands: Vec<Vec<Card>>,
    /// Total for each player hand.
    pub player_totals: Vec<u8>,
    /// Cards of the hand currently being played; `None` once the round ends.
    pub active_cards: Option<Vec<Card>>,
    /// Dealer cards as exposed so far; the hole card is `None` while the
    /// round is live.
    pub dealer_cards: Vec<Option<Card>>,
    /// Dealer total, revealed only once the round is over.
    pub dealer_total: Option<u8>,
    /// Wager multiplier per hand (2 after a double).
    pub wager_multipliers: Vec<u32>,
    /// Index of the hand whose turn it is.
    pub active_hand: usize,
    /// Whether the round has finished.
    pub round_over: bool,
    /// Per-hand outcomes, present once the round is over.
    pub outcomes: Option<Vec<Outcome>>,
}

impl RoundSnapshot {
    /// Builds the snapshot of the round's current state.
    #[must_use]
    pub fn of(round: &Round) -> Self {
        let over = round.is_over();

        let dealer_cards = if over {
            round
                .dealer_hand()
                .cards()
                .iter()
                .copied()
                .map(Some)
                .collect()
        } else {
            // Up card plus a placeholder for the hidden hole card.
            alloc::vec![round.dealer_up_card(), None]
        };

        Self {
            player_hands: round
                .player_hands()
                .iter()
                .map(|hand| hand.cards().to_vec())
                .collect(),
            player_totals: round.player_hands().iter().map(Hand::total).collect(),
            active_cards: if over {
                None
            } else {
                Some(round.active_hand().cards().to_vec())
            },
            dealer_cards,
            dealer_total: over.then(|| round.dealer_hand().total()),
            wager_multipliers: round.multipliers().to_vec(),
            active_hand: round.active_hand_index(),
            round_over: over,
            outcomes: over.then(|| round.outcomes().to_vec()),
        }
    }
}
