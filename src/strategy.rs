//! Rule-based basic strategy advisor.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::TableError;
use crate::hand::Hand;

/// A player action.
///
/// Parses from the wire names `hit`, `stand`, `double`, `split` and displays
/// as the human-readable suggestion text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the wager and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double",
            Self::Split => "Split",
        })
    }
}

impl FromStr for Action {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            "double" => Ok(Self::Double),
            "split" => Ok(Self::Split),
            _ => Err(TableError::InvalidAction),
        }
    }
}

/// Suggests a basic-strategy action for a hand facing the dealer's up card.
///
/// A pure decision table: it never consults or mutates round state and can
/// be called at any point in a turn, any number of times. The dealer's up
/// card counts Ace as 11.
///
/// Doubling is only ever suggested for a two-card hand; a hand that has
/// already hit gets the corresponding hit/stand advice instead.
#[must_use]
pub fn suggest(hand: &Hand, dealer_up_card: Card) -> Action {
    let total = hand.total();
    let two_cards = hand.len() == 2;
    let dealer = dealer_up_card.value();

    if hand.is_pair() {
        return match hand.cards()[0].rank {
            // Always split aces and eights.
            1 | 8 => Action::Split,
            // Never split tens; stand on 20.
            10..=13 => Action::Stand,
            // A pair of fives is a hard 10: double against 2-9.
            5 if (2..=9).contains(&dealer) => Action::Double,
            5 => Action::Hit,
            // Nines: stand against 7, 10, or Ace, otherwise split.
            9 if matches!(dealer, 7 | 10 | 11) => Action::Stand,
            9 => Action::Split,
            // Remaining pairs split against a weak dealer card.
            _ if (2..=7).contains(&dealer) => Action::Split,
            _ => Action::Hit,
        };
    }

    if hand.is_soft() {
        if total == 17 {
            return if two_cards && (3..=6).contains(&dealer) {
                Action::Double
            } else {
                Action::Hit
            };
        }
        if (13..=17).contains(&total) {
            return if two_cards && (4..=6).contains(&dealer) {
                Action::Double
            } else {
                Action::Hit
            };
        }
        if total >= 19 {
            return Action::Stand;
        }
        // Soft 18 falls through to the default below.
    } else {
        return match total {
            0..=8 => Action::Hit,
            9 if two_cards && (3..=6).contains(&dealer) => Action::Double,
            9 => Action::Hit,
            10 if two_cards && dealer < 10 => Action::Double,
            10 => Action::Hit,
            11 if two_cards => Action::Double,
            11 => Action::Hit,
            12 if (4..=6).contains(&dealer) => Action::Stand,
            12 => Action::Hit,
            13..=16 if dealer <= 6 => Action::Stand,
            13..=16 => Action::Hit,
            _ => Action::Stand,
        };
    }

    Action::Hit
}
