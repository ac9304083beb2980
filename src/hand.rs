//! Hand representation and blackjack hand evaluation.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;

const fn low_value(rank: u8) -> u8 {
    match rank {
        // Aces enter the sum as 1; at most one is upgraded afterwards.
        1 => 1,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut sum: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.rank == 1 {
            has_ace = true;
        }
        sum = sum.saturating_add(low_value(card.rank));
    }

    // Exactly one Ace counts as 11 when that fits under 21, however many
    // Aces the hand holds.
    if has_ace && sum <= 11 {
        (sum + 10, true)
    } else {
        (sum, false)
    }
}

/// An ordered set of cards held by one position at the table.
///
/// A hand starts with two cards (from the opening deal or a split) and only
/// ever grows, one card per hit, double, or dealer draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding a single card, as produced by a split.
    pub(crate) fn from_card(card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the total of the hand.
    ///
    /// Aces sum as 1 each; if one of them can count as 11 without busting,
    /// the total reports that upgrade. Only ever one Ace is upgraded.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (one Ace currently counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand's total exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is exactly two cards of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}
