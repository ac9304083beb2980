//! Round engine and state management.

use alloc::vec::Vec;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::result::Outcome;
use crate::shoe::Shoe;

mod actions;
mod dealer;

/// One blackjack round: hands, turn pointer, wagers, and outcomes.
///
/// A round owns its shoe exclusively and is driven by exactly one caller;
/// every action takes `&mut self` and completes synchronously, including any
/// cascading dealer play-out. Once [`is_over`](Self::is_over) reports `true`
/// the round is inert (further actions are no-ops) and a caller starts
/// over by dealing a fresh round.
///
/// The struct serializes as a whole (shoe included), so a session store can
/// persist it between actions and restore it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The card supply for this round only.
    shoe: Shoe,
    /// Player hands: one normally, two after a split. Position is identity.
    player_hands: Vec<Hand>,
    /// The dealer's hand; the second card stays hidden until the round ends.
    dealer_hand: Hand,
    /// Index of the hand whose turn it is. Never decreases mid-round.
    active_hand: usize,
    /// Wager multiplier per hand, parallel to `player_hands`.
    multipliers: Vec<u32>,
    /// Outcome per hand, parallel to `player_hands`.
    outcomes: Vec<Outcome>,
    /// Set once every hand is settled and the dealer has played.
    is_over: bool,
}

impl Round {
    /// Deals a new round from a freshly shuffled single deck.
    ///
    /// Two cards go to the player and two to the dealer. Naturals are not
    /// special-cased; a dealt 21 plays out like any other hand.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a freshly shuffled 52-card shoe always covers the opening deal"
    )]
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal_from_shoe(Shoe::shuffled(rng))
            .expect("a full deck covers the opening deal")
    }

    /// Deals a new round from the given shoe, for deterministic replay.
    ///
    /// The first four draws become the player's and then the dealer's
    /// opening cards.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe holds fewer than the
    /// four cards an opening deal needs.
    pub fn deal_from_shoe(mut shoe: Shoe) -> Result<Self, ShoeError> {
        let mut player = Hand::new();
        player.add_card(shoe.draw()?);
        player.add_card(shoe.draw()?);

        let mut dealer = Hand::new();
        dealer.add_card(shoe.draw()?);
        dealer.add_card(shoe.draw()?);

        Ok(Self {
            shoe,
            player_hands: alloc::vec![player],
            dealer_hand: dealer,
            active_hand: 0,
            multipliers: alloc::vec![1],
            outcomes: alloc::vec![Outcome::Pending],
            is_over: false,
        })
    }

    /// Returns all player hands, in fixed order.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the dealer's exposed first card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_hand.cards().first().copied()
    }

    /// Returns the hand whose turn it is.
    ///
    /// After the round ends this stays pointed at the last hand played.
    #[must_use]
    pub fn active_hand(&self) -> &Hand {
        &self.player_hands[self.active_hand]
    }

    /// Returns the index of the hand whose turn it is.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand
    }

    /// Returns the wager multiplier per hand (2 after a double).
    #[must_use]
    pub fn multipliers(&self) -> &[u32] {
        &self.multipliers
    }

    /// Returns the outcome per hand.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns whether the round has finished.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }
}
