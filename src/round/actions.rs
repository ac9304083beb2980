use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::result::Outcome;

use super::Round;

impl Round {
    /// Player action: Hit (draw a card into the active hand).
    ///
    /// A hand that goes over 21 is marked [`Outcome::Loss`] on the spot,
    /// without ever reaching the dealer comparison, and the turn advances.
    /// Otherwise the same hand stays active. Returns the drawn card, or
    /// `Ok(None)` if the round is already over.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty (the hand is
    /// left unchanged), or if a bust on the last hand leaves the dealer
    /// drawing from an empty shoe.
    pub fn hit(&mut self) -> Result<Option<Card>, ShoeError> {
        if self.is_over {
            return Ok(None);
        }

        let card = self.shoe.draw()?;
        let hand = &mut self.player_hands[self.active_hand];
        hand.add_card(card);

        if hand.is_busted() {
            self.outcomes[self.active_hand] = Outcome::Loss;
            self.advance_turn()?;
        }

        Ok(Some(card))
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// The hand's outcome stays pending; settlement resolves it after the
    /// dealer plays. The turn advances immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if standing on the last hand puts
    /// the dealer on an empty shoe while below 17.
    pub fn stand(&mut self) -> Result<(), ShoeError> {
        if self.is_over {
            return Ok(());
        }

        self.advance_turn()
    }

    /// Player action: Double down (double the wager, take exactly one card).
    ///
    /// Legal only while the active hand holds exactly two cards; any other
    /// attempt is a silent no-op returning `Ok(None)`. The turn advances
    /// unconditionally, even on a bust: the hand is not marked lost here,
    /// settlement scores any total over 21 as a loss.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty (the wager
    /// multiplier is left untouched), or if the dealer phase that follows
    /// runs the shoe dry.
    pub fn double(&mut self) -> Result<Option<Card>, ShoeError> {
        if self.is_over || self.player_hands[self.active_hand].len() != 2 {
            return Ok(None);
        }

        let card = self.shoe.draw()?;
        self.multipliers[self.active_hand] *= 2;
        self.player_hands[self.active_hand].add_card(card);
        self.advance_turn()?;

        Ok(Some(card))
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// Legal only while there is a single hand holding exactly two cards of
    /// equal rank; any other attempt is a silent no-op, which also makes an
    /// already-split round impossible to re-split. Each half is dealt one card
    /// to become a two-card hand, wagers and outcomes reset, and play
    /// restarts at the first hand. The resulting hands cannot be re-split.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe cannot cover both
    /// replacement cards; the round is left unchanged.
    #[expect(
        clippy::missing_panics_doc,
        reason = "is_pair() is verified before take_split_card()"
    )]
    pub fn split(&mut self) -> Result<(), ShoeError> {
        if self.is_over || self.player_hands.len() != 1 || !self.player_hands[0].is_pair() {
            return Ok(());
        }

        // Both replacement cards must be available before anything mutates.
        if self.shoe.len() < 2 {
            return Err(ShoeError::Exhausted);
        }
        let first_draw = self.shoe.draw()?;
        let second_draw = self.shoe.draw()?;

        let split_card = self.player_hands[0]
            .take_split_card()
            .expect("is_pair() was verified above");

        self.player_hands[0].add_card(first_draw);

        let mut second_hand = Hand::from_card(split_card);
        second_hand.add_card(second_draw);
        self.player_hands.push(second_hand);

        self.multipliers = alloc::vec![1, 1];
        self.outcomes = alloc::vec![Outcome::Pending, Outcome::Pending];
        self.active_hand = 0;

        Ok(())
    }

    /// Moves play to the next hand, or hands over to the dealer after the
    /// last one.
    pub(super) fn advance_turn(&mut self) -> Result<(), ShoeError> {
        if self.active_hand < self.player_hands.len() - 1 {
            self.active_hand += 1;
            Ok(())
        } else {
            self.dealer_play_and_settle()
        }
    }
}
