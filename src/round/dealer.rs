use crate::error::ShoeError;
use crate::result::Outcome;

use super::Round;

impl Round {
    /// Plays out the dealer and settles every hand still pending.
    ///
    /// The dealer draws while below 17 and stands on any 17 or higher, soft
    /// 17 included. The dealer always plays out, even when every player hand
    /// has already busted; settlement's own over-21 check makes the order
    /// immaterial.
    pub(super) fn dealer_play_and_settle(&mut self) -> Result<(), ShoeError> {
        while self.dealer_hand.total() < 17 {
            let card = self.shoe.draw()?;
            self.dealer_hand.add_card(card);
        }

        let dealer_total = self.dealer_hand.total();

        for (hand, outcome) in self.player_hands.iter().zip(self.outcomes.iter_mut()) {
            if outcome.is_settled() {
                continue;
            }

            let player_total = hand.total();
            *outcome = if player_total > 21 {
                Outcome::Loss
            } else if dealer_total > 21 {
                Outcome::Win
            } else if player_total > dealer_total {
                Outcome::Win
            } else if player_total < dealer_total {
                Outcome::Loss
            } else {
                Outcome::Push
            };
        }

        self.is_over = true;
        Ok(())
    }
}
