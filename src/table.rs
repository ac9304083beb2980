//! Boundary adapter for request/response callers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::TableError;
use crate::round::Round;
use crate::snapshot::RoundSnapshot;
use crate::strategy::{Action, suggest};

/// One caller's seat: an optional active round plus the table's RNG.
///
/// This is the object an HTTP layer holds (or reconstructs) per session. It
/// tallies nothing: win/loss counters and round history belong to the
/// caller, and the [`RoundSnapshot`] outcomes are all the engine reports.
///
/// To persist a session, store the [`Round`] from [`round`](Self::round)
/// and put it back with [`restore`](Self::restore) on the next request.
pub struct Table {
    round: Option<Round>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table with no active round.
    ///
    /// The seed drives every shuffle this table performs, which makes whole
    /// sessions reproducible.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            round: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a fresh round, discarding any previous one.
    pub fn start_round(&mut self) -> RoundSnapshot {
        let round = Round::deal(&mut self.rng);
        let snapshot = RoundSnapshot::of(&round);
        self.round = Some(round);
        snapshot
    }

    /// Applies a player action to the active round.
    ///
    /// Actions that the engine treats as illegal transitions (double or
    /// split out of place, anything after the round ended) pass through as
    /// no-ops; the returned snapshot simply shows the unchanged state.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoActiveRound`] if no round has been started,
    /// or a [`TableError::Shoe`] if the shoe ran dry mid-action.
    pub fn act(&mut self, action: Action) -> Result<RoundSnapshot, TableError> {
        let round = self.round.as_mut().ok_or(TableError::NoActiveRound)?;

        match action {
            Action::Hit => {
                round.hit()?;
            }
            Action::Stand => round.stand()?,
            Action::Double => {
                round.double()?;
            }
            Action::Split => round.split()?,
        }

        Ok(RoundSnapshot::of(round))
    }

    /// Applies a player action given its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidAction`] for anything other than `hit`,
    /// `stand`, `double`, or `split`, plus everything [`act`](Self::act)
    /// can return.
    pub fn act_str(&mut self, action: &str) -> Result<RoundSnapshot, TableError> {
        self.act(action.parse()?)
    }

    /// Suggests a basic-strategy action for the current decision point.
    ///
    /// Consults the advisor with the active hand and the dealer's exposed
    /// card; round state is not touched. Render the result with `Display`
    /// for the human-readable suggestion text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoActiveRound`] if no round has been started.
    pub fn advice(&self) -> Result<Action, TableError> {
        let round = self.round.as_ref().ok_or(TableError::NoActiveRound)?;
        let up_card = round.dealer_up_card().ok_or(TableError::NoActiveRound)?;

        Ok(suggest(round.active_hand(), up_card))
    }

    /// Returns the active round, if any.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Restores a round persisted by an external session store.
    pub fn restore(&mut self, round: Round) {
        self.round = Some(round);
    }
}
