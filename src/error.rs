//! Error types for engine and boundary operations.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    ///
    /// Fatal to the round: a single-deck round never replenishes its shoe.
    /// An action that hits this error leaves the round unchanged.
    #[error("no cards left in the shoe")]
    Exhausted,
}

/// Errors raised at the request/response boundary.
///
/// Illegal double/split attempts and actions on a finished round are silent
/// no-ops inside the engine, not errors; these variants cover the cases a
/// boundary caller can actually get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No round has been started, or the previous one was discarded.
    #[error("no active round")]
    NoActiveRound,
    /// The action string is not one of `hit`, `stand`, `double`, `split`.
    #[error("unrecognized action")]
    InvalidAction,
    /// The shoe ran out of cards mid-action.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
