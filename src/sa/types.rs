//! Solver-facing types and errors.

use thiserror::Error;

/// A candidate solution: the indices of the items currently packed.
///
/// Order reflects construction history and carries no meaning; two
/// candidates holding the same indices in different orders denote the same
/// subset. Indices are distinct by construction.
pub type Candidate = Vec<usize>;

/// Errors produced by an annealing solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The current solution has no feasible one-step moves.
    ///
    /// Only possible when the solution is empty and no single item fits
    /// within capacity. The runner treats this as convergence and returns
    /// the best solution found so far instead of surfacing it.
    #[error("no moves available from the current solution")]
    NoMovesAvailable,

    /// Temperature decayed to exactly zero before the round-end stop check
    /// fired, which would make the acceptance probability undefined.
    #[error("temperature reached zero mid-round")]
    DegenerateTemperature,
}
