//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Build a random feasible initial solution
//! 2. Per cooling round, run a fixed number of inner steps:
//!    a. Generate every feasible one-step move from the current solution
//!    b. Draw one move uniformly at random
//!    c. Accept it against the best-known value (improvements replace both
//!    best and current; worsening moves replace current with probability
//!    `exp(delta / temperature)`)
//! 3. Cool geometrically after each round; stop once a full round fails to
//!    improve the best-known value or the temperature reaches zero

use fixedbitset::FixedBitSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::instance::{Instance, Item};

use super::config::SaConfig;
use super::types::{Candidate, SaError};

/// Result of an annealing solve.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Total value of the best solution found.
    pub best_value: u64,

    /// Selected items: bit `i` is set iff item `i` is packed.
    pub selection: FixedBitSet,

    /// Number of completed cooling rounds.
    pub rounds: usize,

    /// Total inner iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves that improved the best-known value.
    pub improving_moves: usize,

    /// Best-known value at the start of the search and after each round.
    pub value_history: Vec<u64>,
}

/// Executes the annealing search.
pub struct SaRunner;

impl SaRunner {
    /// Solves `instance`, seeding the RNG from the configuration.
    pub fn run(instance: &Instance, config: &SaConfig) -> Result<SaResult, SaError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Solves `instance`, drawing all randomness from `rng`.
    ///
    /// Identical inputs and an identical random stream produce identical
    /// results, which is what seeded reproducibility tests rely on.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, SaError> {
        config.validate().map_err(SaError::InvalidConfig)?;

        let items = &instance.items;
        let mut current = initial_solution(items, instance.capacity, rng);
        let mut best = current.clone();
        let mut best_value = evaluate(&best, items).0;

        let mut temperature = config.initial_temperature;
        let mut rounds = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut value_history = vec![best_value];

        'search: loop {
            let round_start_best = best_value;

            for _ in 0..config.steps_per_round {
                let mut moves = match neighborhood(&current, items, instance.capacity) {
                    Ok(moves) => moves,
                    // Nothing is reachable from here (empty solution, no
                    // single item fits): the search has converged.
                    Err(SaError::NoMovesAvailable) => break 'search,
                    Err(other) => return Err(other),
                };
                let neighbor = moves.swap_remove(rng.random_range(0..moves.len()));
                let neighbor_value = evaluate(&neighbor, items).0;
                iterations += 1;

                // Acceptance is measured against the best-known value, not
                // the current one: any improvement over best is taken
                // unconditionally and re-centers the walk on it.
                let delta = neighbor_value as f64 - best_value as f64;
                if delta > 0.0 {
                    best = neighbor.clone();
                    best_value = neighbor_value;
                    current = neighbor;
                    accepted_moves += 1;
                    improving_moves += 1;
                } else {
                    if temperature <= 0.0 {
                        return Err(SaError::DegenerateTemperature);
                    }
                    if (delta / temperature).exp() > rng.random_range(0.0..1.0) {
                        current = neighbor;
                        accepted_moves += 1;
                    }
                }
            }

            temperature *= config.cooling_factor;
            rounds += 1;
            value_history.push(best_value);

            if round_start_best >= best_value || temperature <= 0.0 {
                break;
            }
        }

        let mut selection = FixedBitSet::with_capacity(items.len());
        for &idx in &best {
            selection.insert(idx);
        }

        Ok(SaResult {
            best_value,
            selection,
            rounds,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            value_history,
        })
    }
}

/// Builds a feasible starting solution by drawing items uniformly without
/// replacement, stopping at the first draw that would overflow capacity.
///
/// The result is feasible but not necessarily of maximal cardinality; the
/// annealing walk is responsible for the rest.
fn initial_solution<R: Rng>(items: &[Item], capacity: u64, rng: &mut R) -> Candidate {
    let mut solution = Candidate::new();
    let mut pool: Vec<usize> = (0..items.len()).collect();
    while !pool.is_empty() {
        let picked = pool.swap_remove(rng.random_range(0..pool.len()));
        solution.push(picked);
        if evaluate(&solution, items).1 > capacity {
            solution.pop();
            break;
        }
    }
    solution
}

/// Total (value, weight) of a candidate by full summation.
fn evaluate(solution: &[usize], items: &[Item]) -> (u64, u64) {
    solution.iter().fold((0, 0), |(value, weight), &idx| {
        (value + items[idx].value, weight + items[idx].weight)
    })
}

/// Collects every distinct feasible one-step move from `current`: additions
/// of absent items that stay within capacity, plus removals of held items.
///
/// Removals are deduplicated against already-collected moves by item set,
/// not by which move produced them. An empty collection is reported as
/// [`SaError::NoMovesAvailable`] so callers never draw from it.
fn neighborhood(
    current: &Candidate,
    items: &[Item],
    capacity: u64,
) -> Result<Vec<Candidate>, SaError> {
    let mut moves = Vec::new();

    for idx in 0..items.len() {
        if current.contains(&idx) {
            continue;
        }
        let mut addition = current.clone();
        addition.push(idx);
        if evaluate(&addition, items).1 <= capacity {
            moves.push(addition);
        }
    }

    for position in 0..current.len() {
        let mut removal = current.clone();
        removal.remove(position);
        if !moves.iter().any(|collected| same_items(collected, &removal)) {
            moves.push(removal);
        }
    }

    if moves.is_empty() {
        return Err(SaError::NoMovesAvailable);
    }
    Ok(moves)
}

/// Set equality of two candidates, ignoring construction order.
fn same_items(a: &[usize], b: &[usize]) -> bool {
    a.len() == b.len() && a.iter().all(|idx| b.contains(idx))
}
