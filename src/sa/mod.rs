//! Simulated Annealing (SA) for the 0/1 knapsack problem.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a probability that
//! shrinks as the temperature decays, letting the search escape local
//! optima. Cooling proceeds in fixed-size rounds; the search stops once an
//! entire round fails to improve the best-known value (or the temperature
//! reaches zero).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::{Candidate, SaError};
