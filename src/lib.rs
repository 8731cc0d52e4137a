//! Simulated-annealing solver for the 0/1 knapsack problem.
//!
//! Given items with weights and values and a capacity bound, the solver
//! searches for a feasible subset (total weight within capacity) of high
//! total value:
//!
//! - **[`instance`]**: the instance/solution data model and the
//!   line-oriented `.dat` file format.
//! - **[`sa`]**: the annealing search itself, from random initial solution
//!   construction through add/remove neighborhood generation to
//!   temperature-driven acceptance and geometric cooling.
//!
//! The search is a best-effort heuristic. It keeps cooling and searching in
//! fixed-size rounds until an entire round fails to improve the best-known
//! value; there is no optimality guarantee, and runtime is data-dependent.
//!
//! The accompanying binary drives whole instance files: one instance per
//! line in, one solution line per instance out.

pub mod instance;
pub mod sa;
