//! Local search operators for improving tours and assignments.
//!
//! - [`two_opt_improve`] — Intra-tour 2-opt segment reversal
//! - [`rebalance_swap`] — Inter-vehicle point exchange

mod rebalance;
mod two_opt;

pub use rebalance::rebalance_swap;
pub use two_opt::{two_opt_improve, DEFAULT_ITERATION_CAP};
