//! Probabilistic path operators on undirected graphs.
//!
//! This crate holds graph operators whose edge weights are independent
//! success probabilities rather than additive costs: the "distance" of a
//! path is the product of its edge probabilities, and better means larger.
//!
//! Public invariants (must not change):
//! - APIs are backend-agnostic (slice-based inputs, scalar/`Vec` outputs).
//! - Operators are pure functions of their inputs; working structures are
//!   per-call and discarded on return.
//! - Numeric code is deterministic (no RNG, no float-equality termination).
//! - "No path" is the defined outcome 0.0, never an error; malformed input
//!   (out-of-bounds ids, probabilities outside \([0,1]\)) is an error.

pub mod max_probability_path;

/// Re-export commonly-used operators at crate root for demos.
pub use max_probability_path::*;
