//! Markov model components.
//!
//! - Fixed-length word windows (`NGram`)
//! - Successor bags (`Successors`) and the table holding them (`TransitionTable`)
//! - The random walk (`Generator`)
//! - Run parameters (`GenerationInput`)
//! - The model owning all of the above for one run (`MarkovModel`)

/// Random walk over a transition table.
pub mod generator;

/// Order, length, randomness and tail-edge settings of a run.
pub mod generation_input;

/// Tokens, n-grams and transition table built from one corpus.
pub mod markov_model;

/// Fixed-length word windows and their extraction.
pub mod ngram;

/// Bag of n-grams observed after one key.
///
/// Supports uniform sampling, which the duplicates turn into
/// frequency-weighted sampling.
pub mod successors;

/// N-gram to successor-bag mapping, with the tail-edge policy.
pub mod transition_table;
