//! Word-level Markov text generation.
//!
//! This crate builds an order-n Markov model from a text corpus and walks
//! it to produce "gibberish" whose local word transitions mimic the source:
//! - Tokenization of raw text into words
//! - Sliding-window n-gram extraction
//! - Transition tables whose successor bags encode observed frequencies
//! - Seedable random walks over those tables
//!
//! Corpus loading lives in [`io`]; everything else is pure and in memory.

/// Error type shared by every module.
pub mod error;

/// Corpus loading (single file or directory of `.txt` files).
pub mod io;

/// N-grams, transition tables, the random walk and the model tying them
/// together.
pub mod model;

/// Raw text to word tokens.
pub mod tokenizer;

pub use error::{MarkovError, MarkovResult};
pub use model::generation_input::{GenerationInput, RandomSource};
pub use model::markov_model::MarkovModel;
pub use model::transition_table::TailEdge;
