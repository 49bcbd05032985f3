use rand::SeedableRng;
use rand::rngs::StdRng;

use super::transition_table::TailEdge;
use crate::error::{MarkovError, MarkovResult};

/// Where the random walk draws its randomness from.
///
/// # Variants
/// - `Entropy`: a fresh generator seeded from the thread RNG
/// - `Fixed(u64)`: a seeded generator; the same seed replays the same walk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RandomSource {
	#[default]
	Entropy,
	Fixed(u64),
}

impl RandomSource {
	/// Builds the generator for one run.
	pub fn rng(self) -> StdRng {
		match self {
			RandomSource::Entropy => StdRng::from_rng(&mut rand::rng()),
			RandomSource::Fixed(seed) => StdRng::seed_from_u64(seed),
		}
	}
}

/// Parameters of one generation run.
///
/// # Invariants
/// - `order` is always >= 2
#[derive(Clone, Debug)]
pub struct GenerationInput {
	/// Words per n-gram.
	order: usize,

	/// Number of walk steps after the seed word.
	pub length: usize,

	/// Randomness of the walk.
	pub random_source: RandomSource,

	/// Successor policy for the last n-gram.
	pub tail_edge: TailEdge,
}

impl GenerationInput {
	/// Creates an input with entropy-seeded randomness and the midpoint
	/// tail edge.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `order < 2`.
	pub fn new(order: usize, length: usize) -> MarkovResult<Self> {
		let mut input = Self {
			order: 2,
			length,
			random_source: RandomSource::default(),
			tail_edge: TailEdge::default(),
		};
		input.set_order(order)?;
		Ok(input)
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Sets the model order.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `order < 2`.
	pub fn set_order(&mut self, order: usize) -> MarkovResult<()> {
		if order < 2 {
			return Err(MarkovError::InvalidArgument(format!("n-gram order must be >= 2, got {order}")));
		}
		self.order = order;
		Ok(())
	}
}
