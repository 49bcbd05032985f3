use rand::Rng;

use super::ngram::NGram;

/// The bag of n-grams observed right after one key n-gram.
///
/// Conceptually the outgoing edges of a Markov chain node. Frequencies are
/// not stored as counts: a successor seen `k` times is held `k` times, so a
/// uniform draw over the bag is already weighted by observation frequency.
///
/// ## Invariants
/// - Duplicates are kept
/// - Insertion order carries no meaning for sampling
#[derive(Clone, Debug, Default)]
pub struct Successors {
	followers: Vec<NGram>,
}

impl Successors {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self { followers: Vec::new() }
	}

	/// Records one more observation of `next`.
	pub fn add(&mut self, next: NGram) {
		self.followers.push(next);
	}

	pub fn len(&self) -> usize {
		self.followers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.followers.is_empty()
	}

	/// Successor stored at `index`.
	pub fn get(&self, index: usize) -> Option<&NGram> {
		self.followers.get(index)
	}

	/// How many times `ngram` was recorded.
	pub fn count_of(&self, ngram: &NGram) -> usize {
		self.followers.iter().filter(|follower| *follower == ngram).count()
	}

	pub fn iter(&self) -> impl Iterator<Item = &NGram> {
		self.followers.iter()
	}

	/// Draws a successor uniformly from the bag.
	///
	/// Returns `None` if the bag is empty.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&NGram> {
		if self.followers.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.followers.len());
		self.followers.get(index)
	}
}
