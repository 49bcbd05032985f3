use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::ngram::NGram;
use super::successors::Successors;
use crate::error::{MarkovError, MarkovResult};

/// Policy choosing the synthetic successor of the corpus's last n-gram.
///
/// The last n-gram has no observed follower. Giving it one keeps every key
/// of the table non-empty, so a walk can never dead-end.
///
/// # Variants
/// - `Midpoint`: the n-gram at index `(len - 1) / 2`
/// - `WrapToStart`: the first n-gram of the corpus
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TailEdge {
	#[default]
	Midpoint,
	WrapToStart,
}

impl TailEdge {
	/// Index, into an n-gram sequence of length `len`, of the successor
	/// assigned to the last element.
	pub fn successor_index(self, len: usize) -> usize {
		match self {
			TailEdge::Midpoint => len.saturating_sub(1) / 2,
			TailEdge::WrapToStart => 0,
		}
	}
}

/// Maps each distinct n-gram to the bag of n-grams that followed it.
///
/// # Responsibilities
/// - Build the bags from an ordered n-gram sequence
/// - Patch the final n-gram through a [`TailEdge`] policy
/// - Answer lookups, failing fast on unknown keys
///
/// # Invariants
/// - Every key has a non-empty bag
/// - Read-only once built
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	rules: HashMap<NGram, Successors>,
}

impl TransitionTable {
	/// Builds the table from n-grams in corpus order.
	///
	/// For each `i`, `ngrams[i + 1]` is appended to the bag of `ngrams[i]`,
	/// duplicates included. The last n-gram then receives one extra
	/// successor chosen by `tail_edge`, added to whatever it already holds.
	/// An empty input gives an empty table.
	pub fn build(ngrams: &[NGram], tail_edge: TailEdge) -> Self {
		let mut rules: HashMap<NGram, Successors> = HashMap::new();

		for pair in ngrams.windows(2) {
			rules.entry(pair[0].clone()).or_default().add(pair[1].clone());
		}

		if let Some(last) = ngrams.last() {
			let index = tail_edge.successor_index(ngrams.len());
			rules.entry(last.clone()).or_default().add(ngrams[index].clone());
		}

		let table = Self { rules };
		debug!(
			"Transition table built: {} key(s) from {} n-gram(s), tail edge {:?}",
			table.len(),
			ngrams.len(),
			tail_edge
		);
		table
	}

	/// Returns the successors recorded for `key`.
	///
	/// # Errors
	/// Returns `KeyNotFound` if `key` was never a current element while
	/// building. No other bag is substituted.
	pub fn get(&self, key: &NGram) -> MarkovResult<&Successors> {
		self.rules.get(key).ok_or_else(|| MarkovError::KeyNotFound(key.to_string()))
	}

	pub fn contains(&self, key: &NGram) -> bool {
		self.rules.contains_key(key)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &NGram> {
		self.rules.keys()
	}

	/// Iterates over every key with its bag.
	pub fn iter(&self) -> impl Iterator<Item = (&NGram, &Successors)> {
		self.rules.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::ngram::make_ngrams;
	use crate::tokenizer::tokenize;

	fn ngram(text: &str) -> NGram {
		NGram::new(text.split(' ').map(str::to_owned).collect()).unwrap()
	}

	#[test]
	fn tail_edge_indices() {
		assert_eq!(TailEdge::Midpoint.successor_index(1), 0);
		assert_eq!(TailEdge::Midpoint.successor_index(7), 3);
		assert_eq!(TailEdge::Midpoint.successor_index(8), 3);
		assert_eq!(TailEdge::WrapToStart.successor_index(8), 0);
	}

	#[test]
	fn empty_sequence_gives_empty_table() {
		let table = TransitionTable::build(&[], TailEdge::Midpoint);
		assert!(table.is_empty());
		assert!(matches!(table.get(&ngram("a b")), Err(MarkovError::KeyNotFound(_))));
	}

	#[test]
	fn single_ngram_points_to_itself() {
		let only = ngram("a b");
		let table = TransitionTable::build(std::slice::from_ref(&only), TailEdge::Midpoint);
		let bag = table.get(&only).unwrap();
		assert_eq!(bag.len(), 1);
		assert_eq!(bag.get(0), Some(&only));
	}

	#[test]
	fn tail_edge_is_appended_not_replacing() {
		// [a b] [b a] [a b]: the last [a b] also starts the corpus
		let ngrams = make_ngrams(2, &tokenize("a b a b x")).unwrap();
		let table = TransitionTable::build(&ngrams, TailEdge::Midpoint);
		let bag = table.get(&ngram("a b")).unwrap();
		// Observed [b a] plus the synthetic midpoint successor [b a]
		assert_eq!(bag.count_of(&ngram("b a")), 2);
	}

	#[test]
	fn wrap_to_start_policy() {
		let ngrams = make_ngrams(2, &tokenize("one two three four five")).unwrap();
		let table = TransitionTable::build(&ngrams, TailEdge::WrapToStart);
		let bag = table.get(&ngram("three four")).unwrap();
		assert_eq!(bag.count_of(&ngram("one two")), 1);
		assert_eq!(bag.len(), 1);
	}
}
