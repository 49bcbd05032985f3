use rand::Rng;
use tracing::{debug, warn};

use super::ngram::NGram;
use super::transition_table::TransitionTable;
use crate::error::{MarkovError, MarkovResult};
use crate::tokenizer::Token;

/// Upper bound on the words reserved before a walk starts.
const MAX_RESERVED_WORDS: usize = 4096;

/// Random walk over a [`TransitionTable`].
///
/// # Responsibilities
/// - Hold a read-only view of the table and the model order
/// - Walk from a seed n-gram, emitting the first word of each visited key
///
/// Small or repetitive corpora can make the walk cycle through a handful of
/// n-grams forever. That is ordinary Markov behavior and is left as is.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
	table: &'a TransitionTable,
	order: usize,
}

impl<'a> Generator<'a> {
	/// Creates a generator over `table`, built from n-grams of `order` words.
	pub fn new(table: &'a TransitionTable, order: usize) -> Self {
		if order == 1 {
			warn!("Order 1 walk requested: every step takes the first successor");
		}
		Self { table, order }
	}

	/// Walks `length` steps from `seed`.
	///
	/// The first word of `seed` is emitted, then each step draws a
	/// successor uniformly from the current key's bag and emits its first
	/// word. The result always holds `length + 1` words; `length == 0`
	/// returns the seed word alone.
	///
	/// With order 1 a window carries no context beyond the word itself, so
	/// the first successor is taken deterministically and `rng` is unused.
	/// Model construction rejects order 1, which keeps this branch out of
	/// normal runs.
	///
	/// # Errors
	/// - `KeyNotFound` if a visited key is missing from the table
	/// - `EmptySuccessorList` if a visited key has no successors
	pub fn generate<R: Rng + ?Sized>(&self, seed: &NGram, length: usize, rng: &mut R) -> MarkovResult<Vec<Token>> {
		let mut gibberish: Vec<Token> = Vec::with_capacity(length.saturating_add(1).min(MAX_RESERVED_WORDS));
		let mut current = seed;
		gibberish.push(current.first().to_owned());

		for _ in 0..length {
			let successors = self.table.get(current)?;
			let next = if self.order == 1 {
				successors.get(0)
			} else {
				successors.pick(rng)
			};
			current = next.ok_or_else(|| MarkovError::EmptySuccessorList(current.to_string()))?;
			gibberish.push(current.first().to_owned());
		}

		debug!("Generated {} word(s) from seed [{}]", gibberish.len(), seed);
		Ok(gibberish)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::ngram::make_ngrams;
	use crate::model::transition_table::TailEdge;
	use crate::tokenizer::tokenize;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn table_for(text: &str, order: usize) -> (Vec<NGram>, TransitionTable) {
		let ngrams = make_ngrams(order, &tokenize(text)).unwrap();
		let table = TransitionTable::build(&ngrams, TailEdge::Midpoint);
		(ngrams, table)
	}

	#[test]
	fn zero_length_is_just_the_seed_word() {
		let (ngrams, table) = table_for("alpha beta gamma delta", 2);
		let mut rng = StdRng::seed_from_u64(1);
		let out = Generator::new(&table, 2).generate(&ngrams[0], 0, &mut rng).unwrap();
		assert_eq!(out, vec!["alpha"]);
	}

	#[test]
	fn linear_corpus_replays_the_text() {
		// Every key but the last has exactly one successor
		let (ngrams, table) = table_for("a b c d e f", 2);
		let mut rng = StdRng::seed_from_u64(3);
		let out = Generator::new(&table, 2).generate(&ngrams[0], 3, &mut rng).unwrap();
		assert_eq!(out, vec!["a", "b", "c", "d"]);
	}

	#[test]
	fn unknown_seed_is_key_not_found() {
		let (_, table) = table_for("a b c d", 2);
		let stranger = NGram::new(vec!["x".to_owned(), "y".to_owned()]).unwrap();
		let mut rng = StdRng::seed_from_u64(5);
		let result = Generator::new(&table, 2).generate(&stranger, 1, &mut rng);
		assert!(matches!(result, Err(MarkovError::KeyNotFound(_))));
	}

	#[test]
	fn unknown_seed_with_zero_length_never_touches_the_table() {
		let (_, table) = table_for("a b c d", 2);
		let stranger = NGram::new(vec!["x".to_owned(), "y".to_owned()]).unwrap();
		let mut rng = StdRng::seed_from_u64(5);
		let out = Generator::new(&table, 2).generate(&stranger, 0, &mut rng).unwrap();
		assert_eq!(out, vec!["x"]);
	}

	#[test]
	fn huge_length_fails_on_the_walk_not_the_reservation() {
		let (_, table) = table_for("a b c d", 2);
		let stranger = NGram::new(vec!["x".to_owned(), "y".to_owned()]).unwrap();
		let mut rng = StdRng::seed_from_u64(0);
		let result = Generator::new(&table, 2).generate(&stranger, usize::MAX, &mut rng);
		assert!(matches!(result, Err(MarkovError::KeyNotFound(_))));
	}

	#[test]
	fn order_one_always_takes_the_first_successor() {
		// Bag of [a] is [b, c, b, ...]; first recorded successor is [b]
		let (ngrams, table) = table_for("a b a c a b x", 1);
		let generator = Generator::new(&table, 1);

		let first = generator.generate(&ngrams[0], 20, &mut StdRng::seed_from_u64(1)).unwrap();
		let second = generator.generate(&ngrams[0], 20, &mut StdRng::seed_from_u64(999)).unwrap();
		assert_eq!(first, second);
		assert_eq!(&first[..4], &["a", "b", "a", "b"]);
	}
}
