use rand::Rng;
use tracing::debug;

use super::generation_input::GenerationInput;
use super::generator::Generator;
use super::ngram::{NGram, make_ngrams};
use super::transition_table::{TailEdge, TransitionTable};
use crate::error::{MarkovError, MarkovResult};
use crate::tokenizer::Token;

/// A word-level Markov model built from one corpus.
///
/// Owns everything one run needs:
/// - `tokens`: the corpus, in order
/// - `ngrams`: the sliding windows over it, in corpus order
/// - `table`: successor bags keyed by n-gram
///
/// Nothing is shared between models; a run builds one, walks it, drops it.
#[derive(Clone, Debug)]
pub struct MarkovModel {
	order: usize,
	tokens: Vec<Token>,
	ngrams: Vec<NGram>,
	table: TransitionTable,
}

impl MarkovModel {
	/// Extracts the n-grams of `tokens` then builds their transition table.
	///
	/// A corpus too short to hold any n-gram still builds; [`Self::seed`]
	/// reports it.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `order == 0`.
	pub fn build(tokens: Vec<Token>, order: usize, tail_edge: TailEdge) -> MarkovResult<Self> {
		let ngrams = make_ngrams(order, &tokens)?;
		let table = TransitionTable::build(&ngrams, tail_edge);
		debug!(
			"Model of order {} built: {} token(s), {} n-gram(s), {} key(s)",
			order,
			tokens.len(),
			ngrams.len(),
			table.len()
		);
		Ok(Self { order, tokens, ngrams, table })
	}

	/// Builds a model with the order and tail edge of `input`.
	pub fn from_input(tokens: Vec<Token>, input: &GenerationInput) -> MarkovResult<Self> {
		Self::build(tokens, input.order(), input.tail_edge)
	}

	pub fn order(&self) -> usize {
		self.order
	}

	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn ngrams(&self) -> &[NGram] {
		&self.ngrams
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// The walk starts from the first n-gram of the corpus.
	///
	/// # Errors
	/// Returns `InsufficientCorpus` when the corpus has `order` tokens or fewer.
	pub fn seed(&self) -> MarkovResult<&NGram> {
		self.ngrams.first().ok_or(MarkovError::InsufficientCorpus {
			tokens: self.tokens.len(),
			order: self.order,
		})
	}

	pub fn generator(&self) -> Generator<'_> {
		Generator::new(&self.table, self.order)
	}

	/// Walks `length` steps from the seed with the given random source.
	pub fn generate<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> MarkovResult<Vec<Token>> {
		let seed = self.seed()?;
		self.generator().generate(seed, length, rng)
	}

	/// Walks `input.length` steps using `input.random_source`.
	pub fn generate_with(&self, input: &GenerationInput) -> MarkovResult<Vec<Token>> {
		let mut rng = input.random_source.rng();
		self.generate(input.length, &mut rng)
	}
}
