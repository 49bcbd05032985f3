use std::fmt;

use crate::error::{MarkovError, MarkovResult};
use crate::tokenizer::Token;

/// A fixed-length run of consecutive corpus tokens.
///
/// An `NGram` is both a key of the transition table and the unit the
/// generator walks over.
///
/// # Invariants
/// - Never empty; its length is the model order `n`
/// - Equality and hashing cover every token, in order
/// - Immutable once built
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NGram {
	words: Vec<Token>,
}

impl NGram {
	/// Creates an n-gram from its words.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `words` is empty.
	pub fn new(words: Vec<Token>) -> MarkovResult<Self> {
		if words.is_empty() {
			return Err(MarkovError::InvalidArgument("an n-gram needs at least one word".to_owned()));
		}
		Ok(Self { words })
	}

	/// First word of the n-gram, the one the generator emits.
	pub fn first(&self) -> &str {
		// Non-empty by construction
		&self.words[0]
	}

	/// Word at `index`, if any.
	pub fn get(&self, index: usize) -> Option<&str> {
		self.words.get(index).map(String::as_str)
	}

	/// Number of words (the order of the model that produced it).
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always `false`, present for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn words(&self) -> &[Token] {
		&self.words
	}
}

impl fmt::Display for NGram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.words.join(" "))
	}
}

/// Slides a window of `n` tokens over the corpus.
///
/// One n-gram is produced per start offset in `[0, tokens.len() - n)`, so a
/// corpus of `L` tokens yields `max(0, L - n)` n-grams. The final window is
/// never used as a start: the last n-gram always has a real token after it.
/// Output order is corpus order; the table builder pairs neighbours by index.
///
/// # Errors
/// Returns `InvalidArgument` if `n == 0`.
pub fn make_ngrams(n: usize, tokens: &[Token]) -> MarkovResult<Vec<NGram>> {
	if n == 0 {
		return Err(MarkovError::InvalidArgument("n-gram order must be >= 1".to_owned()));
	}

	let count = tokens.len().saturating_sub(n);
	let ngrams: Vec<NGram> = (0..count)
		.map(|i| NGram { words: tokens[i..i + n].to_vec() })
		.collect();

	Ok(ngrams)
}
