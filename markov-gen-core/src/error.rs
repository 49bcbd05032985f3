use std::path::PathBuf;

use thiserror::Error;

/// Every failure the generator can surface.
///
/// `KeyNotFound` and `EmptySuccessorList` are invariant violations: a table
/// built by [`crate::model::transition_table::TransitionTable::build`] never
/// produces them. They stay distinct kinds so callers and tests can tell them
/// apart from user errors.
#[derive(Error, Debug)]
pub enum MarkovError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("IO error reading {}: {source}", path.display())]
	File {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	#[error("Corpus too short: {tokens} token(s) cannot produce an n-gram of order {order} with a successor")]
	InsufficientCorpus { tokens: usize, order: usize },

	#[error("N-gram not found in transition table: [{0}]")]
	KeyNotFound(String),

	#[error("N-gram has no successors: [{0}]")]
	EmptySuccessorList(String),
}

pub type MarkovResult<T> = Result<T, MarkovError>;
