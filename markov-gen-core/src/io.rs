use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info};

use crate::error::{MarkovError, MarkovResult};
use crate::tokenizer::{Token, tokenize_lines};

/// Extension of the files picked up when the corpus path is a directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_file<P: AsRef<Path>>(filename: P) -> MarkovResult<Vec<String>> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| MarkovError::File { path: path.to_path_buf(), source })?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads and tokenizes one file.
pub fn read_tokens<P: AsRef<Path>>(filename: P) -> MarkovResult<Vec<Token>> {
	let lines = read_file(&filename)?;
	let tokens = tokenize_lines(&lines);
	debug!("{}: {} line(s), {} token(s)", filename.as_ref().display(), lines.len(), tokens.len());
	Ok(tokens)
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths sorted by file name. Subdirectories are ignored.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> MarkovResult<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Loads the corpus behind `path`.
///
/// - A file is read and tokenized as is
/// - A directory contributes every `.txt` file it holds, concatenated in
///   file-name order
///
/// # Errors
/// Any file that cannot be opened or read aborts the whole load.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> MarkovResult<Vec<Token>> {
	let path = path.as_ref();
	let tokens = if path.is_dir() {
		let files = list_files(path, CORPUS_EXTENSION)?;
		info!("Reading {} corpus file(s) from {}", files.len(), path.display());
		read_files_parallel(&files)?
	} else {
		info!("Reading corpus file {}", path.display());
		read_tokens(path)?
	};

	info!("Corpus loaded: {} token(s)", tokens.len());
	Ok(tokens)
}

/// Tokenizes `files` on worker threads and concatenates the results in
/// the order of `files`.
///
/// Files are split into one chunk per CPU. Each worker tokenizes its chunk
/// and sends it back tagged with the chunk index; the result is assembled
/// only once every chunk has arrived.
fn read_files_parallel(files: &[PathBuf]) -> MarkovResult<Vec<Token>> {
	if files.is_empty() {
		return Ok(Vec::new());
	}

	let chunks = num_cpus::get().clamp(1, files.len());
	let chunk_size = files.len().div_ceil(chunks);

	let (tx, rx) = mpsc::channel();
	for (index, chunk) in files.chunks(chunk_size).enumerate() {
		let tx = tx.clone();
		let chunk: Vec<PathBuf> = chunk.to_vec();

		thread::spawn(move || {
			let mut tokens = Vec::new();
			let result: MarkovResult<()> = chunk.iter().try_for_each(|file| {
				tokens.extend(read_tokens(file)?);
				Ok(())
			});
			// The receiver is gone only if another chunk already failed
			let _ = tx.send((index, result.map(|()| tokens)));
		});
	}
	drop(tx);

	let mut parts: Vec<(usize, Vec<Token>)> = Vec::with_capacity(chunks);
	for (index, result) in rx.iter() {
		parts.push((index, result?));
	}
	parts.sort_by_key(|(index, _)| *index);

	Ok(parts.into_iter().flat_map(|(_, tokens)| tokens).collect())
}
