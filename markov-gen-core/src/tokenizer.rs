/// A single word of the corpus.
pub type Token = String;

/// Splits raw text into word tokens.
///
/// Lines are processed in order and their tokens appended in sequence.
/// Any whitespace separates tokens and empty pieces are dropped. No case
/// folding and no punctuation stripping: `"end."` stays `"end."`.
pub fn tokenize(text: &str) -> Vec<Token> {
	let mut tokens = Vec::new();
	for line in text.lines() {
		tokenize_line(line, &mut tokens);
	}
	tokens
}

/// Appends the tokens of every line, in order.
pub fn tokenize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
	let mut tokens = Vec::new();
	for line in lines {
		tokenize_line(line.as_ref(), &mut tokens);
	}
	tokens
}

fn tokenize_line(line: &str, tokens: &mut Vec<Token>) {
	tokens.extend(line.split_whitespace().map(str::to_owned));
}
