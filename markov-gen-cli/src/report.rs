use std::fmt::Write;
use std::path::Path;

use markov_gen_core::tokenizer::Token;
use markov_gen_core::{MarkovModel, TailEdge};
use serde::Serialize;

/// Everything a run prints: where the text came from, the text itself and
/// the gibberish made from it.
#[derive(Serialize, Debug)]
pub struct GibberishReport {
    pub source: String,
    pub order: usize,
    pub tail_edge: TailEdge,
    pub original: Vec<Token>,
    pub gibberish: Vec<Token>,
}

impl GibberishReport {
    pub fn new(source: &Path, model: &MarkovModel, tail_edge: TailEdge, gibberish: Vec<Token>) -> Self {
        Self {
            source: source.display().to_string(),
            order: model.order(),
            tail_edge,
            original: model.tokens().to_vec(),
            gibberish,
        }
    }

    /// Human-readable output, one banner per section.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "\nMARKOV TEXT GENERATOR");
        let _ = writeln!(out, "\nThe text file you are using is: {}", self.source);
        let _ = writeln!(out, "The Markov order is: {}", self.order);
        let _ = writeln!(out, "\nHere is the original text of {} before it is turned into gibberish:", self.source);
        let _ = writeln!(out, "{}", self.original.join(" "));
        let _ = writeln!(
            out,
            "\nNOTE: the gibberish only departs from the original once the walk reaches an n-gram \
             with more than one successor and draws one other than the first."
        );
        let _ = writeln!(
            out,
            "NOTE: a successor is stored once per time it follows its n-gram in the text, so the \
             chance of drawing it matches its frequency in the text."
        );
        let _ = writeln!(out, "\nAnd here are {} words of gibberish:", self.gibberish.len());
        let _ = writeln!(out, "{}", self.gibberish.join(" "));
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
