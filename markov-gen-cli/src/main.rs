use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use markov_gen_core::io::read_corpus;
use markov_gen_core::{GenerationInput, MarkovModel, MarkovResult, RandomSource, TailEdge};
use tracing::{Level, error, info};

mod report;

use report::GibberishReport;

/// Learns word transitions from a text and prints Markov gibberish.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words per n-gram (the Markov order), at least 2
    order: usize,

    /// Words of gibberish to generate after the seed word
    length: usize,

    /// Text file, or directory of .txt files, to learn from
    path: PathBuf,

    /// Seed for a reproducible walk
    #[arg(long)]
    seed: Option<u64>,

    /// Successor given to the last n-gram of the corpus
    #[arg(long, value_enum, default_value_t = TailEdgeArg::Midpoint)]
    tail_edge: TailEdgeArg,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TailEdgeArg {
    /// N-gram in the middle of the corpus
    Midpoint,
    /// First n-gram of the corpus
    Wrap,
}

impl From<TailEdgeArg> for TailEdge {
    fn from(arg: TailEdgeArg) -> Self {
        match arg {
            TailEdgeArg::Midpoint => TailEdge::Midpoint,
            TailEdgeArg::Wrap => TailEdge::WrapToStart,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn run(cli: &Cli) -> MarkovResult<GibberishReport> {
    // Order is checked before touching the file
    let mut input = GenerationInput::new(cli.order, cli.length)?;
    input.tail_edge = cli.tail_edge.into();
    if let Some(seed) = cli.seed {
        input.random_source = RandomSource::Fixed(seed);
    }

    let tokens = read_corpus(&cli.path)?;
    let model = MarkovModel::from_input(tokens, &input)?;
    info!("Walking {} step(s) over {} key(s)", input.length, model.table().len());
    let gibberish = model.generate_with(&input)?;

    Ok(GibberishReport::new(&cli.path, &model, input.tail_edge, gibberish))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let report = run(&cli).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => match report.render_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to encode report: {}", e);
                process::exit(1);
            }
        },
    }
}
