use clap::Parser;
use std::path::PathBuf;

/// Classify reviews as positive or negative with a Naive Bayes model trained
/// on a labelled sentence file.
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiment_bayes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Config {
    /// Tab-separated training file: `sentence<TAB>1` or `sentence<TAB>0` per line
    #[arg(
        short,
        long,
        env = "SENTIMENT_DATASET",
        default_value = "./sentiment_labelled_sentences/yelp_labelled.txt"
    )]
    pub dataset: PathBuf,

    /// Prompt printed before each review is read
    #[arg(long, default_value = "Enter your review: ")]
    pub prompt: String,

    /// Also print the raw score of both labels
    #[arg(long)]
    pub show_scores: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Effective verbosity: 0 when quiet, 1 by default, one more per `-v`.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}
