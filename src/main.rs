use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use sentiment_bayes::{bayes, config::Config, dataset, logging, Label, NaiveBayesClassifier};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.verbosity())?;

    let dataset = dataset::load_dataset(&config.dataset)?;
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&dataset);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_prompt(&classifier, &config, stdin.lock(), stdout.lock())
}

/// Reads one review per line and prints the predicted label until EOF.
fn run_prompt<R: BufRead, W: Write>(
    classifier: &NaiveBayesClassifier,
    config: &Config,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read review")? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let review = line.trim_end_matches(['\r', '\n']);
        let label = if config.show_scores {
            let scores = classifier.classify(review)?;
            for label in Label::ALL {
                writeln!(output, "  {label}: {:e}", scores[&label])?;
            }
            bayes::best_label(&scores)
        } else {
            classifier.predict(review)?
        };
        tracing::debug!(review, %label, "classified review");

        writeln!(output, "> Your review is {label}\n")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn trained() -> NaiveBayesClassifier {
        let dataset: HashMap<String, Label> = [
            ("great food", Label::Positive),
            ("loved the staff", Label::Positive),
            ("bad service", Label::Negative),
        ]
        .into_iter()
        .map(|(sentence, label)| (sentence.to_string(), label))
        .collect();

        let mut classifier = NaiveBayesClassifier::new();
        classifier.train(&dataset);
        classifier
    }

    fn run(input: &str, args: &[&str]) -> String {
        let argv = std::iter::once("sentiment_bayes").chain(args.iter().copied());
        let config = Config::try_parse_from(argv).unwrap();
        let mut output = Vec::new();
        run_prompt(&trained(), &config, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn answers_each_line() {
        let output = run("great food\nbad service\n", &[]);

        assert_eq!(
            output,
            "Enter your review: > Your review is positive\n\n\
             Enter your review: > Your review is negative\n\n\
             Enter your review: \n"
        );
    }

    #[test]
    fn last_line_without_newline() {
        let output = run("bad service", &["--prompt", "? "]);
        assert_eq!(output, "? > Your review is negative\n\n? \n");
    }

    #[test]
    fn shows_scores_when_asked() {
        let output = run("great food\n", &["--show-scores"]);
        let positive = output.find("  positive: ").unwrap();
        let negative = output.find("  negative: ").unwrap();
        assert!(positive < negative);
        assert!(output.contains("> Your review is positive"));
    }
}
