use anyhow::{bail, Context, Result};
use csv::{ByteRecord, ReaderBuilder, Terminator};
use std::{collections::HashMap, fs::File, io::Read, path::Path};

use crate::bayes::Label;

/// Loads a `sentence<TAB>label` file where the label is "1" (positive) or "0"
/// (negative). Fails when the file holds no usable line.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Label>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("failed to open dataset {}", path.display()))?;

    let dataset = read_dataset(file)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    if dataset.is_empty() {
        bail!("dataset {} has no labelled sentences", path.display());
    }
    tracing::info!(path = %path.display(), sentences = dataset.len(), "loaded dataset");

    Ok(dataset)
}

/// Reads labelled sentences from any tab-separated source.
///
/// Records end at `\n` only; a trailing `\r` is dropped from the label.
/// Lines without exactly two fields, or with a label other than "0"/"1", are
/// skipped. Sentences that are not valid UTF-8 are kept with replacement
/// characters. A sentence seen twice keeps its last label.
pub fn read_dataset<R: Read>(source: R) -> Result<HashMap<String, Label>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    let mut dataset = HashMap::new();
    let mut skipped = 0;
    for record in reader.byte_records() {
        let record = record?;

        match parse_record(&record) {
            Some((sentence, label)) => {
                dataset.insert(sentence, label);
            }
            None => {
                tracing::trace!(line = ?record.position().map(|p| p.line()), "skipping record");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped malformed dataset lines");
    }

    Ok(dataset)
}

fn parse_record(record: &ByteRecord) -> Option<(String, Label)> {
    if record.len() != 2 {
        return None;
    }

    let label = record.get(1)?;
    let label = label.strip_suffix(b"\r").unwrap_or(label);
    let label = Label::from_dataset_field(std::str::from_utf8(label).ok()?)?;

    let sentence = String::from_utf8_lossy(record.get(0)?).into_owned();
    Some((sentence, label))
}
