use crate::record::{Record, RecordSet, MARKER};
use anyhow::{Context, Result};
use std::io::BufRead;

/// Reconstructs FASTA records from raw lines.
///
/// A line is a header iff it starts with `>`; blank lines are never headers. Every other line
/// is gathered until the next header and joined into the sequence of the preceding record,
/// dropping any `\n` or `\r` characters. Lines which appear before the first header do not
/// belong to any record and are discarded.
///
/// # Arguments
///
/// * `lines` - The lines of the file, with or without their line terminators.
///
/// # Returns
///
/// The records in input order. Input without a header line produces an empty `RecordSet`.
pub fn parse<I, S>(lines: I) -> RecordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = RecordSet::new();
    let mut sequence_accu = String::new();
    let mut orphan_lines = 0usize;
    let mut without_sequence = 0usize;

    for line in lines {
        let line = line.as_ref();

        // `strip_prefix` is safe on empty lines, which are never headers
        if let Some(header) = line.strip_prefix(MARKER) {
            if !flush_sequence(&mut records, &mut sequence_accu) && !records.is_empty() {
                without_sequence += 1;
            }
            records.push(Record::new(header.trim(), String::new()));
        } else if records.is_empty() {
            orphan_lines += 1;
        } else {
            sequence_accu.push_str(line);
        }
    }

    // the last record has no following header to trigger this
    if !flush_sequence(&mut records, &mut sequence_accu) && !records.is_empty() {
        without_sequence += 1;
    }

    if orphan_lines > 0 {
        debug!("Skipped {orphan_lines} line(s) before the first header");
    }
    if without_sequence > 0 {
        debug!("{without_sequence} record(s) have no sequence");
    }

    records
}

/// Moves the accumulated sequence lines into the most recently pushed record. Returns whether
/// that record received a non-empty sequence.
fn flush_sequence(records: &mut RecordSet, sequence_accu: &mut String) -> bool {
    let Some(last) = records.last_mut() else {
        return false;
    };

    last.sequence = sequence_accu
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect();
    sequence_accu.clear();
    !last.sequence.is_empty()
}

/// Reads every line from `reader` into memory and parses it as FASTA.
///
/// # Errors
///
/// Returns an error if the underlying reader fails, or if the input is not valid UTF-8.
pub fn read_fasta(reader: impl BufRead) -> Result<RecordSet> {
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .context("Could not read FASTA input")?;

    Ok(parse(lines))
}
