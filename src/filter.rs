use crate::error::TfamError;
use crate::record::MARKER;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// A set of record headers, used to keep or remove matching records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(HashSet<String>);

impl FilterSet {
    /// Builds a set from list lines. Blank lines are skipped; every other line is trimmed and a
    /// leading `>` is stripped, as for FASTA headers. A lone `>` becomes the empty header.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .filter_map(|line| {
                let item = line.as_ref().trim();
                if item.is_empty() {
                    return None;
                }
                let item = item.strip_prefix(MARKER).unwrap_or(item).trim();
                Some(item.to_string())
            })
            .collect();
        Self(entries)
    }

    pub fn contains(&self, header: &str) -> bool {
        self.0.contains(header)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads a newline-delimited list of record names into a `FilterSet`.
///
/// # Errors
///
/// Returns `TfamError::Io` if the file cannot be opened or read.
pub fn load_filter_set(path: &str) -> Result<FilterSet, TfamError> {
    let file = File::open(path).map_err(|e| TfamError::io(path, e))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| TfamError::io(path, e))?;

    let set = FilterSet::from_lines(lines);
    debug!("Loaded {} filter entries from {path}", set.len());
    Ok(set)
}
