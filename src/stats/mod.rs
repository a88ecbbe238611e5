use crate::record::Record;
use itertools::Itertools;

use std::cmp::Reverse;
use std::fmt;

/// The record at which the N50 threshold is crossed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct N50 {
    pub length: usize,
    pub header: String,
}

impl N50 {
    /// Computes the N50 of a set of records.
    ///
    /// Records are ordered by length, longest first, with ties kept in input order. Lengths are
    /// summed in that order until the running sum exceeds half of the total length; the record
    /// at which this happens is returned.
    ///
    /// # Returns
    ///
    /// `None` if no record crosses the threshold, which is the case for an empty set and for a
    /// set in which every sequence is empty.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let lengths: Vec<(usize, &Record)> = records.iter().map(|r| (r.len(), r)).collect();
        let total: usize = lengths.iter().map(|(len, _)| len).sum();

        let mut running_sum = 0;
        lengths
            .into_iter()
            // `sorted_by_key` is stable, so equal lengths stay in input order
            .sorted_by_key(|(len, _)| Reverse(*len))
            .find(|(len, _)| {
                running_sum += len;
                // running_sum > total / 2, without losing the half
                2 * running_sum > total
            })
            .map(|(length, rec)| N50 {
                length,
                header: rec.header.clone(),
            })
    }
}

impl fmt::Display for N50 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "N50\t{}\t{}", self.length, self.header)
    }
}

/// One row of the per-record length table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryLength {
    pub header: String,
    pub length: usize,
}

impl EntryLength {
    pub fn table(records: &[Record]) -> Vec<Self> {
        records
            .iter()
            .map(|r| EntryLength {
                header: r.header.clone(),
                length: r.len(),
            })
            .collect()
    }
}

impl fmt::Display for EntryLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.header, self.length)
    }
}

/// Lines produced by a statistics action in place of FASTA output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<T: fmt::Display> FromIterator<T> for Report {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(|x| x.to_string()).collect(),
        }
    }
}
