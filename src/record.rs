/// The character which starts every header line of a FASTA file.
pub const MARKER: char = '>';

/// A single FASTA entry.
///
/// # Fields
///
/// * `header` - The text after the marker on the header line, with surrounding whitespace
///   removed.
/// * `sequence` - Every following line up to the next header, joined with line terminators
///   removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub header: String,
    pub sequence: String,
}

/// Records in the order they were read. Duplicate headers are allowed.
pub type RecordSet = Vec<Record>;

impl Record {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// The number of characters in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }
}
