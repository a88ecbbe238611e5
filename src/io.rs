use crate::error::TfamError;
use crate::record::{Record, MARKER};
use crate::stats::Report;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// # Errors
///
/// Returns `TfamError::Io` if the output file cannot be created.
pub fn get_writer(output: Option<&str>) -> Result<BufWriter<Box<dyn Write>>, TfamError> {
    let sink = match output {
        Some(path) => {
            let file = File::create(Path::new(path)).map_err(|e| TfamError::io(path, e))?;
            Box::new(file) as Box<dyn Write>
        }
        None => Box::new(stdout()) as Box<dyn Write>,
    };
    Ok(BufWriter::new(sink))
}

/// Formats a record as FASTA and writes it to the provided writer. The sequence is written on a
/// single line, with no wrapping.
///
/// # Arguments
///
/// * `writer` - A mutable reference to an object that implements the `Write` trait. Since this is
///   `std::io::Write` and *not* `std::fmt::Write`, this does not accept Strings. It is acceptable
///   to use a `std::io::Cursor` or a `Vec<u8>` instead.
/// * `record` - The record to write.
pub fn write_record(writer: &mut impl Write, record: &Record) -> std::io::Result<()> {
    writeln!(writer, "{MARKER}{}\n{}", record.header, record.sequence)
}

/// Writes every record, in order.
pub fn write_fasta(writer: &mut impl Write, records: &[Record]) -> std::io::Result<()> {
    records
        .iter()
        .try_for_each(|record| write_record(writer, record))
}

/// Writes each line of a report, terminated by a newline.
pub fn write_report(writer: &mut impl Write, report: &Report) -> std::io::Result<()> {
    report
        .lines()
        .iter()
        .try_for_each(|line| writeln!(writer, "{line}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::fasta::parse;
    use crate::stats::EntryLength;

    fn to_string(records: &[Record]) -> String {
        let mut out = Vec::new();
        write_fasta(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_line_records() {
        let records = vec![Record::new("a", "ACGT"), Record::new("b desc", "")];
        assert_eq!(to_string(&records), ">a\nACGT\n>b desc\n\n");
    }

    #[test]
    fn nothing_to_write() {
        assert_eq!(to_string(&[]), "");
    }

    #[test]
    fn round_trip_drops_only_wrapping() {
        let input = ">x  first\nACGT\nAC\n\n>y\nTT\n>x  first\nGG\n";
        let parsed = parse(input.lines());

        let written = to_string(&parsed);
        assert_eq!(written, ">x  first\nACGTAC\n>y\nTT\n>x  first\nGG\n");
        assert_eq!(parse(written.lines()), parsed);
    }

    #[test]
    fn report_lines() {
        let report: Report = EntryLength::table(&[Record::new("a", "AC")])
            .into_iter()
            .collect();
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        assert_eq!(out, b"a\t2\n");
    }

    #[test]
    fn file_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.fasta");
        {
            let mut writer = get_writer(path.to_str()).unwrap();
            write_fasta(&mut writer, &[Record::new("a", "AC")]).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">a\nAC\n");
    }

    #[test]
    fn uncreatable_output() {
        let Err(err) = get_writer(Some("no/such/directory/out.fasta")) else {
            panic!("creating a file in a missing directory should fail");
        };
        assert!(err.to_string().contains("no/such/directory/out.fasta"));
    }
}
