use crate::error::TfamError;
use std::fs::File;
use std::io::{stdin, BufReader, Read};
use std::path::Path;

pub mod fasta;

pub type GenericBufReader = BufReader<Box<dyn Read>>;

/// Creates a `BufReader` for the given input option. A path opens that file, otherwise
/// standard input is used.
///
/// # Errors
///
/// Returns `TfamError::Io` if the file cannot be opened for reading.
pub fn open_input(input: Option<&str>) -> Result<GenericBufReader, TfamError> {
    let reader = match input {
        Some(path) => {
            let file = File::open(Path::new(path)).map_err(|e| TfamError::io(path, e))?;
            Box::new(file) as Box<dyn Read>
        }
        None => Box::new(stdin()) as Box<dyn Read>,
    };
    Ok(BufReader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;
    use std::io::Write;

    #[test]
    fn missing_file_is_an_io_error() {
        let Err(err) = open_input(Some("this/path/does/not/exist.fasta")) else {
            panic!("opening a missing file should fail");
        };
        assert!(matches!(err, TfamError::Io { ref path, .. } if path == "this/path/does/not/exist.fasta"));
    }

    #[test]
    fn opens_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">a\nAC").unwrap();

        let reader = open_input(file.path().to_str()).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec![">a", "AC"]);
    }
}
