use thiserror::Error;

#[derive(Error, Debug)]
pub enum TfamError {
    #[error("could not access `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "unknown action `{action}`
the available actions are:
    {available}"
    )]
    UnknownAction { action: String, available: String },
}

impl TfamError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        TfamError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_error_names_path_and_keeps_source() {
        let err = TfamError::io(
            "missing.fasta",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(err.to_string().contains("missing.fasta"));
        let source = err.source().expect("io errors carry their cause");
        assert!(source.to_string().contains("No such file"));
    }

    #[test]
    fn unknown_action_lists_alternatives() {
        let err = TfamError::UnknownAction {
            action: "reverse".to_string(),
            available: "upper, lower".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("`reverse`"));
        assert!(msg.contains("upper, lower"));
    }
}
