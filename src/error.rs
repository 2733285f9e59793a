use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("catalog list `{0}` must not be empty")]
    EmptyCatalog(&'static str),
    #[error("invalid range for `{name}`: {min}..={max}")]
    InvalidRange {
        name: &'static str,
        min: i64,
        max: i64,
    },
    #[error("probability `{name}` must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
