use std::fmt;
use std::path::Path;

use crate::{error::GenerateError, records::Dataset, sql::render_script};

/// Per-table row counts of a generated dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub users: usize,
    pub surveys: usize,
    pub questions: usize,
    pub options: usize,
    pub responses: usize,
    pub histories: usize,
}

impl Summary {
    pub fn of(dataset: &Dataset) -> Self {
        Self {
            users: dataset.users.len(),
            surveys: dataset.surveys.len(),
            questions: dataset.questions.len(),
            options: dataset.options.len(),
            responses: dataset.responses.len(),
            histories: dataset.histories.len(),
        }
    }

    /// One `INSERT` is emitted per row.
    pub fn total(&self) -> usize {
        self.users
            + self.surveys
            + self.questions
            + self.options
            + self.responses
            + self.histories
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   - users: {}", self.users)?;
        writeln!(f, "   - surveys: {}", self.surveys)?;
        writeln!(f, "   - questions: {}", self.questions)?;
        writeln!(f, "   - options: {}", self.options)?;
        writeln!(f, "   - responses: {}", self.responses)?;
        writeln!(f, "   - response histories: {}", self.histories)?;
        write!(f, "   - total INSERT statements: {}", self.total())
    }
}

/// Renders `dataset` and writes it to `path`, replacing whatever was there.
pub fn write_dataset(
    path: &Path,
    dataset: &Dataset,
) -> Result<Summary, GenerateError> {
    let script = render_script(dataset);

    std::fs::write(path, script).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Wrote test data");

    Ok(Summary::of(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::tests::seeded;

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_data.sql");
        std::fs::write(&path, "stale contents").unwrap();

        let dataset = seeded(51).generate();
        let summary = write_dataset(&path, &dataset).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale contents"));
        assert_eq!(written, render_script(&dataset));
        assert_eq!(summary.total(), dataset.statement_count());
        assert_eq!(summary.users, 10);
    }

    #[test]
    fn seeded_runs_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.sql");
        let second = dir.path().join("b.sql");

        write_dataset(&first, &seeded(52).generate()).unwrap();
        write_dataset(&second, &seeded(52).generate()).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("test_data.sql");

        let err = write_dataset(&path, &Dataset::default()).unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }));
        assert!(err.to_string().contains("test_data.sql"));
    }

    #[test]
    fn summary_lists_every_table() {
        let summary = Summary::of(&seeded(53).generate());
        let text = summary.to_string();
        assert_eq!(text.lines().count(), 7);
        assert!(text.ends_with(&format!(
            "total INSERT statements: {}",
            summary.total()
        )));
    }
}
