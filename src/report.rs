use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a single record could not be exported.
#[derive(Error, Debug)]
pub(crate) enum ExportError {
    #[error("invalid publication date {raw:?}")]
    InvalidDate {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("failed to render post")]
    Render(#[from] handlebars::RenderError),
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Message followed by every source, `a: b: c`.
    pub fn chain(&self) -> String {
        anyhow::Chain::new(self)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ")
    }
}

#[derive(Debug)]
pub(crate) enum RecordOutcome {
    Written(PathBuf),
    Failed { url: String, error: ExportError },
}

/// Outcomes of one export pass, in input order.
#[derive(Debug, Default)]
pub(crate) struct ExportReport {
    pub outcomes: Vec<RecordOutcome>,
    /// `(later, earlier)` input positions of written articles sharing a file.
    pub overwrites: Vec<(usize, usize)>,
}

impl ExportReport {
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RecordOutcome::Written(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }

    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            RecordOutcome::Written(path) => Some(path.as_path()),
            RecordOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &ExportError)> {
        self.outcomes.iter().filter_map(|o| match o {
            RecordOutcome::Failed { url, error } => Some((url.as_str(), error)),
            RecordOutcome::Written(_) => None,
        })
    }
}
