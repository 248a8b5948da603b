//! Errors that can occur while checking a font source.

use std::{path::PathBuf, process::ExitStatus};

use skrifa::{raw::ReadError, Tag};
use thiserror::Error;

use crate::langsys::Language;

/// An error that stops processing of a font or of the whole run.
///
/// Kerning mismatches are not errors; they are reported as
/// [`Mismatch`](crate::Mismatch) values.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read compiled font: {0}")]
    Read(#[from] ReadError),
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write report: {0}")]
    Report(#[source] std::io::Error),
    #[error("unrecognized source format for '{0}', expected a .ufo directory")]
    UnrecognizedFormat(PathBuf),
    #[error("could not load '{path}': {source}")]
    SourceLoad {
        path: PathBuf,
        #[source]
        source: norad::error::FontLoadError,
    },
    #[error("could not write restricted source '{path}': {source}")]
    SourceWrite {
        path: PathBuf,
        #[source]
        source: norad::error::FontWriteError,
    },
    #[error("invalid feature pattern: {0}")]
    FeaturePattern(#[from] regex::Error),
    #[error("feature includes nested deeper than {limit} levels at '{path}'")]
    IncludeDepth { path: PathBuf, limit: usize },
    #[error("could not launch compiler '{program}': {source}")]
    CompilerSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("compiler exited with {status}\n{stderr}")]
    CompilerFailed { status: ExitStatus, stderr: String },
    #[error("compiled font has no glyph names")]
    MissingGlyphNames,
    #[error("could not rebuild font for shaping: {0}")]
    Rebuild(String),
    #[error("shaping engine rejected the font: {0}")]
    Shaping(String),
    #[error(
        "isolation failed for script={script} language={language}: \
         expected [{first}, {second}] but the shaper produced glyphs {shaped:?}"
    )]
    IsolationFailed {
        script: Tag,
        language: Language,
        first: String,
        second: String,
        shaped: Vec<u32>,
    },
    #[error("no language systems resolved for script {0}")]
    NoLanguageSystems(Tag),
}

impl Error {
    /// Returns true for errors that invalidate the entire run rather than
    /// a single font.
    ///
    /// These signal a defect in glyph isolation or tag translation, so every
    /// result produced after them would be suspect.
    pub fn is_run_fatal(&self) -> bool {
        matches!(
            self,
            Error::IsolationFailed { .. } | Error::NoLanguageSystems(_)
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
