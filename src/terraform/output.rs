//! Output file locations and document writing.

use crate::terraform::RenderError;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// The three documents produced by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Providers,
    Acceptors,
    Dialers,
}

impl OutputKind {
    /// All kinds, in the order they are written
    pub const ALL: [OutputKind; 3] = [Self::Providers, Self::Acceptors, Self::Dialers];

    /// Default file name of this document
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Providers => "providers.tf",
            Self::Acceptors => "acceptors.tf",
            Self::Dialers => "dialers.tf",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Providers => write!(f, "providers"),
            Self::Acceptors => write!(f, "acceptors"),
            Self::Dialers => write!(f, "dialers"),
        }
    }
}

/// Where each document is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub providers: PathBuf,
    pub acceptors: PathBuf,
    pub dialers: PathBuf,
}

impl OutputPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            providers: dir.join(OutputKind::Providers.file_name()),
            acceptors: dir.join(OutputKind::Acceptors.file_name()),
            dialers: dir.join(OutputKind::Dialers.file_name()),
        }
    }

    pub fn path(&self, kind: OutputKind) -> &Path {
        match kind {
            OutputKind::Providers => &self.providers,
            OutputKind::Acceptors => &self.acceptors,
            OutputKind::Dialers => &self.dialers,
        }
    }
}

/// Write a rendered document, replacing any existing file
pub fn write_document(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
