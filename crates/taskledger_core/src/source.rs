//! Line-source collaborators for loading a collection.
//!
//! # Responsibility
//! - Open file-backed task sources and feed their framed lines to the
//!   collection load.
//! - Cover channel-agnostic callers through any `BufRead`.
//! - Emit `tasks_load` logging events with durations and status.
//!
//! # Invariants
//! - The core never learns which channel the lines came from; it only
//!   sees sequential line access.
//! - A failed load never hands back a partial collection.

use crate::collection::TaskCollection;
use crate::parse::LoadError;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Source-layer error for opening, reading and loading framed task input.
#[derive(Debug)]
pub enum SourceError {
    /// The source file cannot be opened.
    Unavailable { path: PathBuf, source: io::Error },
    /// The source failed mid-stream while lines were being read.
    Read(io::Error),
    /// The lines were read but the framed records did not load.
    Load(LoadError),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "cannot open task source `{}`: {source}", path.display())
            }
            Self::Read(err) => write!(f, "failed reading task source: {err}"),
            Self::Load(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
            Self::Read(err) => Some(err),
            Self::Load(err) => Some(err),
        }
    }
}

impl From<LoadError> for SourceError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

/// Opens a task file and loads its framed records.
///
/// # Side effects
/// - Emits `tasks_load` logging events with duration and status.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TaskCollection, SourceError> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=tasks_load module=source status=start mode=file");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!(
                "event=tasks_load module=source status=error mode=file duration_ms={} error_code=source_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(SourceError::Unavailable {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    finish_load("file", started_at, read_collection(BufReader::new(file)))
}

/// Loads framed records from any buffered reader.
///
/// Covers standard input and in-memory sources without the core caring
/// which channel supplied the lines.
pub fn load_from_reader(reader: impl BufRead) -> Result<TaskCollection, SourceError> {
    let started_at = Instant::now();
    info!("event=tasks_load module=source status=start mode=reader");
    finish_load("reader", started_at, read_collection(reader))
}

fn read_collection(reader: impl BufRead) -> Result<TaskCollection, SourceError> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(SourceError::Read)?;
    Ok(TaskCollection::from_lines(lines)?)
}

fn finish_load(
    mode: &str,
    started_at: Instant,
    result: Result<TaskCollection, SourceError>,
) -> Result<TaskCollection, SourceError> {
    match &result {
        Ok(tasks) => info!(
            "event=tasks_load module=source status=ok mode={} count={} duration_ms={}",
            mode,
            tasks.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=tasks_load module=source status=error mode={} duration_ms={} error_code=tasks_load_failed error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}
