//! Queue files on disk: load/save JSON snapshots with version history.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::Utc;
use docket::{DocketError, QueueConfig, QueueSnapshot};

/// Timestamp format of backup file names.
const HISTORY_TIMESTAMP: &str = "%Y-%m-%dT%H-%M-%S-%3f";

/// Error reading or writing a queue or config file.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be opened, created or listed.
    Io { path: PathBuf, source: std::io::Error },
    /// The file content is not a valid snapshot or config.
    Parse { path: PathBuf, source: DocketError },
    /// A requested backup does not exist.
    MissingVersion { index: usize, available: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => write!(f, "'{}': {}", path.display(), source),
            StoreError::Parse { path, source } => {
                write!(f, "Failed to parse '{}': {}", path.display(), source)
            }
            StoreError::MissingVersion { index, available } => write!(
                f,
                "History version {} not found (only {} versions available)",
                index, available
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Parse { source, .. } => Some(source),
            StoreError::MissingVersion { .. } => None,
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Load a queue snapshot.
pub fn load(path: impl AsRef<Path>) -> Result<QueueSnapshot, StoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(io_error(path))?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Write a queue snapshot, creating parent directories as needed.
pub fn save(snapshot: &QueueSnapshot, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
    }

    let file = File::create(path).map_err(io_error(path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), snapshot).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

/// Save, first copying the current file into the history directory.
///
/// ```text
/// data/
/// ├── queue.json                          # Current version
/// └── queue.history/
///     └── 2025-01-12T10-00-00-000.json    # Previous version
/// ```
pub fn save_with_history(
    snapshot: &QueueSnapshot,
    path: impl AsRef<Path>,
) -> Result<(), StoreError> {
    let path = path.as_ref();

    if path.exists() {
        let history_dir = history_directory(path);
        fs::create_dir_all(&history_dir).map_err(io_error(&history_dir))?;

        let timestamp = Utc::now().format(HISTORY_TIMESTAMP).to_string();
        let backup = history_dir.join(format!("{}.json", timestamp));
        fs::copy(path, &backup).map_err(io_error(&backup))?;
    }

    save(snapshot, path)
}

/// Backups of a queue file, newest first.
pub fn list_history(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, StoreError> {
    let history_dir = history_directory(path.as_ref());

    if !history_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&history_dir)
        .map_err(io_error(&history_dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    entries.sort_by(|a, b| b.cmp(a));
    Ok(entries)
}

/// Load one backup; 0 is the newest.
pub fn load_history(path: impl AsRef<Path>, index: usize) -> Result<QueueSnapshot, StoreError> {
    let history = list_history(&path)?;
    let version = history.get(index).ok_or(StoreError::MissingVersion {
        index,
        available: history.len(),
    })?;
    load(version)
}

/// Load the `--config` file, or the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<QueueConfig, StoreError> {
    let Some(path) = path else {
        return Ok(QueueConfig::default());
    };

    let json = fs::read_to_string(path).map_err(io_error(path))?;
    QueueConfig::from_json(&json).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn history_directory(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}
