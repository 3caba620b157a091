//! File watching for regeneration.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// File or directory was created
    Created(PathBuf),

    /// File contents or metadata changed
    Modified(PathBuf),

    /// File or directory was deleted
    Deleted(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::Created(path) | WatchEvent::Modified(path) | WatchEvent::Deleted(path) => {
                path
            }
        }
    }
}

/// Errors that can occur while setting up a watcher.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Failed to create file watcher: {0}")]
    Create(notify::Error),

    #[error("Failed to watch {}: {source}", path.display())]
    Watch { path: PathBuf, source: notify::Error },
}

/// Recursive watcher over a set of directories.
///
/// Events are forwarded over a plain channel, one per affected path, in the
/// order the platform delivers them. Dropping the watcher closes the channel.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive events. Paths that don't
    /// exist are skipped with a warning.
    pub fn new(paths: &[PathBuf]) -> Result<(Self, mpsc::Receiver<WatchEvent>), WatchError> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            match res {
                Ok(event) => {
                    for path in &event.paths {
                        if let Some(e) = classify_event(path, &event.kind) {
                            let _ = tx.send(e);
                        }
                    }
                }
                Err(e) => tracing::warn!("File watch error: {}", e),
            }
        })
        .map_err(WatchError::Create)?;

        for path in paths {
            if !path.exists() {
                tracing::warn!("Not watching {}: path does not exist", path.display());
                continue;
            }
            watcher
                .watch(path, RecursiveMode::Recursive)
                .map_err(|source| WatchError::Watch {
                    path: path.clone(),
                    source,
                })?;
            tracing::debug!("Watching {}", path.display());
        }

        Ok((Self { _watcher: watcher }, rx))
    }
}

/// Classify a notify event into a WatchEvent.
///
/// Access events are dropped since every pass reads the watched files.
/// Unclassified kinds (`Any`, `Other`, rescans) count as modifications.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) | EventKind::Any | EventKind::Other => {
            Some(WatchEvent::Modified(path.to_path_buf()))
        }
        EventKind::Access(_) => None,
    }
}
