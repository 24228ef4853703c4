use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

/// Watches one directory (non-recursively) and reports whether anything changed.
pub struct DirectoryWatcher {
    path: PathBuf,
    rx: Receiver<()>,
    // Dropping the watcher stops the notifications
    _watcher: RecommendedWatcher,
}

impl DirectoryWatcher {
    /// Start watching `path`. `wake` runs on the notify thread after each event,
    /// typically to request a repaint.
    pub fn new(path: &Path, wake: impl Fn() + Send + 'static) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            if res.is_ok() && tx.send(()).is_ok() {
                wake();
            }
        })?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self {
            path: path.to_path_buf(),
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events. Returns true if at least one arrived since the last poll.
    pub fn poll(&self) -> bool {
        self.rx.try_iter().count() > 0
    }
}
