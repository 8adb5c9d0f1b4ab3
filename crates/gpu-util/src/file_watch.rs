//! Filesystem change notifications for a fixed set of paths.
//!
//! [`files`] registers every path with a single platform watcher (inotify on
//! Linux) and hands back a [`FileWatcher`] that owns it. Events are passed
//! through exactly as `notify` reports them.

use std::path::Path;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use notify::Event;
use notify::RecommendedWatcher;
use notify::RecursiveMode;
use notify::Watcher;
use tracing::debug;

use crate::error::Result;
use crate::error::UtilError;

/// Owned handle over one filesystem subscription.
///
/// The subscription is released by [`FileWatcher::close`] or when the handle
/// is dropped. Intended for a single consumer draining the event stream.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    events: mpsc::Receiver<notify::Result<Event>>,
    watched: Vec<PathBuf>,
}

/// Creates a [`FileWatcher`] for the given paths, registered in order.
///
/// If any registration fails the partially built watcher is released before
/// the error is returned. An empty list yields a watcher with nothing
/// registered.
pub fn files<I, P>(paths: I) -> Result<FileWatcher>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut watcher = FileWatcher::new()?;
    for path in paths {
        if let Err(err) = watcher.add(path) {
            watcher.close();
            return Err(err);
        }
    }
    Ok(watcher)
}

impl FileWatcher {
    fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let watcher = notify::recommended_watcher(tx)
            .map_err(|source| UtilError::WatchSetup { path: None, source })?;

        Ok(Self {
            watcher,
            events: rx,
            watched: Vec::new(),
        })
    }

    /// Registers one more path (non-recursively).
    pub fn add(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Adding file watch for {}", path.display());

        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|source| UtilError::WatchSetup {
                path: Some(path.to_path_buf()),
                source,
            })?;
        self.watched.push(path.to_path_buf());
        Ok(())
    }

    /// Paths registered so far, in registration order.
    pub fn watched_paths(&self) -> &[PathBuf] {
        &self.watched
    }

    /// Blocks until the next event, or returns `None` once the watcher's
    /// event source has shut down.
    pub fn recv(&self) -> Option<notify::Result<Event>> {
        self.events.recv().ok()
    }

    pub fn try_recv(&self) -> Option<notify::Result<Event>> {
        self.events.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<notify::Result<Event>> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Blocking iterator over events.
    pub fn iter(&self) -> impl Iterator<Item = notify::Result<Event>> + '_ {
        self.events.iter()
    }

    /// Releases the underlying subscription.
    pub fn close(self) {
        debug!("Closing file watch on {} path(s)", self.watched.len());
        drop(self);
    }
}

impl std::fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatcher")
            .field("watched", &self.watched)
            .finish_non_exhaustive()
    }
}
