use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UtilError>;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("path ({path}) is not a valid GPU device path")]
    InvalidPath { path: String },

    /// `path` is `None` when the watcher itself could not be created.
    #[error("failed to set up file watch{}", watch_target(.path))]
    WatchSetup {
        path: Option<PathBuf>,
        #[source]
        source: notify::Error,
    },

    #[error("failed to read NUMA information from {bus_id} busID {path:?} file")]
    TopologyRead {
        bus_id: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing value {value:?} for NUMA node")]
    TopologyParse {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

fn watch_target(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" for {}", path.display()),
        None => String::new(),
    }
}
