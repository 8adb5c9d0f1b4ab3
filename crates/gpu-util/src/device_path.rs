use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::error::UtilError;

/// Device nodes are `/dev/nvidia<N>`; anything may precede `/dev/` (e.g. a
/// host root mounted into a container) but nothing may follow the digits.
static GPU_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dev/(nvidia[0-9]+)$").expect("GPU path regex must compile"));

/// Extracts the device name (`nvidia<N>`) from a GPU device node path.
///
/// The returned slice borrows from `path`.
pub fn device_name_from_path(path: &str) -> Result<&str> {
    GPU_PATH_REGEX
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
        .ok_or_else(|| UtilError::InvalidPath {
            path: path.to_string(),
        })
}
