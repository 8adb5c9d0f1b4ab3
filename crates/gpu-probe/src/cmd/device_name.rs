use std::io::Write;

use anyhow::{bail, Context, Result};
use gpu_util::device_name_from_path;

use crate::config::DeviceNameArgs;

/// Prints `<path>\t<name>` per valid path; fails after printing if any path
/// was invalid.
pub fn run_device_name(args: DeviceNameArgs, out: &mut impl Write) -> Result<()> {
    let mut invalid = 0;

    for path in &args.paths {
        match device_name_from_path(path) {
            Ok(name) => writeln!(out, "{path}\t{name}").context("write device name failed")?,
            Err(e) => {
                tracing::warn!("{e}");
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} path(s) are not GPU device paths", args.paths.len());
    }
    Ok(())
}
