use std::io::Write;

use anyhow::{Context, Result};
use gpu_util::{files, FileWatcher};

use crate::config::WatchArgs;

pub fn run_watch(args: WatchArgs, out: &mut impl Write) -> Result<()> {
    let watcher = files(&args.paths).context("create file watcher failed")?;
    tracing::info!("Watching {} path(s)", watcher.watched_paths().len());

    let result = print_events(&watcher, args.max_events, out);
    watcher.close();
    result
}

fn print_events(
    watcher: &FileWatcher,
    max_events: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let mut printed = 0;

    while max_events.map_or(true, |max| printed < max) {
        let Some(event) = watcher.recv() else {
            tracing::info!("File watcher event source closed");
            break;
        };

        match event {
            Ok(event) => {
                let paths: Vec<_> = event.paths.iter().map(|p| p.display().to_string()).collect();
                writeln!(out, "{:?}\t{}", event.kind, paths.join(","))
                    .context("write event failed")?;
                printed += 1;
            }
            Err(e) => tracing::warn!("File watch error: {e}"),
        }
    }
    Ok(())
}
