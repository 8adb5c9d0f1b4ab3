mod cmd;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::config::Cli;
use crate::config::Commands;

/// Reports panics through tracing as well as the default stderr message.
fn install_panic_logger() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(location = %location, "gpu-probe panicked: {info}");
        previous(info);
    }));
}

fn main() -> Result<()> {
    install_panic_logger();

    let cli = Cli::parse();
    if cli.verbose {
        gpu_util::logging::init_with_level(LevelFilter::DEBUG);
    } else {
        gpu_util::logging::init();
    }

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::DeviceName(args) => cmd::run_device_name(args, &mut stdout),
        Commands::Numa(args) => cmd::run_numa(args, &mut stdout),
        Commands::Watch(args) => cmd::run_watch(args, &mut stdout),
    }
}
