use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
pub struct DeviceNameArgs {
    #[arg(required = true, help = "Device node paths, e.g. /dev/nvidia0")]
    pub paths: Vec<String>,
}

#[derive(Parser)]
pub struct NumaArgs {
    #[arg(long, help = "PCI bus id as reported by NVML, e.g. 0000:3B:00.0")]
    pub bus_id: String,

    #[arg(
        long,
        help = "Directory holding one entry per PCI device",
        env = "GPU_PROBE_PCI_DEVICES_ROOT",
        value_hint = clap::ValueHint::DirPath,
        default_value = gpu_util::DEFAULT_PCI_DEVICES_ROOT
    )]
    pub pci_devices_root: PathBuf,
}

#[derive(Parser)]
pub struct WatchArgs {
    #[arg(long, help = "Stop after this many events, runs until interrupted if unset")]
    pub max_events: Option<usize>,

    #[arg(help = "Paths to watch; none is allowed")]
    pub paths: Vec<PathBuf>,
}
