use clap::{Parser, Subcommand};

use crate::config::probe::{DeviceNameArgs, NumaArgs, WatchArgs};

#[derive(Parser)]
#[command(about, long_about, version)]
pub struct Cli {
    #[arg(long, short, global = true, help = "Log at debug level unless RUST_LOG is set")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the device name of GPU device node paths
    #[command(name = "device-name")]
    DeviceName(DeviceNameArgs),
    /// Resolve the NUMA node of a GPU from its PCI bus id
    Numa(NumaArgs),
    /// Print filesystem events for the given paths
    Watch(WatchArgs),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use similar_asserts::assert_eq;

    use super::*;

    #[test]
    fn test_parse_device_name() {
        let cli = Cli::try_parse_from(["gpu-probe", "device-name", "/dev/nvidia0", "/dev/nvidia1"])
            .unwrap();
        match cli.command {
            Commands::DeviceName(args) => {
                assert_eq!(args.paths, vec!["/dev/nvidia0", "/dev/nvidia1"]);
            }
            _ => panic!("expected device-name"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli =
            Cli::try_parse_from(["gpu-probe", "numa", "--bus-id", "0000:01:00.0", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_device_name_requires_path() {
        assert!(Cli::try_parse_from(["gpu-probe", "device-name"]).is_err());
    }

    #[test]
    fn test_parse_numa_defaults_root() {
        let cli = Cli::try_parse_from(["gpu-probe", "numa", "--bus-id", "0000:01:00.0"]).unwrap();
        match cli.command {
            Commands::Numa(args) => {
                assert_eq!(args.bus_id, "0000:01:00.0");
                if std::env::var_os("GPU_PROBE_PCI_DEVICES_ROOT").is_none() {
                    assert_eq!(
                        args.pci_devices_root,
                        PathBuf::from(gpu_util::DEFAULT_PCI_DEVICES_ROOT)
                    );
                }
            }
            _ => panic!("expected numa"),
        }
    }

    #[test]
    fn test_parse_watch() {
        let cli =
            Cli::try_parse_from(["gpu-probe", "watch", "--max-events", "2", "/a", "/b"]).unwrap();
        match cli.command {
            Commands::Watch(args) => {
                assert!(!cli.verbose);
                assert_eq!(args.max_events, Some(2));
                assert_eq!(args.paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
            }
            _ => panic!("expected watch"),
        }
    }
}
