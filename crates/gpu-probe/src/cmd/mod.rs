//! Command layer - one entry point per subcommand

pub mod device_name;
pub mod numa;
pub mod watch;

pub use device_name::run_device_name;
pub use numa::run_numa;
pub use watch::run_watch;
