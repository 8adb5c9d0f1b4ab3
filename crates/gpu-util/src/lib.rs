//! Helpers shared by the GPU device plugin: device node names, file
//! watches and NUMA affinity lookups.

pub mod device_path;
pub mod error;
pub mod file_watch;
pub mod logging;
pub mod numa;

pub use device_path::device_name_from_path;
pub use error::Result;
pub use error::UtilError;
pub use file_watch::files;
pub use file_watch::FileWatcher;
pub use numa::numa_node;
pub use numa::NumaAffinity;
pub use numa::PciBusId;
pub use numa::DEFAULT_PCI_DEVICES_ROOT;
pub use numa::PCI_BUS_ID_BUFFER_SIZE;
