//! NUMA affinity of a GPU, read from the PCI topology in sysfs.

use std::ffi::c_char;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use nvml_wrapper::struct_wrappers::device::PciInfo;
use nvml_wrapper_sys::bindings::nvmlPciInfo_t;
use tracing::debug;

use crate::error::Result;
use crate::error::UtilError;

/// Where the kernel exposes one directory per PCI device.
pub const DEFAULT_PCI_DEVICES_ROOT: &str = "/sys/bus/pci/devices";

/// Width of the NUL-terminated bus id buffer in `nvmlPciInfo_t`.
pub const PCI_BUS_ID_BUFFER_SIZE: usize = 32;

const DOMAIN_ZERO_PREFIX: &str = "0000";

/// A PCI bus id as NVML reports it: a fixed buffer holding a NUL-terminated
/// ASCII string such as `0000:01:00.0`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PciBusId([c_char; PCI_BUS_ID_BUFFER_SIZE]);

impl PciBusId {
    /// Copies `bus_id` into a fresh buffer, truncated so the terminating NUL
    /// always fits.
    pub fn new(bus_id: &str) -> Self {
        let mut buf = [0 as c_char; PCI_BUS_ID_BUFFER_SIZE];
        for (slot, byte) in buf
            .iter_mut()
            .zip(bus_id.bytes().take(PCI_BUS_ID_BUFFER_SIZE - 1))
        {
            *slot = byte as c_char;
        }
        Self(buf)
    }

    /// The bytes before the first NUL, or the whole buffer if there is none.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .iter()
            .map(|&c| c as u8)
            .take_while(|&b| b != 0)
            .collect()
    }

    /// Lower-cased id with a literal leading `0000` removed.
    ///
    /// Only the four characters are stripped, so `0000:01:00.0` becomes
    /// `:01:00.0`.
    fn normalized(&self) -> String {
        let bytes = self.to_bytes();
        let raw = String::from_utf8_lossy(&bytes);
        raw.strip_prefix(DOMAIN_ZERO_PREFIX)
            .unwrap_or(&*raw)
            .to_lowercase()
    }
}

impl From<&nvmlPciInfo_t> for PciBusId {
    fn from(info: &nvmlPciInfo_t) -> Self {
        Self(info.busId)
    }
}

impl From<&PciInfo> for PciBusId {
    fn from(info: &PciInfo) -> Self {
        Self::new(&info.bus_id)
    }
}

impl fmt::Display for PciBusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}

impl fmt::Debug for PciBusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PciBusId").field(&self.to_string()).finish()
    }
}

/// NUMA placement of a device. `node` is only meaningful when `enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumaAffinity {
    pub enabled: bool,
    pub node: i64,
}

impl NumaAffinity {
    pub const NONE: Self = Self {
        enabled: false,
        node: 0,
    };

    pub fn node(&self) -> Option<i64> {
        self.enabled.then_some(self.node)
    }
}

/// Reads `<pci_devices_root>/<bus id>/numa_node` for the device.
///
/// A negative value (the kernel writes `-1`) means the device has no NUMA
/// affinity. Read and parse failures are returned as is; nothing is retried
/// or cached.
pub fn numa_node(bus_id: &PciBusId, pci_devices_root: impl AsRef<Path>) -> Result<NumaAffinity> {
    let numa_node_file = topology_path(pci_devices_root.as_ref(), &bus_id.normalized());
    debug!("Reading NUMA node information from {:?}", numa_node_file);

    let contents = fs::read(&numa_node_file).map_err(|source| UtilError::TopologyRead {
        bus_id: bus_id.to_string(),
        path: numa_node_file.clone(),
        source,
    })?;

    let value = String::from_utf8_lossy(&contents).trim().to_string();
    let node: i64 = value
        .parse()
        .map_err(|source| UtilError::TopologyParse {
            value,
            source,
        })?;

    if node < 0 {
        return Ok(NumaAffinity::NONE);
    }

    Ok(NumaAffinity {
        enabled: true,
        node,
    })
}

/// Joins textually so the bus id always lands under `root`, even when it
/// starts with a separator.
fn topology_path(root: &Path, bus_id: &str) -> PathBuf {
    let mut path = OsString::from(root.as_os_str());
    path.push("/");
    path.push(bus_id);
    path.push("/numa_node");
    PathBuf::from(path)
}
