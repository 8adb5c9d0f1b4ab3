use std::io::Write;

use anyhow::{Context, Result};
use gpu_util::{numa_node, PciBusId};

use crate::config::NumaArgs;

pub fn run_numa(args: NumaArgs, out: &mut impl Write) -> Result<()> {
    let bus_id = PciBusId::new(&args.bus_id);
    tracing::info!(
        "Resolving NUMA node for {} under {}",
        bus_id,
        args.pci_devices_root.display()
    );

    let affinity = numa_node(&bus_id, &args.pci_devices_root)
        .with_context(|| format!("resolve NUMA node for {bus_id} failed"))?;

    let written = match affinity.node() {
        Some(node) => writeln!(out, "numa node {node}"),
        None => writeln!(out, "no numa affinity"),
    };
    written.context("write NUMA node failed")
}
