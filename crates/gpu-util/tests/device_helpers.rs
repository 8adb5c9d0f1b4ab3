use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use gpu_util::device_name_from_path;
use gpu_util::files;
use gpu_util::numa_node;
use gpu_util::NumaAffinity;
use gpu_util::PciBusId;
use gpu_util::UtilError;
use similar_asserts::assert_eq;
use tempfile::TempDir;

/// A fake `/sys/bus/pci/devices` holding one entry per `(dir, numa_node)`.
fn fake_pci_tree(devices: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().unwrap();
    for (dir, numa) in devices {
        let device_dir = root.path().join(dir);
        fs::create_dir_all(&device_dir).unwrap();
        fs::write(device_dir.join("numa_node"), numa).unwrap();
    }
    root
}

#[test]
fn device_names_for_plugin_paths() {
    let paths = ["/dev/nvidia0", "/dev/nvidia1", "/dev/nvidiactl", "/dev/nvidia-uvm"];
    let names: Vec<_> = paths
        .iter()
        .filter_map(|p| device_name_from_path(p).ok())
        .collect();
    assert_eq!(names, vec!["nvidia0", "nvidia1"]);
}

#[test]
fn numa_affinity_per_gpu() {
    let root = fake_pci_tree(&[
        (":01:00.0", "0\n"),
        (":41:00.0", "1\n"),
        (":81:00.0", "-1\n"),
    ]);

    let resolve = |id: &str| numa_node(&PciBusId::new(id), root.path());

    assert_eq!(resolve("0000:01:00.0").unwrap().node(), Some(0));
    assert_eq!(resolve("0000:41:00.0").unwrap().node(), Some(1));
    assert_eq!(resolve("0000:81:00.0").unwrap(), NumaAffinity::NONE);
    assert!(matches!(
        resolve("0000:c1:00.0"),
        Err(UtilError::TopologyRead { .. })
    ));
}

#[test]
fn numa_parse_error_keeps_source() {
    let root = fake_pci_tree(&[(":01:00.0", "abc")]);
    let err = numa_node(&PciBusId::new("0000:01:00.0"), root.path()).unwrap_err();

    assert!(matches!(err, UtilError::TopologyParse { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn watcher_sees_device_file_removal() {
    let dir = TempDir::new().unwrap();
    let socket = dir.path().join("nvidia.sock");
    fs::write(&socket, "").unwrap();

    let watcher = files([&socket]).unwrap();
    assert_eq!(watcher.watched_paths(), &[socket.clone()][..]);

    fs::remove_file(&socket).unwrap();

    let event = watcher
        .recv_timeout(Duration::from_secs(5))
        .expect("no event within timeout")
        .unwrap();
    assert!(event.paths.contains(&socket), "unexpected event {event:?}");
    watcher.close();
}

#[test]
fn watcher_reports_failing_path() {
    let dir = TempDir::new().unwrap();
    let missing: PathBuf = dir.path().join("not-there");

    match files([dir.path().to_path_buf(), missing.clone()]) {
        Err(UtilError::WatchSetup { path, .. }) => assert_eq!(path, Some(missing)),
        other => panic!("unexpected result: {other:?}"),
    }
}
