//! Test fixtures and helpers.
//!
//! Common setup code for integration tests that need an identifier source
//! on disk.

use std::fs;
use std::path::{Path, PathBuf};

use hostmark::FingerprintConfig;

/// A machine-id file fixture backed by a temporary directory.
///
/// The directory (and the file inside it) is removed on drop.
pub struct MachineIdFixture {
    // Held for its Drop; removing the directory removes the file.
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl MachineIdFixture {
    /// Create a fixture whose machine-id file contains `machine_id` plus a
    /// trailing newline, as systemd writes it.
    pub fn new(machine_id: &str) -> Self {
        let dir = tempfile::tempdir().expect("create fixture dir");
        let path = dir.path().join("machine-id");
        fs::write(&path, format!("{}\n", machine_id)).expect("write fixture file");
        Self { _dir: dir, path }
    }

    /// Create a fixture whose machine-id path does not exist.
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().expect("create fixture dir");
        let path = dir.path().join("machine-id");
        Self { _dir: dir, path }
    }

    /// Create a fixture whose machine-id file is blank.
    pub fn blank() -> Self {
        Self::new("")
    }

    /// Path of the (possibly absent) machine-id file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A fingerprint configuration pointing at this fixture.
    pub fn config(&self) -> FingerprintConfig {
        FingerprintConfig::default().with_machine_id_path(&self.path)
    }
}
