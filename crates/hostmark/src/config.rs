//! Configuration for fingerprint generation.

use std::path::PathBuf;

use crate::source::DEFAULT_MACHINE_ID_PATH;

/// Configuration for the fingerprint pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Path to the machine identifier file.
    pub machine_id_path: PathBuf,
    /// Optional partition salt, scoping tokens per product or tenant.
    pub salt: Option<String>,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            machine_id_path: PathBuf::from(DEFAULT_MACHINE_ID_PATH),
            salt: None,
        }
    }
}

impl FingerprintConfig {
    /// Override the identifier source path.
    pub fn with_machine_id_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.machine_id_path = path.into();
        self
    }

    /// Set the partition salt.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_machine_id() {
        let config = FingerprintConfig::default();
        assert_eq!(config.machine_id_path, PathBuf::from("/etc/machine-id"));
        assert_eq!(config.salt, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = FingerprintConfig::default()
            .with_machine_id_path("/tmp/mid")
            .with_salt("tenant-7");
        assert_eq!(config.machine_id_path, PathBuf::from("/tmp/mid"));
        assert_eq!(config.salt.as_deref(), Some("tenant-7"));
    }
}
