//! Filesystem existence checks used during config resolution.

use std::path::Path;

/// Answers whether a configuration file exists.
///
/// Resolution only ever needs existence, so tests can substitute a fixed
/// set of paths for the real filesystem.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_probe_sees_real_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("agent_config.yaml");
        assert!(!FsProbe.exists(&file));

        std::fs::write(&file, "receivers: {}\n").unwrap();
        assert!(FsProbe.exists(&file));
    }
}
