//! Configuration type definitions.

use std::path::{Path, PathBuf};

/// Where the collector service reads its configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedConfigSource {
    /// A configuration document on disk. Existed when it was resolved.
    File(PathBuf),
    /// A configuration document passed directly through the environment.
    Inline(String),
}

impl ResolvedConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedConfigSource::File(path) => Some(path),
            ResolvedConfigSource::Inline(_) => None,
        }
    }
}

/// Bundled configuration profiles.
///
/// Each profile ships a container image path and a path relative to a
/// source checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultConfigPaths {
    pub docker_gateway: PathBuf,
    pub docker_otlp: PathBuf,
    pub local_gateway: PathBuf,
    pub local_otlp: PathBuf,
}

/// Settings for the launcher itself, read from its own environment.
///
/// These never reach the collector service.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Collector service executable, a path or a name looked up on PATH
    pub service_bin: String,
    /// Restrict launcher logs to errors
    pub quiet: bool,
}

impl LauncherConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
