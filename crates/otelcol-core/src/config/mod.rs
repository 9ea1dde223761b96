//! # Configuration Sources
//!
//! Decides which configuration document the collector service starts with.
//!
//! Sources in priority order (higher overrides lower):
//! 1. **`--config` flag** - explicit path on the command line
//! 2. **`SPLUNK_CONFIG_YAML`** - inline payload, only when no flag was given
//! 3. **`SPLUNK_CONFIG`** - path in the environment
//! 4. **Bundled gateway profile** - local checkout, then container image
//!
//! ## Example
//!
//! ```rust,no_run
//! use otelcol_core::args::ArgumentVector;
//! use otelcol_core::config::{DefaultConfigPaths, resolve_config_source};
//! use otelcol_core::env::EnvMap;
//! use otelcol_core::probe::FsProbe;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut args = ArgumentVector::from_process();
//!     let mut env = EnvMap::from_process();
//!     let source =
//!         resolve_config_source(&mut args, &mut env, &FsProbe, &DefaultConfigPaths::default())?;
//!     println!("{:?}", source);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod resolve;
pub mod types;

// Public API exports
pub use resolve::resolve_config_source;
pub use types::{DefaultConfigPaths, LauncherConfig, ResolvedConfigSource};
