//! Component registry handed to the collector service.
//!
//! The launcher does not build pipelines. It only records which receivers,
//! processors, exporters and extensions this distribution ships, so the
//! service can be told what it is allowed to instantiate.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::OtelcolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Receiver,
    Processor,
    Exporter,
    Extension,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Receiver => "receiver",
            ComponentKind::Processor => "processor",
            ComponentKind::Exporter => "exporter",
            ComponentKind::Extension => "extension",
        }
    }

    pub fn all() -> &'static [ComponentKind] {
        &[
            ComponentKind::Receiver,
            ComponentKind::Processor,
            ComponentKind::Exporter,
            ComponentKind::Extension,
        ]
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to build default components: duplicate {kind} '{name}'")]
    DuplicateComponent { kind: ComponentKind, name: String },
}

impl OtelcolError for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateComponent { .. } => "REGISTRY_DUPLICATE_COMPONENT",
        }
    }
}

const RECEIVERS: &[&str] = &[
    "fluentforward",
    "hostmetrics",
    "jaeger",
    "k8s_cluster",
    "kubeletstats",
    "otlp",
    "prometheus_simple",
    "receiver_creator",
    "sapm",
    "signalfx",
    "smartagent",
    "splunk_hec",
    "zipkin",
];

const PROCESSORS: &[&str] = &[
    "attributes",
    "batch",
    "filter",
    "k8s_tagger",
    "memory_limiter",
    "metricstransform",
    "resource",
    "resourcedetection",
    "span",
];

const EXPORTERS: &[&str] = &[
    "file",
    "logging",
    "otlp",
    "otlphttp",
    "sapm",
    "signalfx",
    "splunk_hec",
];

const EXTENSIONS: &[&str] = &[
    "health_check",
    "http_forwarder",
    "memory_ballast",
    "pprof",
    "smartagent",
    "zpages",
];

/// Component names known to the service, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentRegistry {
    components: BTreeMap<ComponentKind, Vec<String>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of everything this distribution ships.
    pub fn distribution() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (kind, names) in [
            (ComponentKind::Receiver, RECEIVERS),
            (ComponentKind::Processor, PROCESSORS),
            (ComponentKind::Exporter, EXPORTERS),
            (ComponentKind::Extension, EXTENSIONS),
        ] {
            for name in names {
                registry.register(kind, name)?;
            }
        }
        Ok(registry)
    }

    /// Add a component. Names are unique per kind; the same name may be
    /// both a receiver and an exporter.
    pub fn register(&mut self, kind: ComponentKind, name: &str) -> Result<(), RegistryError> {
        let names = self.components.entry(kind).or_default();
        if names.iter().any(|existing| existing == name) {
            return Err(RegistryError::DuplicateComponent {
                kind,
                name: name.to_string(),
            });
        }
        names.push(name.to_string());
        Ok(())
    }

    pub fn names(&self, kind: ComponentKind) -> &[String] {
        self.components.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.components.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
