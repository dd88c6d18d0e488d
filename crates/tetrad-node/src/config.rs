//! Node configuration.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TETRAD_SORTITION` | narrow quorums by sortition (`true`/`false`/`1`/`0`) | `false` |
//! | `TETRAD_SORTITION_BUCKET_SECS` | sortition bucket width in seconds | `60` |
//! | `TETRAD_SEED` | comma-separated `id:category:weight` vertices | four-vertex seed |

use std::time::Duration;

use tetrad_protocols::{default_seed, CoordinatorConfig, CouncilConfig, VertexDraft};

use crate::error::{Error, Result};

/// Node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Vertices registered at startup
    pub seed: Vec<VertexDraft>,

    /// Narrow quorums by sortition
    pub sortition: bool,

    /// Sortition bucket width
    pub bucket: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        let council = CouncilConfig::default();
        Self {
            seed: default_seed(),
            sortition: council.sortition,
            bucket: council.bucket,
        }
    }
}

impl NodeConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("TETRAD_SORTITION") {
            config.sortition = parse_flag(&raw)?;
        }

        if let Some(raw) = lookup("TETRAD_SORTITION_BUCKET_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("invalid TETRAD_SORTITION_BUCKET_SECS: {}", raw)))?;
            if secs == 0 {
                return Err(Error::Config("TETRAD_SORTITION_BUCKET_SECS must be positive".into()));
            }
            config.bucket = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("TETRAD_SEED") {
            config.seed = parse_seed(&raw)?;
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Vec<VertexDraft>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_sortition(mut self, enabled: bool) -> Self {
        self.sortition = enabled;
        self
    }

    /// Coordinator settings for this node.
    pub fn coordinator(&self) -> CoordinatorConfig {
        CoordinatorConfig::default()
            .with_seed(self.seed.clone())
            .with_council(
                CouncilConfig::default()
                    .with_sortition(self.sortition)
                    .with_bucket(self.bucket),
            )
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("invalid TETRAD_SORTITION: {}", raw))),
    }
}

fn parse_seed(raw: &str) -> Result<Vec<VertexDraft>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<VertexDraft>()
                .map_err(|e| Error::Config(format!("invalid TETRAD_SEED entry {:?}: {}", entry, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tetrad_protocols::Category;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = NodeConfig::from_lookup(lookup(&[])).unwrap();
        assert!(!config.sortition);
        assert_eq!(config.bucket, Duration::from_secs(60));
        assert_eq!(config.seed, default_seed());
    }

    #[test]
    fn reads_every_variable() {
        let config = NodeConfig::from_lookup(lookup(&[
            ("TETRAD_SORTITION", "true"),
            ("TETRAD_SORTITION_BUCKET_SECS", "15"),
            ("TETRAD_SEED", "x:fire:90, y:water:20,"),
        ]))
        .unwrap();

        assert!(config.sortition);
        assert_eq!(config.bucket, Duration::from_secs(15));
        assert_eq!(
            config.seed,
            vec![
                VertexDraft::new("x", Category::Fire, 90),
                VertexDraft::new("y", Category::Water, 20),
            ]
        );

        let coordinator = config.coordinator();
        assert!(coordinator.council.sortition);
        assert_eq!(coordinator.seed.len(), 2);
    }

    #[test]
    fn rejects_bad_values() {
        for pairs in [
            [("TETRAD_SORTITION", "maybe")],
            [("TETRAD_SORTITION_BUCKET_SECS", "soon")],
            [("TETRAD_SORTITION_BUCKET_SECS", "0")],
            [("TETRAD_SEED", "x:plasma:10")],
            [("TETRAD_SEED", "just-an-id")],
        ] {
            let err = NodeConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{:?} gave {:?}", pairs, err);
        }
    }
}
