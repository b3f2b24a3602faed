use crate::config::Config;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading the cluster list
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse '{}' as a JSON list of clusters", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load and parse the cluster list from a JSON file
pub fn load_config(config_path: &Path) -> Result<Config, ConfigError> {
    info!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })?;

    info!("Loaded {} cluster(s)", config.len());
    for (index, cluster) in config.clusters.iter().enumerate() {
        debug!("cluster[{}]: {} at {}", index, cluster.peer_name, cluster.address);
    }

    Ok(config)
}

/// Parse the JSON array of cluster descriptors
pub fn parse_config(content: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(content)
}
