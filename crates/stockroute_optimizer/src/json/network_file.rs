use std::{fs::File, io::BufReader, path::Path};

use thiserror::Error;
use tracing::info;

use crate::problem::{network::Network, network_error::NetworkError};

use super::types::JsonNetwork;

#[derive(Error, Debug)]
pub enum NetworkFileError {
    #[error("Failed to open network file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse network file: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid network: {0}")]
    Network(#[from] NetworkError),
}

pub fn read_network_file(path: &Path) -> Result<Network, NetworkFileError> {
    let file = File::open(path)?;
    let json: JsonNetwork = serde_json::from_reader(BufReader::new(file))?;
    let network = json.build_network()?;

    info!(
        path = %path.display(),
        sources = network.sources().len(),
        products = network.products().len(),
        "loaded network"
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bundled_network() {
        let path = std::env::current_dir()
            .unwrap()
            .join("data/default_network.json");

        let network = read_network_file(&path).unwrap();
        assert_eq!(network.sources().len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::current_dir()
            .unwrap()
            .join("data/does_not_exist.json");

        assert!(matches!(
            read_network_file(&path),
            Err(NetworkFileError::Io(_))
        ));
    }
}
