use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use stockroute_optimizer::{
    default_network::default_network, json::network_file::read_network_file,
    problem::network::Network, solver::leg_billing::LegBilling,
};
use tracing::info;

use crate::parsers;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_EVALUATION_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ApiConfig {
    pub addr: String,
    pub network_file: Option<PathBuf>,
    pub evaluation_timeout: Duration,
    pub billing: LegBilling,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let evaluation_timeout = match lookup("STOCKROUTE_EVALUATION_TIMEOUT") {
            Some(value) => parsers::parse_duration(&value)
                .map_err(anyhow::Error::msg)
                .context("STOCKROUTE_EVALUATION_TIMEOUT")?
                .unsigned_abs(),
            None => DEFAULT_EVALUATION_TIMEOUT,
        };

        let billing = match lookup("STOCKROUTE_LEG_BILLING") {
            Some(value) => value
                .parse::<LegBilling>()
                .map_err(anyhow::Error::msg)
                .context("STOCKROUTE_LEG_BILLING")?,
            None => LegBilling::default(),
        };

        Ok(ApiConfig {
            addr: lookup("STOCKROUTE_API_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned()),
            network_file: lookup("STOCKROUTE_NETWORK_FILE").map(PathBuf::from),
            evaluation_timeout,
            billing,
        })
    }

    pub fn load_network(&self) -> anyhow::Result<Network> {
        match &self.network_file {
            Some(path) => read_network_file(path)
                .with_context(|| format!("loading network from {}", path.display())),
            None => {
                info!("using the built-in network");
                Ok(default_network()?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.network_file, None);
        assert_eq!(config.evaluation_timeout, DEFAULT_EVALUATION_TIMEOUT);
        assert_eq!(config.billing, LegBilling::EveryLeg);
        assert_eq!(config.load_network().unwrap().sources().len(), 3);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("STOCKROUTE_API_ADDR", "0.0.0.0:3000"),
            ("STOCKROUTE_EVALUATION_TIMEOUT", "250ms"),
            ("STOCKROUTE_LEG_BILLING", "delivery-leg-only"),
            ("STOCKROUTE_NETWORK_FILE", "/etc/stockroute/network.json"),
        ])
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:3000");
        assert_eq!(config.evaluation_timeout, Duration::from_millis(250));
        assert_eq!(config.billing, LegBilling::DeliveryLegOnly);
        assert_eq!(
            config.network_file,
            Some(PathBuf::from("/etc/stockroute/network.json"))
        );
    }

    #[test]
    fn test_invalid_billing() {
        assert!(config_from(&[("STOCKROUTE_LEG_BILLING", "weekly")]).is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(config_from(&[("STOCKROUTE_EVALUATION_TIMEOUT", "later")]).is_err());
    }

    #[test]
    fn test_missing_network_file() {
        let config = config_from(&[("STOCKROUTE_NETWORK_FILE", "./does/not/exist.json")]).unwrap();
        assert!(config.load_network().is_err());
    }
}
