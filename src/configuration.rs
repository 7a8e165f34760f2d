use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::Serialize;

pub const CONFIG_FILE: &str = "latencyapp.yaml";
pub const PORT_VAR: &str = "PORT";

fn http_port() -> u16 {
    8080
}

fn random_delay_ceiling() -> u64 {
    10
}

fn default_sample_size() -> usize {
    100
}

fn max_sample_size() -> usize {
    10_000
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "http_port")]
    pub http_port: u16,
    /// Exclusive upper bound, in seconds, of randomly picked delays.
    #[serde(default = "random_delay_ceiling")]
    pub random_delay_ceiling: u64,
    /// Number of URLs returned by `/sample` when `n` is not given.
    #[serde(default = "default_sample_size")]
    pub default_sample_size: usize,
    /// Largest number of URLs a single `/sample` request can get.
    #[serde(default = "max_sample_size")]
    pub max_sample_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            http_port: http_port(),
            random_delay_ceiling: random_delay_ceiling(),
            default_sample_size: default_sample_size(),
            max_sample_size: max_sample_size(),
        }
    }
}

impl Config {
    pub fn from_file(filepath: &str) -> Result<Self> {
        let data = std::fs::read_to_string(filepath)?;
        let config = serde_yaml::from_str::<Config>(&data)?;
        Ok(config)
    }

    pub fn to_file(&self, filepath: &str) -> Result<()> {
        let contents = serde_yaml::to_string::<Config>(self)?;
        std::fs::write(filepath, contents)?;
        Ok(())
    }

    /// Reads `filepath` when it exists, falls back to defaults otherwise,
    /// then lets the `PORT` environment variable override the port.
    pub fn load(filepath: &str) -> Result<Self> {
        let mut config = if Path::new(filepath).exists() {
            Config::from_file(filepath)
                .with_context(|| format!("could not read configuration from {filepath}"))?
        } else {
            Config::default()
        };
        config.override_port(std::env::var(PORT_VAR).ok().as_deref())?;
        Ok(config)
    }

    pub fn override_port(&mut self, port: Option<&str>) -> Result<()> {
        match port {
            Some(port) if !port.is_empty() => {
                self.http_port = port
                    .parse()
                    .with_context(|| format!("invalid {PORT_VAR} value '{port}'"))?;
            }
            _ => {}
        }
        Ok(())
    }
}
