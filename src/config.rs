use std::env::VarError;
use std::time::Duration;

use anyhow::anyhow;

pub const REQUIRED_VARIABLES: &[&str] = &["MAP_API_URL", "MAP_ACCESS_TOKEN", "LISTEN_PORT"];

const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 600;

pub struct Config {
    pub map_api_url: String,
    pub map_access_token: String,
    pub listen_port: u16,
    pub poll_interval: Duration,
    pub poll_max_attempts: u32,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let map_api_url = env("MAP_API_URL")?;
        let map_access_token = env("MAP_ACCESS_TOKEN")?;

        let listen_port = env("LISTEN_PORT")?
            .parse()
            .map_err(|_| anyhow!("LISTEN_PORT is not a valid port number"))?;

        let poll_interval_ms = env_or("POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)?;
        let poll_max_attempts = env_or("POLL_MAX_ATTEMPTS", DEFAULT_POLL_MAX_ATTEMPTS)?;

        Ok(Self {
            map_api_url,
            map_access_token,
            listen_port,
            poll_interval: Duration::from_millis(poll_interval_ms),
            poll_max_attempts,
        })
    }

    pub fn log(&self) {
        log::info!("map backend: {}", self.map_api_url);
        log::info!("listen port: {}", self.listen_port);
        log::info!(
            "poll policy: every {:?}, at most {} attempts",
            self.poll_interval,
            self.poll_max_attempts
        );
    }
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|e| match e {
        VarError::NotPresent => anyhow!("{name} not set"),
        VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
    })
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| anyhow!("{name} value {value:?} is not valid")),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}
