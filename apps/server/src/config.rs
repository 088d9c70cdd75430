use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use state_gateway_aggregator::settings::{
    GatewaySettings, DEFAULT_AIR_QUALITY_URL, DEFAULT_ECONOMY_URL, DEFAULT_PROVIDER_TIMEOUT,
    DEFAULT_WEATHER_URL,
};

/// Headroom above one provider call for routing and serialization.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    /// Configured inbound timeout; see [`Config::request_deadline`].
    pub request_timeout: Duration,
    /// Provider URLs and the outbound per-call timeout.
    pub gateway: GatewaySettings,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("SG_LISTEN_ADDR", "0.0.0.0:8000")
            .parse()
            .context("Invalid SG_LISTEN_ADDR")?;
        let cors_allow = env_or("SG_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = env_millis("SG_REQUEST_TIMEOUT_MS", Duration::from_secs(30));
        let gateway = GatewaySettings {
            economy_url: env_or("SG_ECONOMY_URL", DEFAULT_ECONOMY_URL),
            weather_url: env_or("SG_WEATHER_URL", DEFAULT_WEATHER_URL),
            air_quality_url: env_or("SG_AIR_QUALITY_URL", DEFAULT_AIR_QUALITY_URL),
            timeout: env_millis("SG_PROVIDER_TIMEOUT_MS", DEFAULT_PROVIDER_TIMEOUT),
        };
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            gateway,
        })
    }

    /// Inbound deadline enforced by the router. Never shorter than one
    /// provider call plus a margin, so a slow provider only drops its own
    /// category instead of failing the whole request.
    pub fn request_deadline(&self) -> Duration {
        self.request_timeout.max(self.gateway.timeout + REQUEST_TIMEOUT_MARGIN)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}
