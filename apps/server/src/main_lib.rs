use std::sync::Arc;

use crate::config::Config;
use state_gateway_aggregator::Aggregator;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let aggregator = Aggregator::from_settings(&config.gateway);
    tracing::info!(
        "Aggregator ready (provider timeout {:?})",
        aggregator.timeout()
    );
    Arc::new(AppState {
        aggregator: Arc::new(aggregator),
    })
}
