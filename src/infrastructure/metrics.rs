// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 初始化 Prometheus 指标导出
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "instagram_scrape_requests_total",
        "Total number of Instagram feed requests"
    );
    describe_counter!(
        "instagram_scrape_failures_total",
        "Total number of failed Instagram feed requests"
    );
    describe_counter!(
        "instagram_scrape_posts_total",
        "Total number of posts returned"
    );
    describe_histogram!(
        "instagram_upstream_duration_seconds",
        "Duration of upstream profile requests in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
}
