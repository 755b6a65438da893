// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use feedrs::config::settings::Settings;
use feedrs::domain::services::scraper_service::ScraperService;
use feedrs::engines::reqwest_engine::ReqwestUpstreamClient;
use feedrs::engines::traits::UpstreamClient;
use feedrs::infrastructure::metrics;
use feedrs::presentation::routes;
use feedrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting feedrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    metrics::init_metrics(&settings.metrics);

    // 4. Resolve scraper configuration
    let scraper_config = settings.instagram.scraper_config()?;
    if scraper_config.is_none() {
        warn!("instagram.base_url is empty, Instagram requests will fail until it is configured");
    }

    // 5. Initialize upstream client and service
    let client: Arc<dyn UpstreamClient> = Arc::new(ReqwestUpstreamClient::new(
        settings.http.timeout(),
        settings.http.max_redirects,
    )?);
    let service = Arc::new(ScraperService::new(client, scraper_config));

    // 6. Start HTTP server
    let app = routes::routes().layer(Extension(service));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
