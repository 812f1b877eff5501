use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, anyhow};
use dotenvy::dotenv;

use attendance_register::clock::Clock;
use attendance_register::config::Config;
use attendance_register::docs::ApiDoc;
use attendance_register::routes;
use attendance_register::store::AttendanceStore;
use attendance_register::store::rest::RestStore;

use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(
        addr = %config.server_addr,
        store = %config.store_base_url,
        "Server starting..."
    );

    let store = RestStore::new(
        &config.store_base_url,
        Duration::from_secs(config.store_timeout_secs),
    )?;
    let store: Arc<dyn AttendanceStore> = Arc::new(store);
    let store = Data::from(store);

    let rate_limit = routes::build_rate_limit(config.rate_api_per_min)
        .ok_or_else(|| anyhow!("invalid rate limit: {} per minute", config.rate_api_per_min))?;

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(Data::new(Clock::System))
            .configure(|cfg| routes::configure(cfg, &config, &rate_limit))
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}
