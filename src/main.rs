use actix_web::{middleware::Logger, web, App, HttpServer};
use futsal_attendance::config::EnvConfig;
use futsal_attendance::db::service::DbService;
use futsal_attendance::routes::configure_routes;
use futsal_attendance::utils::analysis::AnalysisClient;
use futsal_attendance::utils::webutils::setup_cors;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = config.bind_addr();

    let db_service = Arc::new(
        DbService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );
    let analysis = web::Data::new(AnalysisClient::new(config.ai.clone()).map_err(io::Error::other)?);
    let origins = config.allowed_origins.clone();

    info!(%addr, ai_enabled = analysis.is_configured(), "Starting futsal attendance server");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(setup_cors(&origins))
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .app_data(analysis.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
