use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use paperclip::actix::{web, OpenApiExt};
use tracing_actix_web::TracingLogger;

use bookcatalog_service::app_config::{config_app, json_config, path_config, query_config};
use bookcatalog_service::books_repository::{
    BookRepository, PostgresBooksRepository, PostgresBooksRepositoryConfig,
};
use bookcatalog_service::settings::AppSettings;
use bookcatalog_service::telemetry::init_telemetry;

const APP_NAME: &str = "bookcatalog_service";

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::load()?;
    init_telemetry(APP_NAME, settings.jaeger_enabled)?;

    let books_repository: Arc<dyn BookRepository> = Arc::new(
        PostgresBooksRepository::init(PostgresBooksRepositoryConfig {
            database_url: settings.database_url.clone(),
        })
        .await
        .context("Failed to init postgres")?,
    );

    tracing::info!(
        "starting HTTP server at http://{}:{}",
        settings.host,
        settings.port
    );

    let cors_allowed_origins = settings.cors_allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap_api()
            .app_data(web::Data::new(books_repository.clone()))
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .wrap(cors(&cors_allowed_origins))
            .wrap(TracingLogger::default())
            .configure(config_app)
            .with_json_spec_at("/apispec/v2")
            .build()
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
