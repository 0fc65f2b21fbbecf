//! HTTP serving for both variants.
//!
//! State is injected into handlers through `web::Data`: the API variant
//! carries the configuration and the immutable trained-classifier handle,
//! the portal variant carries the patient store. Handlers never reach for
//! globals.

pub mod api;
pub mod portal;

use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::classifier::TrainedClassifier;
use crate::config::VitalmapConfig;
use crate::storage::PatientStore;

pub struct ApiState {
    pub config: VitalmapConfig,
    pub classifier: Option<TrainedClassifier>,
}

pub struct PortalState {
    pub store: PatientStore,
}

/// Run the JSON API (variant 1) until shutdown.
pub async fn run_api_server(
    config: VitalmapConfig,
    classifier: Option<TrainedClassifier>,
) -> std::io::Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let max_payload = config.uploads.max_bytes;

    std::fs::create_dir_all(&config.uploads.dir)?;
    let state = web::Data::new(ApiState { config, classifier });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_payload))
            .app_data(web::JsonConfig::default().error_handler(api::json_error_handler))
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// Run the HTML portal (variant 2) until shutdown.
pub async fn run_portal_server(config: VitalmapConfig, store: PatientStore) -> std::io::Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let state = web::Data::new(PortalState { store });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(portal::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
