//! HTTP server: route table and startup.
//!
//! [`configure`] registers the routes and extractor error hooks on any actix
//! `App`, so the production server and the tests share one route table.
//! [`run_server`] binds the listener and serves until actix receives Ctrl+C
//! or SIGTERM, at which point it drains in-flight requests and returns.

use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use super::error::{json_parser_error, path_parser_error, query_parser_error};
use super::handlers;
use crate::domain::config::ApiConfig;
use crate::domain::messages::ErrorDetail;

/// Shared, read-only state handed to every handler.
///
/// Only settings live here.  The configuration file is re-read on every
/// request, so there is nothing to invalidate when another process edits it.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub config: ApiConfig,
}

impl ApiState {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Registers every route plus the JSON/query/path error hooks.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_parser_error))
        .app_data(web::QueryConfig::default().error_handler(query_parser_error))
        .app_data(web::PathConfig::default().error_handler(path_parser_error))
        .service(
            web::resource("/ssids")
                .route(web::get().to(handlers::list_ssids))
                .route(web::post().to(handlers::create_ssid))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/ssids/{ssid}")
                .route(web::get().to(handlers::get_ssid))
                .route(web::put().to(handlers::update_ssid_password))
                .route(web::delete().to(handlers::delete_ssid))
                .default_service(web::to(method_not_allowed)),
        );
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    warn!("{} {} returning 405 response", req.method(), req.uri());
    HttpResponse::MethodNotAllowed().json(ErrorDetail::new("Method Not Allowed"))
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    warn!("{} {} returning 404 response", req.method(), req.uri());
    HttpResponse::NotFound().json(ErrorDetail::new("Not Found"))
}

/// Binds `config.bind_addr` and serves requests until shutdown.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission) or if the server stops with an I/O error.
pub async fn run_server(config: ApiConfig) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr;
    let state = web::Data::new(ApiState::new(config));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::new("%r from %a result %s (took %D ms)"))
            .app_data(state.clone())
            .configure(configure)
            .default_service(web::to(not_found))
    })
    .bind(bind_addr)
    .with_context(|| format!("failed to bind HTTP listener on {bind_addr}"))?;

    info!("listening on http://{bind_addr}");
    server.run().await.context("HTTP server stopped with an error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http, test};

    #[actix_web::test]
    async fn test_unknown_path_returns_json_404() {
        // Arrange
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ApiState::new(ApiConfig::default())))
                .configure(configure)
                .default_service(web::to(not_found)),
        )
        .await;

        // Act
        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
        let body: ErrorDetail = test::read_body_json(resp).await;
        assert_eq!(body.detail, "Not Found");
    }

    #[actix_web::test]
    async fn test_unsupported_method_returns_405() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ApiState::new(ApiConfig::default())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::patch().uri("/ssids").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::METHOD_NOT_ALLOWED);
    }
}
