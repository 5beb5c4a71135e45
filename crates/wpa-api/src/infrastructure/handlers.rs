//! Route handlers.
//!
//! Each handler builds a fresh `CredentialService` over the configured file,
//! moves it onto actix's blocking thread pool with [`web::block`] (file I/O
//! and PBKDF2 would otherwise stall the async workers), and maps the result
//! onto a JSON response.  The `??` after each `web::block(..).await` peels
//! off the pool error first and the credential error second.

use actix_web::{web, HttpResponse};
use tracing::info;

use wpa_core::{CredentialService, FileConfigStore, Outcome};

use super::error::ApiError;
use super::server::ApiState;
use crate::domain::messages::{PasswordQuery, ResultMessage, SsidInfo};

fn service(state: &ApiState) -> CredentialService<FileConfigStore> {
    CredentialService::new(FileConfigStore::new(state.config.config_path.clone()))
}

/// `GET /ssids` – bare SSIDs of every network, in file order.
pub async fn list_ssids(state: web::Data<ApiState>) -> Result<HttpResponse, ApiError> {
    let svc = service(&state);
    let ssids = web::block(move || svc.list_ssids()).await??;
    Ok(HttpResponse::Ok().json(ssids))
}

/// `GET /ssids/{ssid}` – the raw attributes of the network, quotes included.
pub async fn get_ssid(
    state: web::Data<ApiState>,
    ssid: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let svc = service(&state);
    let ssid = ssid.into_inner();
    let block = web::block(move || svc.get_network(&ssid)).await??;
    Ok(HttpResponse::Ok().json(block))
}

/// `POST /ssids` – create the network or replace its password.
pub async fn create_ssid(
    state: web::Data<ApiState>,
    body: web::Json<SsidInfo>,
) -> Result<HttpResponse, ApiError> {
    let svc = service(&state);
    let SsidInfo { ssid, password } = body.into_inner();

    let outcome = web::block(move || svc.upsert(&ssid, &password)).await??;

    info!(?outcome, "POST /ssids applied");
    Ok(HttpResponse::Ok().json(ResultMessage::new(
        "SSID created or updated successfully",
    )))
}

/// `PUT /ssids/{ssid}?new_password=...` – upsert with the path SSID.
pub async fn update_ssid_password(
    state: web::Data<ApiState>,
    ssid: web::Path<String>,
    query: web::Query<PasswordQuery>,
) -> Result<HttpResponse, ApiError> {
    let svc = service(&state);
    let ssid = ssid.into_inner();
    let PasswordQuery { new_password } = query.into_inner();

    let outcome = web::block(move || svc.upsert(&ssid, &new_password)).await??;

    let message = match outcome {
        Outcome::Created => "SSID created successfully",
        _ => "SSID password updated successfully",
    };
    Ok(HttpResponse::Ok().json(ResultMessage::new(message)))
}

/// `DELETE /ssids/{ssid}` – remove the network; 404 if it is not configured.
pub async fn delete_ssid(
    state: web::Data<ApiState>,
    ssid: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let svc = service(&state);
    let ssid = ssid.into_inner();

    web::block(move || svc.delete(&ssid)).await??;

    Ok(HttpResponse::Ok().json(ResultMessage::new("SSID deleted successfully")))
}
