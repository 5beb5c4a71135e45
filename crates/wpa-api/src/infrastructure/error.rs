//! HTTP error mapping.
//!
//! | Error                                   | Status |
//! |-----------------------------------------|--------|
//! | `SsidNotFound`                          | 404    |
//! | `InvalidPassword`, `InvalidSsid`        | 400    |
//! | malformed JSON body, query or path      | 400    |
//! | `ConfigUnavailable`, `MalformedConfig`  | 500    |
//! | blocking pool failure                   | 500    |
//!
//! Every error body is `{"detail": "<message>"}`.

use actix_web::{
    error::{BlockingError, InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use tracing::{error, warn};

use wpa_core::WpaError;

use crate::domain::messages::ErrorDetail;

/// Error returned by every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Credentials(#[from] WpaError),

    #[error("request could not be scheduled on the worker pool")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Credentials(WpaError::SsidNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Credentials(WpaError::InvalidPassword { .. })
            | ApiError::Credentials(WpaError::InvalidSsid(_)) => StatusCode::BAD_REQUEST,
            ApiError::Credentials(WpaError::ConfigUnavailable { .. })
            | ApiError::Credentials(WpaError::MalformedConfig { .. })
            | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("returning {} response. {}", status.as_u16(), self);
        } else {
            warn!("returning {} response. {}", status.as_u16(), self);
        }
        HttpResponse::build(status).json(ErrorDetail::new(self))
    }
}

// ── Extractor error hooks ─────────────────────────────────────────────────────

pub(crate) fn json_parser_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("{} returning 400 response. {}", req.head().method, err);

    let resp = HttpResponse::BadRequest().json(ErrorDetail::new(&err));
    InternalError::from_response(err, resp).into()
}

pub(crate) fn query_parser_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("{} returning 400 response. {}", req.head().method, err);

    let resp = HttpResponse::BadRequest().json(ErrorDetail::new(&err));
    InternalError::from_response(err, resp).into()
}

pub(crate) fn path_parser_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    warn!("{} returning 400 response. {}", req.head().method, err);

    let resp = HttpResponse::BadRequest().json(ErrorDetail::new(&err));
    InternalError::from_response(err, resp).into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
