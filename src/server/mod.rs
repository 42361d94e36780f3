//! The user-facing JSON web server that relays image-analysis requests to
//! the upstream vision model. This is the "front end": one authenticated
//! route, no state carried across requests.

use crate::config::Config;
use crate::llm::{ChatClient, LlmError};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

pub mod auth;
mod protocol;
pub mod routes;

/// Per-process state handed to every handler. Built once at startup from the
/// loaded [`Config`]; holds no mutable data.
pub struct AppState {
    pub auth_token: String,
    pub client: Arc<dyn ChatClient>,
}

impl AppState {
    pub fn new(config: &Config, client: Arc<dyn ChatClient>) -> Self {
        Self {
            auth_token: config.auth_token.clone(),
            client,
        }
    }
}

/// Everything that can terminate a relay request. Each variant maps to one
/// fixed status and body; upstream detail is logged but never exposed.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("bearer token absent or mismatched")]
    Unauthorized,

    #[error("request body carried no usable imageUrl")]
    MissingImageUrl,

    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl actix_web::error::ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Unauthorized => StatusCode::FORBIDDEN,
            RelayError::MissingImageUrl => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            RelayError::Unauthorized => "Unauthorized access",
            RelayError::MissingImageUrl => "Missing imageUrl in the request body",
            RelayError::Upstream(_) => "An error occurred while processing the request",
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(json!({ "error": message }))
    }
}

/// JSON extractor settings: an unparseable body surfaces the same fixed
/// validation response as a missing `imageUrl`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|_, _| RelayError::MissingImageUrl.into())
}
