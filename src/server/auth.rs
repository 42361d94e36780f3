//! Bearer-token gate in front of every route: an exact, case-sensitive
//! comparison against the configured shared secret. Rejections happen here,
//! before body parsing or any upstream traffic.

use super::{AppState, RelayError};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{web, Error, ResponseError};

pub async fn bearer_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let authorized = match req.app_data::<web::Data<AppState>>() {
        Some(state) => {
            let expected = format!("Bearer {}", state.auth_token);
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(|v| v == expected)
                .unwrap_or(false)
        }
        // No state registered means nothing to compare against; deny.
        None => false,
    };

    if !authorized {
        let res = RelayError::Unauthorized.error_response();
        return Ok(req.into_response(res));
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}
