//! Route handlers. The single inference route validates the request body,
//! relays the image URL to the upstream chat-completion API, and passes the
//! model's output back unchanged.

use super::protocol::{AnalyzeRequest, AnalyzeResponse};
use super::{AppState, RelayError};
use actix_web::{post, web, Responder};
use tracing::{error, info};

type Result<T> = std::result::Result<T, RelayError>;

#[post("/analyze-image")]
pub async fn analyze_image(
    req: web::Json<AnalyzeRequest>,
    state: web::Data<AppState>,
) -> Result<impl Responder> {
    let image_url = match req.image_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Err(RelayError::MissingImageUrl),
    };

    let result = state.client.analyze_image(image_url).await.map_err(|e| {
        error!("error communicating with upstream API: {e}");
        RelayError::Upstream(e)
    })?;

    info!("finished serving analysis request");

    Ok(web::Json(AnalyzeResponse { result }))
}
