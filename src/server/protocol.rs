use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-image`. The field is optional at the serde level
/// so an absent `imageUrl` reaches the handler's own validation instead of
/// the extractor's.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Successful relay response: the model's output string, verbatim. The
/// upstream prompt may ask the model for JSON, but the relay never parses
/// or validates it.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}
