use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    #[error("Request to the model failed")]
    Transport(#[from] reqwest::Error),
    #[error("Model responded with {0}")]
    Status(StatusCode),
    #[error("Model response has no text")]
    EmptyResponse,
    #[error("Model response does not match the comic schema")]
    Malformed(#[from] serde_json::Error),
}
