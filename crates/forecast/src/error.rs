use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("weather service answered {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("response is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("response does not have the expected shape: {0}")]
    ShapeMismatch(#[source] serde_json::Error),
    #[error("no city selected")]
    CityNotSet,
    #[error("no Weatherbit API key configured")]
    MissingApiKey,
}

impl ForecastError {
    /// Short name of the failure, for status lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "network failure",
            Self::HttpStatus { .. } => "http status",
            Self::MalformedResponse(_) => "malformed response",
            Self::ShapeMismatch(_) => "shape mismatch",
            Self::CityNotSet => "city not set",
            Self::MissingApiKey => "missing api key",
        }
    }
}
