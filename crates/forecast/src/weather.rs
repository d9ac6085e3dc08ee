// Weatherbit daily forecast: query, response model and the source trait.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::reading::ReadingSeries;

pub const DEFAULT_ENDPOINT: &str = "https://api.weatherbit.io/v2.0/forecast/daily";
pub const DEFAULT_CITY: &str = "Lausanne";
pub const FORECAST_DAYS: u8 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub days: u8,
}

impl WeatherQuery {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            days: FORECAST_DAYS,
        }
    }

    /// Query string pairs in request order. Values are not encoded here;
    /// the HTTP layer of each front end does that.
    pub fn params(&self, api_key: &str) -> [(&'static str, String); 3] {
        [
            ("city", self.city.clone()),
            ("days", self.days.to_string()),
            ("key", api_key.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub temp: f64,
}

/// The part of a Weatherbit answer we read. Unknown fields are ignored;
/// `data[].temp` and `city_name` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub data: Vec<DailyForecast>,
    pub city_name: String,
}

impl WeatherResponse {
    pub fn parse(body: &str) -> Result<Self, ForecastError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(ForecastError::MalformedResponse)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, ForecastError> {
        serde_json::from_value(value).map_err(ForecastError::ShapeMismatch)
    }

    pub fn temperatures(&self) -> ReadingSeries {
        self.data.iter().map(|day| day.temp).collect()
    }
}

/// Anything able to answer a forecast query.
#[async_trait(?Send)]
pub trait WeatherSource {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResponse, ForecastError>;
}

/// Where to send queries and with which key.
#[derive(Clone, PartialEq, Eq)]
pub struct WeatherbitConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub default_city: String,
}

impl WeatherbitConfig {
    pub fn api_key(&self) -> Result<&str, ForecastError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ForecastError::MissingApiKey)
    }
}

impl Default for WeatherbitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            default_city: DEFAULT_CITY.to_string(),
        }
    }
}

impl fmt::Debug for WeatherbitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherbitConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_city", &self.default_city)
            .finish()
    }
}
