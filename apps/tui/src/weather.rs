use async_trait::async_trait;
use forecast_core::{ForecastError, WeatherQuery, WeatherResponse, WeatherSource, WeatherbitConfig};
use log::debug;
use reqwest::{Client, Request};

/// Weatherbit client backed by reqwest. No timeout and no retry are applied.
#[derive(Debug, Clone)]
pub struct WeatherbitClient {
    http: Client,
    config: WeatherbitConfig,
}

impl WeatherbitClient {
    pub fn new(config: WeatherbitConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn build_request(&self, query: &WeatherQuery) -> Result<Request, ForecastError> {
        let key = self.config.api_key()?;
        let params = query.params(key);

        self.http
            .get(&self.config.endpoint)
            .query(params.as_slice())
            .build()
            .map_err(|e| ForecastError::NetworkFailure(e.to_string()))
    }

    pub async fn fetch_forecast(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherResponse, ForecastError> {
        let request = self.build_request(query)?;
        debug!(
            "GET {} city={:?} days={}",
            self.config.endpoint, query.city, query.days
        );

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ForecastError::NetworkFailure(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ForecastError::NetworkFailure(e.to_string()))?;

        if !status.is_success() {
            return Err(ForecastError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        WeatherResponse::parse(&body)
    }
}

#[async_trait(?Send)]
impl WeatherSource for WeatherbitClient {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResponse, ForecastError> {
        self.fetch_forecast(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> WeatherbitConfig {
        WeatherbitConfig {
            endpoint: "https://api.weatherbit.io/v2.0/forecast/daily".to_string(),
            api_key: key.map(ToString::to_string),
            default_city: "Lausanne".to_string(),
        }
    }

    #[test]
    fn test_request_carries_encoded_query() -> Result<(), Box<dyn std::error::Error>> {
        let client = WeatherbitClient::new(config_with_key(Some("k3y")));
        let request = client.build_request(&WeatherQuery::for_city("La Chaux-de-Fonds&days=1"))?;

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().path(), "/v2.0/forecast/daily");

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("city".to_string(), "La Chaux-de-Fonds&days=1".to_string()),
                ("days".to_string(), "7".to_string()),
                ("key".to_string(), "k3y".to_string()),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_request_without_key_fails() {
        let client = WeatherbitClient::new(config_with_key(None));
        let result = client.build_request(&WeatherQuery::for_city("Lausanne"));

        assert!(matches!(result, Err(ForecastError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_fetch_without_key_never_reaches_network() {
        let client = WeatherbitClient::new(config_with_key(None));
        let result = client.fetch(&WeatherQuery::for_city("Lausanne")).await;

        assert!(matches!(result, Err(ForecastError::MissingApiKey)));
    }
}
