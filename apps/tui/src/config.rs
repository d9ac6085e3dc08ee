use color_eyre::eyre::eyre;
use dotenv::dotenv;
use forecast_core::weather::{DEFAULT_CITY, DEFAULT_ENDPOINT};
use forecast_core::WeatherbitConfig;
use std::env;

pub const API_KEY_VAR: &str = "WEATHERBIT_API_KEY";
pub const ENDPOINT_VAR: &str = "WEATHERBIT_ENDPOINT";
pub const CITY_VAR: &str = "FORECAST_CITY";
pub const DEBUG_VAR: &str = "DEBUG";

/// Initializes the application configuration
/// Loads `.env` first, then reads the Weatherbit settings from the environment
pub fn init_app_config() -> color_eyre::eyre::Result<WeatherbitConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    config_from_lookup(|name| env::var(name).ok())
}

/// Builds the Weatherbit settings from any variable lookup
pub fn config_from_lookup<F>(lookup: F) -> color_eyre::eyre::Result<WeatherbitConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = lookup(ENDPOINT_VAR)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(eyre!("{ENDPOINT_VAR} must be an http(s) URL, got `{endpoint}`"));
    }

    let default_city = lookup(CITY_VAR)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CITY.to_string());

    // The key stays optional: the static panels work without it
    let api_key = lookup(API_KEY_VAR).filter(|value| !value.trim().is_empty());

    Ok(WeatherbitConfig {
        endpoint,
        api_key,
        default_city,
    })
}

/// Whether debug logging was requested
pub fn debug_enabled() -> bool {
    env::var(DEBUG_VAR).is_ok_and(|value| !value.is_empty() && value != "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() -> Result<(), Box<dyn std::error::Error>> {
        let config = config_from_lookup(lookup_from(&[]))?;

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.default_city, "Lausanne");
        assert_eq!(config.api_key, None);

        Ok(())
    }

    #[test]
    fn test_variables_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config = config_from_lookup(lookup_from(&[
            (API_KEY_VAR, "k3y"),
            (ENDPOINT_VAR, "http://localhost:8080/forecast "),
            (CITY_VAR, "Neuchâtel"),
        ]))?;

        assert_eq!(config.endpoint, "http://localhost:8080/forecast");
        assert_eq!(config.default_city, "Neuchâtel");
        assert_eq!(config.api_key.as_deref(), Some("k3y"));

        Ok(())
    }

    #[test]
    fn test_blank_values_fall_back() -> Result<(), Box<dyn std::error::Error>> {
        let config = config_from_lookup(lookup_from(&[(API_KEY_VAR, " "), (CITY_VAR, "")]))?;

        assert_eq!(config.api_key, None);
        assert_eq!(config.default_city, "Lausanne");

        Ok(())
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let result = config_from_lookup(lookup_from(&[(ENDPOINT_VAR, "ftp://weather")]));
        assert!(result.is_err());
    }
}
