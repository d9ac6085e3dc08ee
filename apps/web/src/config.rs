use forecast_core::WeatherbitConfig;

pub const ENDPOINT_ATTRIBUTE: &str = "data-endpoint";
pub const API_KEY_ATTRIBUTE: &str = "data-api-key";
pub const CITY_ATTRIBUTE: &str = "data-city";

/// Weatherbit settings from the `<body>` data attributes; blanks fall back
/// to the defaults.
pub fn page_config(
    endpoint: Option<String>,
    api_key: Option<String>,
    city: Option<String>,
) -> WeatherbitConfig {
    let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
    let defaults = WeatherbitConfig::default();

    WeatherbitConfig {
        endpoint: present(endpoint).unwrap_or(defaults.endpoint),
        api_key: present(api_key),
        default_city: present(city).unwrap_or(defaults.default_city),
    }
}
