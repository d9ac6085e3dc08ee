use async_trait::async_trait;
use forecast_core::{ForecastError, WeatherQuery, WeatherResponse, WeatherSource, WeatherbitConfig};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Url};

/// Weatherbit client using the browser's `fetch`.
pub struct BrowserWeatherSource {
    config: WeatherbitConfig,
}

impl BrowserWeatherSource {
    pub const fn new(config: WeatherbitConfig) -> Self {
        Self { config }
    }

    /// Full request URL; `URLSearchParams` takes care of encoding the city.
    fn request_url(&self, query: &WeatherQuery) -> Result<String, ForecastError> {
        let key = self.config.api_key()?;
        let url = Url::new(&self.config.endpoint).map_err(js_failure)?;
        let search = url.search_params();
        for (name, value) in query.params(key) {
            search.append(name, &value);
        }
        Ok(url.href())
    }
}

#[async_trait(?Send)]
impl WeatherSource for BrowserWeatherSource {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResponse, ForecastError> {
        let url = self.request_url(query)?;
        let window = web_sys::window()
            .ok_or_else(|| ForecastError::NetworkFailure("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_failure)?;
        debug!("GET {} city={:?}", self.config.endpoint, query.city);

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_failure)?
            .dyn_into()
            .map_err(js_failure)?;

        let body = JsFuture::from(response.text().map_err(js_failure)?)
            .await
            .map_err(js_failure)?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            return Err(ForecastError::HttpStatus {
                status: response.status(),
                body,
            });
        }

        WeatherResponse::parse(&body)
    }
}

fn js_failure(value: JsValue) -> ForecastError {
    ForecastError::NetworkFailure(format!("{value:?}"))
}
