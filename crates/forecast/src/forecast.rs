use std::fmt;

use log::{debug, info};

use crate::error::ForecastError;
use crate::reading::{format_reading, Reading, ReadingSeries, INITIAL_READINGS, TEST_TEMPERATURES};
use crate::render::{render, render_heading};
use crate::surface::RenderSurface;
use crate::weather::{WeatherQuery, WeatherResponse, WeatherSource};

/// Where a forecast takes its readings from on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastMode {
    /// Fixed baseline series.
    Static,
    /// Remote forecast for a city chosen at construction.
    Online { city: String },
    /// Remote forecast for a user-chosen city, corrected by the service.
    ByCity { city: Option<String> },
}

impl ForecastMode {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Static => "Forecast",
            Self::Online { .. } => "OnlineForecast",
            Self::ByCity { .. } => "CityForecast",
        }
    }
}

/// A series of readings bound to the surface it is shown on.
#[derive(Debug)]
pub struct Forecast<S> {
    surface: S,
    readings: ReadingSeries,
    mode: ForecastMode,
}

impl<S: RenderSurface> Forecast<S> {
    pub fn new(surface: S, mode: ForecastMode) -> Self {
        let forecast = Self {
            surface,
            readings: INITIAL_READINGS.to_vec(),
            mode,
        };
        info!("{forecast}");
        forecast
    }

    pub fn fixed(surface: S) -> Self {
        Self::new(surface, ForecastMode::Static)
    }

    pub fn online(surface: S, city: impl Into<String>) -> Self {
        Self::new(surface, ForecastMode::Online { city: city.into() })
    }

    pub fn by_city(surface: S) -> Self {
        Self::new(surface, ForecastMode::ByCity { city: None })
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn city(&self) -> Option<&str> {
        match &self.mode {
            ForecastMode::Static => None,
            ForecastMode::Online { city } => Some(city),
            ForecastMode::ByCity { city } => city.as_deref(),
        }
    }

    /// Stores the city used by the next reload. Only city forecasts take a city;
    /// other modes ignore the call.
    pub fn set_city(&mut self, name: impl Into<String>) {
        match &mut self.mode {
            ForecastMode::ByCity { city } => *city = Some(name.into()),
            mode => debug!("{} ignores set_city", mode.kind()),
        }
    }

    pub fn show(&mut self) {
        render(&mut self.surface, &self.readings);
        if let ForecastMode::ByCity { city: Some(city) } = &self.mode {
            render_heading(&mut self.surface, city);
        }
    }

    /// The remote query the next reload needs, or `None` for a static forecast.
    pub fn pending_query(&self) -> Result<Option<WeatherQuery>, ForecastError> {
        match &self.mode {
            ForecastMode::Static => Ok(None),
            ForecastMode::Online { city } | ForecastMode::ByCity { city: Some(city) } => {
                Ok(Some(WeatherQuery::for_city(city.clone())))
            }
            ForecastMode::ByCity { city: None } => Err(ForecastError::CityNotSet),
        }
    }

    pub fn reload_baseline(&mut self) {
        self.readings = TEST_TEMPERATURES.to_vec();
        self.show();
    }

    /// Replaces the readings with a fetched series and shows them.
    pub fn apply_response(&mut self, response: WeatherResponse) {
        debug!(
            "{} received {} daily readings for {:?}",
            self.mode.kind(),
            response.data.len(),
            response.city_name
        );
        self.readings = response.temperatures();
        if let ForecastMode::ByCity { city } = &mut self.mode {
            *city = Some(response.city_name);
        }
        self.show();
    }

    /// Refreshes the readings and re-renders. On error nothing changes.
    pub async fn reload<W: WeatherSource + ?Sized>(
        &mut self,
        source: &W,
    ) -> Result<(), ForecastError> {
        let Some(query) = self.pending_query()? else {
            self.reload_baseline();
            return Ok(());
        };

        let response = source.fetch(&query).await?;
        self.apply_response(response);

        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<S: RenderSurface> fmt::Display for Forecast<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readings = self
            .readings
            .iter()
            .map(|&reading| format_reading(reading))
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "{}(temperature={readings}, container={})",
            self.mode.kind(),
            self.surface.label()
        )
    }
}
