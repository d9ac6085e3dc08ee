use crate::app::actions::{FetchOutcome, ForecastActions};
use chrono::Local;
use forecast_core::reading::TEST_TEMPERATURES;
use forecast_core::{render, Forecast, MemorySurface, WeatherbitConfig};
use log::{info, warn};

/// The four areas of the screen, one per way of producing readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Function,
    Forecast,
    Online,
    City,
}

impl PanelId {
    pub const ALL: [Self; 4] = [Self::Function, Self::Forecast, Self::Online, Self::City];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Function => "1 Function",
            Self::Forecast => "2 Forecast",
            Self::Online => "3 Online",
            Self::City => "4 City",
        }
    }

    /// Surface identifier, shown in forecast descriptions.
    pub const fn surface_id(self) -> &'static str {
        match self {
            Self::Function => "weather-part1",
            Self::Forecast => "weather-part2",
            Self::Online => "weather-part3",
            Self::City => "weather-city",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Function => 0,
            Self::Forecast => 1,
            Self::Online => 2,
            Self::City => 3,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Normal,
    EditingCity,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub city_input: String,
    pub status_message: String,
    pub function_surface: MemorySurface,
    pub fixed: Forecast<MemorySurface>,
    pub online: Forecast<MemorySurface>,
    pub by_city: Forecast<MemorySurface>,
    pub actions: ForecastActions,
    in_flight: [usize; 4],
}

impl App {
    pub fn new(config: WeatherbitConfig) -> Self {
        let default_city = config.default_city.clone();
        Self {
            running: true,
            show_help: false,
            input_mode: InputMode::Normal,
            city_input: String::new(),
            status_message: String::new(),
            function_surface: MemorySurface::new(PanelId::Function.surface_id()),
            fixed: Forecast::fixed(MemorySurface::new(PanelId::Forecast.surface_id())),
            online: Forecast::online(
                MemorySurface::new(PanelId::Online.surface_id()),
                default_city,
            ),
            by_city: Forecast::by_city(MemorySurface::new(PanelId::City.surface_id())),
            actions: ForecastActions::new(config),
            in_flight: [0; 4],
        }
    }

    pub fn forecast(&self, panel: PanelId) -> Option<&Forecast<MemorySurface>> {
        match panel {
            PanelId::Function => None,
            PanelId::Forecast => Some(&self.fixed),
            PanelId::Online => Some(&self.online),
            PanelId::City => Some(&self.by_city),
        }
    }

    fn forecast_mut(&mut self, panel: PanelId) -> Option<&mut Forecast<MemorySurface>> {
        match panel {
            PanelId::Function => None,
            PanelId::Forecast => Some(&mut self.fixed),
            PanelId::Online => Some(&mut self.online),
            PanelId::City => Some(&mut self.by_city),
        }
    }

    pub fn surface(&self, panel: PanelId) -> &MemorySurface {
        self.forecast(panel)
            .map_or(&self.function_surface, Forecast::surface)
    }

    pub const fn is_loading(&self, panel: PanelId) -> bool {
        self.in_flight[panel.index()] > 0
    }

    /// The shared reload button: plain render, static forecast and the
    /// default-city online forecast.
    pub fn reload_all(&mut self) {
        render(&mut self.function_surface, &TEST_TEMPERATURES);
        self.reload_panel(PanelId::Forecast);
        self.reload_panel(PanelId::Online);
    }

    pub fn reload_panel(&mut self, panel: PanelId) {
        let Some(forecast) = self.forecast_mut(panel) else {
            render(&mut self.function_surface, &TEST_TEMPERATURES);
            return;
        };

        match forecast.pending_query() {
            Ok(None) => {
                forecast.reload_baseline();
                self.set_status(format!("{} reloaded", panel.title()));
            }
            Ok(Some(query)) => {
                self.in_flight[panel.index()] += 1;
                self.actions.spawn_fetch(panel, query);
                self.set_status(format!("{} loading...", panel.title()));
            }
            Err(e) => {
                warn!("{} cannot reload: {e}", panel.title());
                self.set_status(format!("{}: {e}", panel.title()));
            }
        }
    }

    /// Stores the typed city as-is and reloads the city panel.
    pub fn submit_city(&mut self) {
        let city = std::mem::take(&mut self.city_input);
        info!("Query = {city:?}");
        self.by_city.set_city(city);
        self.input_mode = InputMode::Normal;
        self.reload_panel(PanelId::City);
    }

    /// Applies finished fetches in arrival order.
    pub fn apply_completed_fetches(&mut self) {
        for outcome in self.actions.drain_completed() {
            self.apply_outcome(outcome);
        }
    }

    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let FetchOutcome { panel, result } = outcome;
        let slot = &mut self.in_flight[panel.index()];
        *slot = slot.saturating_sub(1);

        let Some(forecast) = self.forecast_mut(panel) else {
            return;
        };

        match result {
            Ok(response) => {
                forecast.apply_response(response);
                let place = forecast.city().unwrap_or_default().to_string();
                self.set_status(format!(
                    "{} updated for {place} at {}",
                    panel.title(),
                    Local::now().format("%H:%M:%S")
                ));
            }
            Err(e) => {
                warn!("{} fetch failed ({}): {e}", panel.title(), e.kind());
                self.set_status(format!("{} not updated: {e}", panel.title()));
            }
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::{ElementKind, ForecastError, WeatherResponse};

    fn app_without_key() -> App {
        App::new(WeatherbitConfig::default())
    }

    #[test]
    fn test_panels_start_empty() {
        let app = app_without_key();
        for panel in PanelId::ALL {
            assert!(app.surface(panel).is_empty());
            assert!(!app.is_loading(panel));
        }
        assert_eq!(app.online.city(), Some("Lausanne"));
    }

    #[tokio::test]
    async fn test_reload_all_renders_static_panels_and_starts_fetch() {
        let mut app = app_without_key();
        app.reload_all();

        assert_eq!(app.surface(PanelId::Function).len(), 7);
        assert_eq!(
            app.surface(PanelId::Forecast).texts(),
            vec!["13", "18", "21", "19", "26", "25", "16"]
        );
        assert!(app.is_loading(PanelId::Online));
        assert!(!app.is_loading(PanelId::City));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_view() {
        let mut app = app_without_key();
        app.online.show();
        let before = app.surface(PanelId::Online).clone();

        app.reload_panel(PanelId::Online);
        let outcome = app.actions.next_completed().await;
        assert!(outcome.is_some());
        if let Some(outcome) = outcome {
            assert!(matches!(outcome.result, Err(ForecastError::MissingApiKey)));
            app.apply_outcome(outcome);
        }

        assert!(!app.is_loading(PanelId::Online));
        assert_eq!(app.surface(PanelId::Online), &before);
        assert!(app.status_message.contains("not updated"));
    }

    #[test]
    fn test_city_reload_without_city_reports_error() {
        let mut app = app_without_key();
        app.reload_panel(PanelId::City);

        assert!(!app.is_loading(PanelId::City));
        assert!(app.status_message.contains("no city selected"));
    }

    #[tokio::test]
    async fn test_submit_city_sets_city_and_starts_fetch() {
        let mut app = app_without_key();
        app.input_mode = InputMode::EditingCity;
        app.city_input = "Lausane".to_string();
        app.submit_city();

        assert_eq!(app.by_city.city(), Some("Lausane"));
        assert!(app.city_input.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.is_loading(PanelId::City));
    }

    #[test]
    fn test_outcomes_apply_in_arrival_order() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app_without_key();
        app.by_city.set_city("lausanne");

        let late = WeatherResponse::parse(r#"{"data": [{"temp": 30}], "city_name": "Lausanne"}"#)?;
        let early = WeatherResponse::parse(r#"{"data": [{"temp": 5}], "city_name": "Lausanne"}"#)?;
        app.apply_outcome(FetchOutcome {
            panel: PanelId::City,
            result: Ok(late),
        });
        app.apply_outcome(FetchOutcome {
            panel: PanelId::City,
            result: Ok(early),
        });

        let surface = app.surface(PanelId::City);
        assert_eq!(surface.texts(), vec!["Lausanne", "5"]);
        assert_eq!(surface.elements()[0].kind, ElementKind::Heading);
        assert!(app.status_message.contains("updated for Lausanne"));

        Ok(())
    }
}
