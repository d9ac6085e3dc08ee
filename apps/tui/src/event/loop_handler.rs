use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use forecast_core::{ElementKind, Forecast, MemorySurface, TemperatureTag, WeatherbitConfig};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App, PanelId};
use crate::ui;
use crate::weather::WeatherbitClient;

/// Run the application in headless mode (no UI)
///
/// Fetches one forecast for `city` (or the configured default city), then
/// prints it as text or JSON.
pub async fn run_headless(config: WeatherbitConfig, city: Option<String>, json: bool) -> Result<()> {
    let forecast = fetch_headless_forecast(config, city).await?;
    let report = build_headless_report(&forecast);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_headless_text(&report);
    }

    Ok(())
}

async fn fetch_headless_forecast(
    config: WeatherbitConfig,
    city: Option<String>,
) -> Result<Forecast<MemorySurface>> {
    let surface = MemorySurface::new(PanelId::City.surface_id());
    let mut forecast = match city {
        Some(city) => {
            let mut forecast = Forecast::by_city(surface);
            forecast.set_city(city);
            forecast
        }
        None => Forecast::online(surface, config.default_city.clone()),
    };

    let client = WeatherbitClient::new(config);
    forecast.reload(&client).await?;

    Ok(forecast)
}

fn render_headless_text(report: &HeadlessReport) {
    println!("\nTemperature Forecast");
    println!("====================");
    if let Some(city) = &report.city {
        println!("City: {city}");
    }
    for reading in &report.readings {
        match reading.tag {
            Some(tag) => println!("- {} ({tag})", reading.text),
            None => println!("- {}", reading.text),
        }
    }
}

fn build_headless_report(forecast: &Forecast<MemorySurface>) -> HeadlessReport {
    let city = forecast.city().map(ToString::to_string);

    // Read back what was rendered so text and tags match the panels exactly
    let readings = forecast
        .surface()
        .elements()
        .iter()
        .filter(|element| element.kind == ElementKind::Paragraph)
        .zip(forecast.readings())
        .map(|(element, value)| HeadlessReading {
            value: *value,
            text: element.text.clone(),
            tag: element
                .classes
                .iter()
                .find_map(|class| TemperatureTag::parse(class))
                .map(TemperatureTag::as_str),
        })
        .collect();

    HeadlessReport { city, readings }
}

#[derive(Debug, serde::Serialize)]
struct HeadlessReport {
    city: Option<String>,
    readings: Vec<HeadlessReading>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessReading {
    value: f64,
    text: String,
    tag: Option<&'static str>,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        // Results of background fetches land between frames
        app.apply_completed_fetches();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore everything else
                }
            }
        }

        // Let spawned fetches make progress on the runtime
        tokio::task::yield_now().await;
    }

    Ok(())
}
