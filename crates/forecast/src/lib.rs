// Shared forecast logic for the terminal and web front ends.
// Nothing in here performs I/O: surfaces and weather sources are traits.

pub mod error;
pub mod forecast;
pub mod reading;
pub mod render;
pub mod surface;
pub mod weather;

pub use error::ForecastError;
pub use forecast::{Forecast, ForecastMode};
pub use reading::{Reading, ReadingSeries, TemperatureTag};
pub use render::{render, ReadingElement};
pub use surface::{ElementKind, MemorySurface, RenderSurface, SurfaceElement};
pub use weather::{WeatherQuery, WeatherResponse, WeatherSource, WeatherbitConfig};
