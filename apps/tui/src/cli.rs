use clap::{CommandFactory, Parser};

use crate::config::{API_KEY_VAR, CITY_VAR, DEBUG_VAR, ENDPOINT_VAR};

#[derive(Debug, Parser)]
#[command(name = "forecast-tui", version, about = "Temperature forecast viewer")]
pub struct CliArgs {
    /// Fetch one forecast, print it and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless forecast as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (stderr)
    #[arg(long)]
    pub debug: bool,

    /// City to query instead of the configured default
    #[arg(long, value_name = "NAME")]
    pub city: Option<String>,

    /// Override the Weatherbit API key
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the Weatherbit forecast endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(city) = &self.city {
            std::env::set_var(CITY_VAR, city);
        }
        if let Some(key) = &self.api_key {
            std::env::set_var(API_KEY_VAR, key);
        }
        if let Some(endpoint) = &self.endpoint {
            std::env::set_var(ENDPOINT_VAR, endpoint);
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headless_flags() -> Result<(), Box<dyn std::error::Error>> {
        let args = CliArgs::try_parse_from([
            "forecast-tui",
            "--headless",
            "--json",
            "--city",
            "Fribourg",
            "--api-key",
            "abc",
        ])?;

        assert!(args.headless);
        assert!(args.json);
        assert!(!args.debug);
        assert_eq!(args.city.as_deref(), Some("Fribourg"));
        assert_eq!(args.api_key.as_deref(), Some("abc"));
        assert_eq!(args.endpoint, None);

        Ok(())
    }

    #[test]
    fn test_help_mentions_city() {
        assert!(CliArgs::help_text().contains("--city"));
    }
}
