use crate::app::state::{App, InputMode};
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if handle_help_toggle(app, key) {
        return;
    }

    match app.input_mode {
        InputMode::EditingCity => handle_city_input(app, key),
        InputMode::Normal => handle_main_input(app, key),
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

fn handle_main_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('r') | KeyCode::Enter => app.reload_all(),
        KeyCode::Char('c') => {
            app.input_mode = InputMode::EditingCity;
            app.status_message = "Type a city and press Enter".to_string();
        }
        _ => {}
    }
}

fn handle_city_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.status_message.clear();
        }
        KeyCode::Enter => app.submit_city(),
        KeyCode::Backspace => {
            app.city_input.pop();
        }
        KeyCode::Char(ch) => app.city_input.push(ch),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PanelId;
    use forecast_core::WeatherbitConfig;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_input(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_help_swallows_keys_until_escape() {
        let mut app = App::new(WeatherbitConfig::default());
        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);

        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_typing_q_in_city_input_does_not_quit() {
        let mut app = App::new(WeatherbitConfig::default());
        handle_input(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Quebec");
        handle_input(&mut app, KeyCode::Backspace);

        assert!(app.running);
        assert_eq!(app.city_input, "Quebe");
        assert_eq!(app.input_mode, InputMode::EditingCity);

        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_enter_submits_city() {
        let mut app = App::new(WeatherbitConfig::default());
        handle_input(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "Lausanne");
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.by_city.city(), Some("Lausanne"));
        assert!(app.is_loading(PanelId::City));
    }

    #[tokio::test]
    async fn test_reload_key_fills_static_panels() {
        let mut app = App::new(WeatherbitConfig::default());
        handle_input(&mut app, KeyCode::Char('r'));

        assert_eq!(app.surface(PanelId::Function).len(), 7);
        assert_eq!(app.surface(PanelId::Forecast).len(), 7);
    }
}
