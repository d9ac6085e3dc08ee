use crate::app::{App, InputMode, PanelId};
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use crate::ui::widgets::surface::surface_lines;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Panels
            Constraint::Length(3), // City input
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)));

    render_title_section(f, main_layout[0]);
    render_panels(app, f, main_layout[1]);
    render_city_input(app, f, main_layout[2]);
    render_status_section(app, f, main_layout[3]);
    render_shortcuts(f, main_layout[4]);

    if app.show_help {
        render_help_popup(app, f);
    }
}

fn render_title_section(f: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new("Daily temperatures, static and from Weatherbit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("== Temperature Forecast ==")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(title, area);
}

fn render_panels(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row, panels) in rows.iter().zip(PanelId::ALL.chunks(2)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);

        for (column, panel) in columns.iter().zip(panels) {
            render_panel(app, *panel, f, *column);
        }
    }
}

fn render_panel(app: &App, panel: PanelId, f: &mut Frame<'_>, area: Rect) {
    let loading = app.is_loading(panel);
    let title = if loading {
        format!("{} (loading...)", panel.title())
    } else {
        panel.title().to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if loading {
            Color::Yellow
        } else {
            Color::Gray
        }));

    let surface = app.surface(panel);
    let text = if surface.is_empty() {
        Text::from(TextLine::from(Span::styled(
            empty_hint(panel),
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Text::from(surface_lines(surface))
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}

const fn empty_hint(panel: PanelId) -> &'static str {
    match panel {
        PanelId::City => "Press c to choose a city",
        PanelId::Function | PanelId::Forecast | PanelId::Online => "Press r to load",
    }
}

fn render_city_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let editing = app.input_mode == InputMode::EditingCity;
    let content = if editing {
        format!("{}_", app.city_input)
    } else {
        app.by_city.city().unwrap_or("(none)").to_string()
    };

    let block = Block::default()
        .title(if editing { "City (Enter to query)" } else { "City" })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing {
            Color::Yellow
        } else {
            Color::Gray
        }));

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Status").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line = TextLine::from(vec![
        Span::styled("r", key_style),
        Span::raw(": Reload   "),
        Span::styled("c", key_style),
        Span::raw(": City   "),
        Span::styled("F1", key_style),
        Span::raw(": Help   "),
        Span::styled("q", key_style),
        Span::raw(": Quit"),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_help_popup(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(ClearWidget, area);

    let mut lines = vec![
        TextLine::from("r / Enter  render the test series, reload panels 2 and 3"),
        TextLine::from("c          type a city, Enter queries it in panel 4"),
        TextLine::from("Esc        leave city input or close this help"),
        TextLine::from("q          quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Forecasts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        [PanelId::Forecast, PanelId::Online, PanelId::City]
            .into_iter()
            .filter_map(|panel| app.forecast(panel))
            .map(|forecast| TextLine::from(forecast.describe())),
    );

    let help = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Help (Esc to close)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::WeatherbitConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40))?;
        terminal.draw(|f| render_main(app, f))?;
        let buffer = terminal.backend().buffer();
        Ok(buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect())
    }

    #[tokio::test]
    async fn test_panels_show_rendered_readings() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(WeatherbitConfig::default());
        app.reload_all();

        let text = screen_text(&app)?;
        assert!(text.contains("2 Forecast"));
        assert!(text.contains("3 Online (loading...)"));
        assert!(text.contains("26"));

        Ok(())
    }

    #[test]
    fn test_help_lists_forecast_descriptions() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(WeatherbitConfig::default());
        app.show_help = true;

        let text = screen_text(&app)?;
        assert!(text.contains("OnlineForecast(temperature=1,2,3,4,5,6,7"));

        Ok(())
    }
}
