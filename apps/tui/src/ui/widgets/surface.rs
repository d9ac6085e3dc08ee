use forecast_core::{ElementKind, MemorySurface, SurfaceElement, TemperatureTag};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

pub const fn tag_color(tag: TemperatureTag) -> Color {
    match tag {
        TemperatureTag::Cold => Color::LightBlue,
        TemperatureTag::Warm => Color::LightRed,
    }
}

/// Terminal counterpart of the page stylesheet: headings bold, cold and warm
/// readings coloured, everything else plain.
pub fn element_style(element: &SurfaceElement) -> Style {
    match element.kind {
        ElementKind::Heading => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        ElementKind::Paragraph => element
            .classes
            .iter()
            .find_map(|class| TemperatureTag::parse(class))
            .map_or_else(Style::default, |tag| Style::default().fg(tag_color(tag))),
    }
}

pub fn surface_lines(surface: &MemorySurface) -> Vec<TextLine<'static>> {
    surface
        .elements()
        .iter()
        .map(|element| TextLine::from(Span::styled(element.text.clone(), element_style(element))))
        .collect()
}
