use crate::reading::{format_reading, Reading, TemperatureTag};
use crate::surface::{ElementKind, RenderSurface};

/// What one reading turns into on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingElement {
    pub text: String,
    pub tag: Option<TemperatureTag>,
}

impl ReadingElement {
    pub fn from_reading(reading: Reading) -> Self {
        Self {
            text: format_reading(reading),
            tag: TemperatureTag::classify(reading),
        }
    }

    fn attach<S: RenderSurface + ?Sized>(self, surface: &mut S) {
        let index = surface.append(ElementKind::Paragraph, &self.text);
        if let Some(tag) = self.tag {
            surface.add_class(index, tag.as_str());
        }
    }
}

/// Replaces everything on `surface` with one paragraph per reading.
pub fn render<S: RenderSurface + ?Sized>(surface: &mut S, series: &[Reading]) {
    surface.clear();
    series
        .iter()
        .copied()
        .map(ReadingElement::from_reading)
        .for_each(|element| element.attach(surface));
}

/// Puts a heading in front of whatever the surface currently shows.
pub fn render_heading<S: RenderSurface + ?Sized>(surface: &mut S, text: &str) {
    surface.insert(0, ElementKind::Heading, text);
}
