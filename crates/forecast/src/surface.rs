/// Kind of element a surface can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Paragraph,
    Heading,
}

impl ElementKind {
    /// HTML tag used by DOM-backed surfaces.
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading => "h4",
        }
    }
}

/// The display capabilities a forecast needs from its render target.
///
/// Element lookup and event binding stay with the front end; a surface only
/// has to clear itself, append or insert text children and tag them with a
/// class.
pub trait RenderSurface {
    fn clear(&mut self);

    /// Appends a child and returns its position.
    fn append(&mut self, kind: ElementKind, text: &str) -> usize;

    fn add_class(&mut self, index: usize, class: &str);

    /// Inserts a child before the element at `position`, or at the end when
    /// `position` is past the last child.
    fn insert(&mut self, position: usize, kind: ElementKind, text: &str);

    /// Identity of the surface, used in diagnostics.
    fn label(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceElement {
    pub kind: ElementKind,
    pub text: String,
    pub classes: Vec<String>,
}

impl SurfaceElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory surface. Backs the terminal panels, headless output and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    label: String,
    elements: Vec<SurfaceElement>,
}

impl MemorySurface {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[SurfaceElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }
}

impl RenderSurface for MemorySurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn append(&mut self, kind: ElementKind, text: &str) -> usize {
        self.elements.push(SurfaceElement {
            kind,
            text: text.to_string(),
            classes: Vec::new(),
        });
        self.elements.len() - 1
    }

    fn add_class(&mut self, index: usize, class: &str) {
        if let Some(element) = self.elements.get_mut(index) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn insert(&mut self, position: usize, kind: ElementKind, text: &str) {
        let position = position.min(self.elements.len());
        self.elements.insert(
            position,
            SurfaceElement {
                kind,
                text: text.to_string(),
                classes: Vec::new(),
            },
        );
    }

    fn label(&self) -> String {
        format!("#{}", self.label)
    }
}
