use forecast_core::{ElementKind, RenderSurface};
use log::error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// A page element used as a render target.
pub struct DomSurface {
    document: Document,
    container: Element,
}

impl DomSurface {
    pub fn by_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let container = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?;

        Ok(Self {
            document: document.clone(),
            container,
        })
    }

    fn create(&self, kind: ElementKind, text: &str) -> Option<Element> {
        match self.document.create_element(kind.tag_name()) {
            Ok(element) => {
                element.set_text_content(Some(text));
                Some(element)
            }
            Err(e) => {
                error!("cannot create <{}>: {e:?}", kind.tag_name());
                None
            }
        }
    }

    fn child(&self, index: usize) -> Option<Element> {
        let index = u32::try_from(index).ok()?;
        self.container.children().item(index)
    }
}

/// Index of the child added by an append. When nothing was added this is one
/// past the last child, so a following `add_class` finds no element.
fn appended_index(before: u32, after: u32) -> usize {
    let index = if after > before { after - 1 } else { after };
    usize::try_from(index).unwrap_or(usize::MAX)
}

impl RenderSurface for DomSurface {
    fn clear(&mut self) {
        self.container.set_inner_html("");
    }

    fn append(&mut self, kind: ElementKind, text: &str) -> usize {
        let before = self.container.child_element_count();
        if let Some(element) = self.create(kind, text) {
            if let Err(e) = self.container.append_child(&element) {
                error!("cannot append to {}: {e:?}", self.label());
            }
        }
        appended_index(before, self.container.child_element_count())
    }

    fn add_class(&mut self, index: usize, class: &str) {
        let Some(child) = self.child(index) else {
            return;
        };
        if let Err(e) = child.class_list().add_1(class) {
            error!("cannot tag child {index} of {}: {e:?}", self.label());
        }
    }

    fn insert(&mut self, position: usize, kind: ElementKind, text: &str) {
        let Some(element) = self.create(kind, text) else {
            return;
        };
        let reference = self.child(position);
        if let Err(e) = self
            .container
            .insert_before(&element, reference.as_deref())
        {
            error!("cannot insert into {}: {e:?}", self.label());
        }
    }

    fn label(&self) -> String {
        format!("#{}", self.container.id())
    }
}
