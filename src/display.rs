//! Output sink for the rendered count.

use crate::error::ClientError;

/// Somewhere the poller can write the counter text. Write-only.
pub trait DisplaySink {
    fn render(&self, text: &str) -> Result<(), ClientError>;
}

/// Writes into a DOM element looked up by id on every render, so the sink
/// works whether or not the element has been mounted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomDisplay {
    element_id: String,
}

impl DomDisplay {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl DisplaySink for DomDisplay {
    fn render(&self, text: &str) -> Result<(), ClientError> {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(&self.element_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or_else(|| ClientError::BindingAbsent {
                key: self.element_id.clone(),
            })?;
        element.set_inner_text(text);
        Ok(())
    }
}
