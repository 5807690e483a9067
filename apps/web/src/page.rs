use std::cell::RefCell;
use std::rc::Rc;

use digest_core::disclosure::row_appearance;
use digest_core::markup::{COMPANY_CONTAINER_ID, THEME_CONTAINER_ID};
use digest_core::{DisclosureKey, DisclosureState, RenderedView};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::fetch::js_message;

/// The two host containers plus the disclosure state shared by every
/// click handler bound inside them.
pub struct Page {
    companies: Element,
    themes: Element,
    disclosure: Rc<RefCell<DisclosureState>>,
}

impl Page {
    pub fn attach(document: &Document) -> Option<Self> {
        Some(Self {
            companies: document.get_element_by_id(COMPANY_CONTAINER_ID)?,
            themes: document.get_element_by_id(THEME_CONTAINER_ID)?,
            disclosure: Rc::new(RefCell::new(DisclosureState::new())),
        })
    }

    pub fn mount(&self, view: &RenderedView) {
        self.disclosure.borrow_mut().clear();
        self.companies.set_inner_html(&view.companies_html);
        self.themes.set_inner_html(&view.themes_html);
    }

    pub fn bind(&self) -> Result<(), JsValue> {
        self.bind_themes()?;
        self.bind_companies()
    }

    /// The native `<details>` toggle is suppressed; the `open` attribute is
    /// driven from explicit state instead.
    fn bind_themes(&self) -> Result<(), JsValue> {
        for summary in elements(&self.themes, "summary[data-index]")? {
            let (Some(index), Some(details)) = (data_index(&summary), summary.parent_element())
            else {
                continue;
            };

            let disclosure = Rc::clone(&self.disclosure);
            let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                let open = disclosure.borrow_mut().toggle(DisclosureKey::Theme(index));
                let result = if open {
                    details.set_attribute("open", "")
                } else {
                    details.remove_attribute("open")
                };
                if let Err(error) = result {
                    web_sys::console::error_1(&js_message(&error).into());
                }
            });
            summary.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handler.forget();
        }
        Ok(())
    }

    fn bind_companies(&self) -> Result<(), JsValue> {
        for row in elements(&self.companies, "tr.portfolio-row")? {
            let (Some(index), Some(details)) = (data_index(&row), row.next_element_sibling())
            else {
                continue;
            };
            let glyph = row.query_selector(".row-toggle")?;

            let disclosure = Rc::clone(&self.disclosure);
            let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let open = disclosure.borrow_mut().toggle(DisclosureKey::Company(index));
                let appearance = row_appearance(open);
                details.set_class_name(appearance.details_class);
                if let Some(glyph) = &glyph {
                    glyph.set_text_content(Some(appearance.glyph));
                }
            });
            row.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handler.forget();
        }
        Ok(())
    }
}

fn elements(container: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = container.query_selector_all(selector)?;
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.dyn_into::<Element>().map_err(JsValue::from))
        .collect()
}

fn data_index(element: &Element) -> Option<usize> {
    element.get_attribute("data-index")?.parse().ok()
}
