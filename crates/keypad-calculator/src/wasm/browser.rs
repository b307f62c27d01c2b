//! Browser bindings using wasm-bindgen
//!
//! [`BrowserCalculator`] finds the page's display, operation line and history
//! list by id and renders into them. The page glue forwards `keydown` events
//! and button clicks to `handle_key` / `handle_button`.

use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Element};

use super::dom::{CLEAR_HISTORY_ID, DISPLAY_ID, HISTORY_LIST_ID, NO_HISTORY_TEXT, OPERATION_ID};
use super::keypad::WasmKeypad;
use crate::config::CalculatorConfig;
use crate::core::{CalcError, InputEvent};
use crate::render::{CalculatorWidget, RenderSurface};

/// Render surface backed by real DOM elements
#[derive(Debug)]
pub struct WebSurface {
    document: Document,
    display: Element,
    operation: Element,
    history_list: Element,
}

impl WebSurface {
    /// Looks up the calculator elements in the current document
    pub fn from_document() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
        };
        Ok(Self {
            display: find(DISPLAY_ID)?,
            operation: find(OPERATION_ID)?,
            history_list: find(HISTORY_LIST_ID)?,
            document,
        })
    }

    fn append_history(&self, records: &[String]) -> Result<(), JsValue> {
        if records.is_empty() {
            let placeholder = self.document.create_element("div")?;
            placeholder.set_class_name("no-history");
            placeholder.set_inner_html(&format!(
                "<p>{NO_HISTORY_TEXT}</p><p class=\"sub-text\">Start calculating to see history</p>"
            ));
            self.history_list.append_child(&placeholder)?;
            return Ok(());
        }

        for record in records {
            let item = self.document.create_element("div")?;
            item.set_class_name("history-item");
            item.set_text_content(Some(record));
            self.history_list.append_child(&item)?;
        }
        Ok(())
    }
}

impl RenderSurface for WebSurface {
    fn set_display_text(&mut self, text: &str) {
        self.display.set_text_content(Some(text));
    }

    fn set_operation_text(&mut self, text: &str) {
        self.operation.set_text_content(Some(text));
    }

    fn render_history(&mut self, records: &[String]) {
        self.history_list.set_inner_html("");
        if let Err(e) = self.append_history(records) {
            console::warn_2(&"failed to render history".into(), &e);
        }
    }
}

/// Browser calculator, the WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: CalculatorWidget<WebSurface>,
    keypad: WasmKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the page and renders the initial state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self {
            widget: CalculatorWidget::new(WebSurface::from_document()?),
            keypad: WasmKeypad::new(),
        })
    }

    /// Binds to the page with a JSON configuration
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();
        let config = CalculatorConfig::from_json(json).map_err(js_error)?;
        let widget = CalculatorWidget::with_config(&config, WebSurface::from_document()?)
            .map_err(js_error)?;
        Ok(Self {
            widget,
            keypad: WasmKeypad::new(),
        })
    }

    /// Handles a `keydown` key value; returns true if the key was used
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.widget.handle_key(key)
    }

    /// Handles a button's `data-action` / `data-value` attributes
    pub fn handle_button(&mut self, action: &str, value: Option<String>) -> bool {
        self.widget.handle_button(action, value.as_deref())
    }

    /// Handles a click on a keypad button or the clear-history button by id
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        let event = if element_id == CLEAR_HISTORY_ID {
            Some(InputEvent::ClearHistory)
        } else {
            self.keypad.handle_click(element_id)
        };
        event.is_some_and(|e| self.widget.handle(e))
    }

    /// Empties the history
    pub fn clear_history(&mut self) -> bool {
        self.widget.handle(InputEvent::ClearHistory)
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.widget.engine().display().to_string()
    }

    /// Pending operation text
    #[wasm_bindgen(getter)]
    pub fn operation(&self) -> String {
        self.widget.engine().operation_text()
    }

    /// History as JSON, newest first
    pub fn history_json(&self) -> Result<String, JsValue> {
        self.widget
            .engine()
            .history()
            .to_json()
            .map_err(js_error)
    }

    /// Number of history entries
    pub fn history_count(&self) -> usize {
        self.widget.engine().history().len()
    }
}

fn js_error(e: CalcError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
