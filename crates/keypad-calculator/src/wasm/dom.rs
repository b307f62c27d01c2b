//! Mock DOM for testing the browser frontend without a browser
//!
//! Elements live in a flat registry keyed by id. [`MockDom::calculator`]
//! builds the calculator page: display, operation line, keypad, history list
//! and the clear-history button.

use std::collections::HashMap;

use super::keypad::WasmKeypad;
use crate::render::RenderSurface;

/// Element id of the main display
pub const DISPLAY_ID: &str = "display";
/// Element id of the pending-operation line
pub const OPERATION_ID: &str = "operation-display";
/// Element id of the history container
pub const HISTORY_LIST_ID: &str = "history-list";
/// Element id of the clear-history button
pub const CLEAR_HISTORY_ID: &str = "clear-history";
/// Text of the empty-history placeholder
pub const NO_HISTORY_TEXT: &str = "No calculations yet";

/// A DOM element
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events dispatched against the mock page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Document-level keydown
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page with the standard keypad
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(OPERATION_ID)
                .with_class("operation-display"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display")
                .with_text("0"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(HISTORY_LIST_ID)
                .with_class("history-list"),
        );
        dom.register_element(
            DomElement::new("button")
                .with_id(CLEAR_HISTORY_ID)
                .with_class("clear-history-btn")
                .with_attr("data-action", "clear-history")
                .with_text("Clear History"),
        );

        let keypad = WasmKeypad::new();
        dom.register_element(keypad.create_keypad_element());
        for button in keypad.create_dom_elements() {
            dom.register_element(button);
        }

        dom
    }

    /// Registers an element for ID lookup; elements without an ID are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records a dispatched event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child to a registered parent, registering it too if it has an ID
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Removes every child of an element, unregistering those with IDs
    pub fn clear_children(&mut self, id: &str) {
        let Some(elem) = self.elements.get_mut(id) else {
            return;
        };
        let removed: Vec<String> = elem
            .children
            .drain(..)
            .map(|c| c.id)
            .filter(|id| !id.is_empty())
            .collect();
        for child_id in removed {
            self.elements.remove(&child_id);
        }
    }

    /// Texts of the rendered history items, newest first
    #[must_use]
    pub fn history_texts(&self) -> Vec<String> {
        self.get_element(HISTORY_LIST_ID)
            .map(|list| {
                list.children
                    .iter()
                    .filter(|c| c.has_class("history-item"))
                    .map(|c| c.text_content.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// True when the history list shows the empty placeholder
    #[must_use]
    pub fn shows_no_history(&self) -> bool {
        self.get_element(HISTORY_LIST_ID)
            .is_some_and(|list| list.children.iter().any(|c| c.has_class("no-history")))
    }
}

impl RenderSurface for MockDom {
    fn set_display_text(&mut self, text: &str) {
        self.set_element_text(DISPLAY_ID, text);
    }

    fn set_operation_text(&mut self, text: &str) {
        self.set_element_text(OPERATION_ID, text);
    }

    fn render_history(&mut self, records: &[String]) {
        self.clear_children(HISTORY_LIST_ID);

        if records.is_empty() {
            let placeholder = DomElement::new("div")
                .with_class("no-history")
                .with_child(DomElement::new("p").with_text(NO_HISTORY_TEXT))
                .with_child(
                    DomElement::new("p")
                        .with_class("sub-text")
                        .with_text("Start calculating to see history"),
                );
            self.append_child(HISTORY_LIST_ID, placeholder);
            return;
        }

        for (i, record) in records.iter().enumerate() {
            let item = DomElement::new("div")
                .with_id(&format!("history-{i}"))
                .with_class("history-item")
                .with_text(record);
            self.append_child(HISTORY_LIST_ID, item);
        }
    }
}
