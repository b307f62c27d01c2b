//! Browser frontend
//!
//! The mock DOM, keypad and driver are always compiled so the browser path
//! is testable natively; the real `web-sys` binding needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, WebSurface};
pub use dom::{
    DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, DISPLAY_ID, HISTORY_LIST_ID, NO_HISTORY_TEXT,
    OPERATION_ID,
};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, WasmKeypad, KEYPAD_ID};
