//! Keypad Calculator
//!
//! A four-function keypad calculator: one engine, several frontends.
//!
//! - [`core`]: the input state machine, arithmetic, formatting and the
//!   bounded history. No display code.
//! - [`render`]: the [`render::RenderSurface`] seam and
//!   [`render::CalculatorWidget`], which feeds input to the engine and
//!   pushes its projections to a surface.
//! - [`wasm`]: browser frontend (mock DOM always, `web-sys` binding behind the
//!   `wasm` feature).
//! - [`tui`]: terminal frontend behind the `tui` feature.
//! - [`driver`]: shared verification suites that run against every frontend.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for key in ["1", "2", "+", "8", "Enter"] {
//!     let event = InputEvent::from_key(key).unwrap();
//!     engine.apply(event).unwrap();
//! }
//! assert_eq!(engine.display(), "20");
//! assert_eq!(engine.history_records(), vec!["12 + 8 = 20"]);
//!
//! // Division by zero yields 0 rather than an error
//! engine.apply(InputEvent::Digit(5)).unwrap();
//! engine.apply(InputEvent::Operator(Operator::Divide)).unwrap();
//! engine.apply(InputEvent::Digit(0)).unwrap();
//! engine.apply(InputEvent::Equals).unwrap();
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod render;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser frontend; the mock DOM makes it testable without a browser
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::{
        format_number, CalcError, CalcResult, Calculator, CalculatorEngine, EngineState, History,
        HistoryEntry, InputEvent, Operator,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::render::{CalculatorWidget, RenderSurface};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmKeypad};
}
