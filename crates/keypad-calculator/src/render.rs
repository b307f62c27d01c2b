//! Rendering seam between the engine and a display surface
//!
//! A [`CalculatorWidget`] owns one [`CalculatorEngine`] and one
//! [`RenderSurface`]. Inputs go to the engine; after every handled input the
//! widget pushes the display and operation text to the surface, and the
//! history list when it changed.

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::core::{CalcResult, CalculatorEngine, InputEvent};

/// Something that can show the calculator's three projections
pub trait RenderSurface {
    /// Shows the main display text
    fn set_display_text(&mut self, text: &str);

    /// Shows the pending operation line (may be empty)
    fn set_operation_text(&mut self, text: &str);

    /// Replaces the history list; `records` is newest first and may be empty
    fn render_history(&mut self, records: &[String]);
}

/// Calculator engine bound to a render surface
#[derive(Debug)]
pub struct CalculatorWidget<R: RenderSurface> {
    engine: CalculatorEngine,
    surface: R,
}

impl<R: RenderSurface> CalculatorWidget<R> {
    /// Creates a widget with a fresh engine and renders its initial state
    pub fn new(surface: R) -> Self {
        Self::with_engine(CalculatorEngine::new(), surface)
    }

    /// Creates a widget from a configuration
    pub fn with_config(config: &CalculatorConfig, surface: R) -> CalcResult<Self> {
        Ok(Self::with_engine(CalculatorEngine::with_config(config)?, surface))
    }

    /// Creates a widget around an existing engine and renders it
    pub fn with_engine(engine: CalculatorEngine, surface: R) -> Self {
        let mut widget = Self { engine, surface };
        widget.render_all();
        widget
    }

    /// Applies an event and re-renders
    ///
    /// Returns `false` when the event was rejected; the engine and surface are
    /// then left as they were.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match self.engine.apply(event) {
            Ok(update) => {
                self.render_display();
                if update.history_changed {
                    self.render_history();
                }
                true
            }
            Err(e) => {
                warn!(?event, error = %e, "input rejected");
                false
            }
        }
    }

    /// Handles a keyboard `key` value; unmapped keys are ignored
    pub fn handle_key(&mut self, key: &str) -> bool {
        match InputEvent::from_key(key) {
            Some(event) => self.handle(event),
            None => {
                debug!(key, "ignoring unmapped key");
                false
            }
        }
    }

    /// Handles a keypad button's `data-action` / `data-value` pair
    pub fn handle_button(&mut self, action: &str, value: Option<&str>) -> bool {
        match InputEvent::from_button(action, value) {
            Some(event) => self.handle(event),
            None => {
                debug!(action, ?value, "ignoring unknown button");
                false
            }
        }
    }

    /// Pushes every projection to the surface
    pub fn render_all(&mut self) {
        self.render_display();
        self.render_history();
    }

    fn render_display(&mut self) {
        self.surface.set_display_text(self.engine.display());
        self.surface.set_operation_text(&self.engine.operation_text());
    }

    fn render_history(&mut self) {
        self.surface.render_history(&self.engine.history_records());
    }

    /// The engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The render surface
    #[must_use]
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Mutable access to the render surface
    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }
}
