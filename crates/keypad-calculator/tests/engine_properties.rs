//! Property-based tests for the calculator engine

use keypad_calculator::core::{
    format_number, CalculatorEngine, EngineState, History, InputEvent, Operator,
};
use keypad_calculator::render::CalculatorWidget;
use keypad_calculator::wasm::{MockDom, DISPLAY_ID, OPERATION_ID};
use proptest::prelude::*;

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Any event, digits weighted so numbers actually get built
fn input_event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => (0u8..=9).prop_map(InputEvent::Digit),
        1 => Just(InputEvent::Decimal),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::Backspace),
        1 => Just(InputEvent::ClearHistory),
    ]
}

fn run(events: &[InputEvent]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for event in events {
        // Rejected events leave the engine untouched
        let _ = engine.apply(*event);
    }
    engine
}

proptest! {
    /// Digits typed from idle concatenate with leading zeros dropped
    #[test]
    fn prop_digit_entry_concatenates(digits in prop::collection::vec(0u8..=9, 1..15)) {
        let mut engine = CalculatorEngine::new();
        for d in &digits {
            engine.apply(InputEvent::Digit(*d)).unwrap();
        }

        let typed: String = digits.iter().map(u8::to_string).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(engine.display(), expected);
    }

    /// format_number is a fixed point of format-then-parse
    #[test]
    fn prop_format_number_idempotent(n in -1e12f64..1e12f64) {
        let once = format_number(n);
        let reparsed: f64 = once.parse().unwrap();
        prop_assert_eq!(format_number(reparsed), once);
    }

    /// The display always holds a finite number, whatever was pressed
    #[test]
    fn prop_display_always_finite(events in prop::collection::vec(input_event_strategy(), 0..200)) {
        let engine = run(&events);
        let value: f64 = engine.display().parse().unwrap();
        prop_assert!(value.is_finite());
        prop_assert!(!engine.display().is_empty());
    }

    /// History never exceeds its capacity
    #[test]
    fn prop_history_bounded(events in prop::collection::vec(input_event_strategy(), 0..300)) {
        let engine = run(&events);
        prop_assert!(engine.history().len() <= History::DEFAULT_CAPACITY);
    }

    /// The most recent calculation is always at index 0
    #[test]
    fn prop_newest_history_first(events in prop::collection::vec(input_event_strategy(), 0..100)) {
        let mut engine = run(&events);
        for event in [
            InputEvent::Clear,
            InputEvent::Digit(2),
            InputEvent::Operator(Operator::Multiply),
            InputEvent::Digit(4),
            InputEvent::Equals,
        ] {
            engine.apply(event).unwrap();
        }
        prop_assert_eq!(&engine.history_records()[0], "2 * 4 = 8");
    }

    /// Clear returns to idle and leaves history alone
    #[test]
    fn prop_clear_keeps_history(events in prop::collection::vec(input_event_strategy(), 0..100)) {
        let mut engine = run(&events);
        let before = engine.history_records();

        engine.apply(InputEvent::Clear).unwrap();
        prop_assert_eq!(engine.display(), "0");
        prop_assert_eq!(engine.pending_operand(), None);
        prop_assert_eq!(engine.pending_operator(), None);
        prop_assert!(!engine.is_waiting_for_operand());
        prop_assert_eq!(engine.state(), EngineState::Idle);
        prop_assert_eq!(engine.history_records(), before);
    }

    /// The operation line is empty exactly when nothing is pending
    #[test]
    fn prop_operation_text_tracks_pending(events in prop::collection::vec(input_event_strategy(), 0..100)) {
        let engine = run(&events);
        let pending = engine.pending_operand().is_some() && engine.pending_operator().is_some();
        prop_assert_eq!(engine.operation_text().is_empty(), !pending);
    }

    /// The mock page always shows what the engine holds
    #[test]
    fn prop_rendered_page_matches_engine(events in prop::collection::vec(input_event_strategy(), 0..100)) {
        let mut widget = CalculatorWidget::new(MockDom::calculator());
        for event in &events {
            widget.handle(*event);
        }
        let dom = widget.surface();
        prop_assert_eq!(dom.get_element_text(DISPLAY_ID), Some(widget.engine().display()));
        let operation = widget.engine().operation_text();
        prop_assert_eq!(dom.get_element_text(OPERATION_ID), Some(operation.as_str()));
        prop_assert_eq!(dom.history_texts(), widget.engine().history_records());
    }
}
