//! Browser frontend demo on the mock DOM
//!
//! Drives the calculator page the way a user would (button clicks and
//! keydowns), prints what the page shows, then runs the shared verification
//! suites against the same driver the TUI is checked with.
//!
//! Run with: cargo run --example calculator_wasm_demo
//!
//! `RUST_LOG=keypad_calculator=debug` shows every event the engine applies.

use keypad_calculator::driver::{
    run_all_suites, verify_basic_arithmetic, verify_chained_operations,
    verify_clear_history, verify_decimal_input, verify_divide_by_zero, verify_history_limit,
    verify_keypad_buttons,
};
use keypad_calculator::prelude::*;
use keypad_calculator::wasm::{CLEAR_HISTORY_ID, DISPLAY_ID, OPERATION_ID};
use tracing_subscriber::EnvFilter;

fn print_page(driver: &WasmDriver) {
    let dom = driver.dom();
    println!(
        "   operation: {:?}",
        dom.get_element_text(OPERATION_ID).unwrap_or_default()
    );
    println!(
        "   display:   {:?}",
        dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    );
    if dom.shows_no_history() {
        println!("   history:   (no calculations yet)");
    } else {
        for (i, item) in dom.history_texts().iter().enumerate() {
            println!("   history-{i}: {item}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  Keypad Calculator - Browser Frontend (mock DOM)            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut driver = WasmDriver::new();

    println!("1. Fresh page:");
    print_page(&driver);

    println!("\n2. Click 1, 2, +:");
    for id in ["btn-1", "btn-2", "btn-plus"] {
        driver.click(id);
    }
    print_page(&driver);

    println!("\n3. Click 8, =:");
    for id in ["btn-8", "btn-equals"] {
        driver.click(id);
    }
    print_page(&driver);

    println!("\n4. Keyboard: 9 / 0 Enter (division by zero yields 0):");
    for key in ["9", "/", "0", "Enter"] {
        driver.key_down(key);
    }
    print_page(&driver);

    println!("\n5. Keyboard: 1 . 5 * 4 Enter, then Backspace:");
    for key in ["1", ".", "5", "*", "4", "Enter", "Backspace"] {
        driver.key_down(key);
    }
    print_page(&driver);

    println!("\n6. Events seen by the page:");
    for event in driver.dom().event_history() {
        println!("   {event:?}");
    }

    println!("\n7. Click clear history:");
    driver.click(CLEAR_HISTORY_ID);
    print_page(&driver);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Running shared verification suites on WasmDriver");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    let suites: &[(&str, fn(&mut WasmDriver))] = &[
        ("verify_basic_arithmetic", verify_basic_arithmetic),
        ("verify_decimal_input", verify_decimal_input),
        ("verify_divide_by_zero", verify_divide_by_zero),
        ("verify_chained_operations", verify_chained_operations),
        ("verify_history_limit", verify_history_limit),
        ("verify_clear_history", verify_clear_history),
        ("verify_keypad_buttons", verify_keypad_buttons),
    ];
    for (name, suite) in suites {
        let mut driver = WasmDriver::new();
        print!("  ✓ {name} ... ");
        suite(&mut driver);
        println!("PASSED");
    }

    let mut driver = WasmDriver::new();
    print!("  ✓ run_all_suites ... ");
    run_all_suites(&mut driver);
    println!("PASSED");

    println!();
    println!("  All suites passed on WasmDriver");
}
