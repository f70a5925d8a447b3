//! Picker session example for countrypicker-rs
//!
//! Simulates what a UI layer does: open a picker with a pre-selection,
//! feed it keystrokes, render rows, then select a country. Also shows
//! saving and restoring session state.

use countrypicker_rs::prelude::*;
use std::cell::RefCell;

fn render(session: &PickerSession<'_>) {
    println!("[{}] query={:?}", session.title(), session.query());
    for row in session.rows().iter().take(8) {
        let mark = if row.selected { '>' } else { ' ' };
        println!("  {mark} {}  {}", row.country.display_name(), row.country.dial_code());
    }
}

fn main() -> Result<()> {
    println!("=== countrypicker-rs Picker Session Example ===\n");

    let picked: RefCell<Option<Country>> = RefCell::new(None);
    let mut session = PickerSession::open(
        PickerOptions::new()
            .pre_selected("IN")
            .title("Choose Your Country")
            .on_select(|c| *picked.borrow_mut() = Some(c))
            .on_dismiss(|| println!("dismissed")),
    );

    if let Some(pos) = session.pre_selected_position() {
        println!("Scroll to row {pos} to reveal the pre-selection\n");
    }

    for q in ["i", "in", "ind"] {
        session.set_query(q)?;
        render(&session);
        println!();
    }

    // Save state as a host would before a configuration change.
    let bytes = session.snapshot().to_bytes()?;
    println!("Snapshot: {} bytes", bytes.len());
    let restored = PickerSession::restore(PickerOptions::new(), SessionSnapshot::from_bytes(&bytes)?);
    println!("Restored state: {:?}\n", restored.state());

    let chosen = session.select("IN")?;
    println!("Selected: {}", chosen.display_dial_code());
    println!("Callback saw: {:?}", picked.borrow().as_ref().map(Country::name));

    // The session is closed now.
    if let Err(e) = session.select("US") {
        println!("Second selection rejected: {e}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
