//! Error handling example for countrypicker-rs
//!
//! This example demonstrates validation failures and edge cases

use countrypicker_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrypicker-rs Error Handling Example ===\n");

    // Example 1: Construction-time validation
    println!("--- Example 1: Invalid countries ---");
    let attempts = [
        ("", "US", "🇺🇸", "+1"),
        ("United States", "USA", "🇺🇸", "+1"),
        ("United States", "US", "", "+1"),
        ("United States", "US", "🇺🇸", "1"),
    ];
    for (name, code, flag, dial) in attempts {
        match Country::new(name, code, flag, dial) {
            Ok(c) => println!("  ✓ {}", c.display_name()),
            Err(e) => println!("  ✗ ({name:?}, {code:?}, {flag:?}, {dial:?}): {e}"),
        }
    }
    println!();

    // Example 2: Flags that cannot be derived
    println!("--- Example 2: Derived flags ---");
    for code in ["DE", "de", "D1"] {
        match Country::with_derived_flag("Somewhere", code, "+49") {
            Ok(c) => println!("  {code}: {}", c.flag()),
            Err(e) => println!("  {code}: {e}"),
        }
    }
    println!();

    // Example 3: Lookups that find nothing are not errors
    println!("--- Example 3: Missing codes ---");
    for code in ["XX", "", "ABC", "us"] {
        match all_countries().find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.code()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!("  Empty filter result for 'zzz': {}", filter(all_countries(), "zzz").len());
    println!();

    // Example 4: Loading an invalid custom list
    println!("--- Example 4: Invalid custom list ---");
    match load_countries_from_str(r#"[{"name": "Nowhere", "code": "NW", "dial_code": "00"}]"#) {
        Ok(list) => println!("  loaded {} countries", list.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 5: Using a closed session
    println!("--- Example 5: Closed session ---");
    let mut session = PickerSession::open(PickerOptions::new());
    session.dismiss()?;
    match session.select("US") {
        Ok(_) => println!("  unexpected selection"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
