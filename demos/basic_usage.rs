//! Basic usage example for countrypicker-rs
//!
//! This example demonstrates how to:
//! - Read the built-in catalog
//! - Filter it the way a picker search box does
//! - Look up countries by code and dial code
//! - Narrow the list with a whitelist or blacklist

use countrypicker_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrypicker-rs Basic Usage Example ===\n");

    // Example 1: The built-in catalog
    println!("--- Example 1: List countries ---");
    let countries = all_countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, country.display_name());
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: Filter like the search box, keystroke by keystroke
    println!("--- Example 2: Filtering while typing ---");
    let typed = "united";
    for end in 1..=typed.len() {
        let q = &typed[..end];
        println!("{q:<8} -> {} matches", filter(countries, q).len());
    }
    for c in filter(countries, typed) {
        println!("- {}", c.display_dial_code());
    }
    println!();

    // Example 3: Lookup by code
    println!("--- Example 3: Find country by code ---");
    if let Some(country) = countries.find_by_code("US") {
        println!("Found: {}", country.name());
        println!("Code: {}", country.code());
        println!("Flag: {}", country.flag());
        println!("Dial code: {}", country.dial_code());
    }
    println!();

    // Example 4: Dial codes
    println!("--- Example 4: Find countries by dial code ---");
    let phone_code = "+44";
    let with_code = countries.find_by_dial_code(phone_code);
    println!("Countries with dial code {}: {}", phone_code, with_code.len());
    for country in with_code {
        println!("- {}", country.name());
    }
    println!();

    // Example 5: Whitelist / blacklist before showing the picker
    println!("--- Example 5: Narrowing the list ---");
    let english = Catalog::builtin().only_codes(&["US", "GB", "CA", "AU", "NZ", "IE", "ZA"]);
    println!("English-speaking subset: {}", english.len());
    let allowed = Catalog::builtin().excluding_codes(&["KP", "IR"]);
    println!("Without blocked codes: {}", allowed.len());
    println!();

    // Example 6: Statistics
    println!("--- Example 6: Catalog statistics ---");
    let stats = Catalog::builtin().stats();
    println!("Countries: {}", stats.countries);
    println!("Distinct dial codes: {}", stats.dial_codes);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
