//! Output formatting - plaintext and JSON.

use serde_json::json;

/// Prints unused value paths in plain text format.
pub fn print_plain(unused: &[String]) {
    if unused.is_empty() {
        println!("No unused values found.");
    } else {
        println!("UNUSED VALUES ({}):", unused.len());
        for path in unused {
            println!("- {}", path);
        }
    }
}

/// Prints unused value paths in JSON format.
///
/// Falls back to simple format if serialization fails (should never happen
/// with string arrays, but NASA-grade means handling all cases).
pub fn print_json(unused: &[String]) {
    match serde_json::to_string_pretty(&json!({ "unused": unused })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            // Fallback: output in a simpler format
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"unused\": {:?}}}", unused);
        }
    }
}
