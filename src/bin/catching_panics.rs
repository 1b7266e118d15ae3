//! Stopping a panic from taking the program down with catch_unwind.
//!
//! Run with: cargo run --bin catching_panics

use std::panic;

// This function panics.
fn may_panic() {
    panic!("a problem");
}

fn main() {
    // `catch_unwind` runs a closure and converts a panic inside it into an
    // Err holding the panic payload. A server can use this to drop one bad
    // request without crashing the rest, though Result is the right tool
    // for errors you expect.
    let result = panic::catch_unwind(|| {
        may_panic();
        println!("after may_panic()"); // never reached
    });

    match result {
        Ok(_) => println!("no panic"),
        Err(payload) => {
            // The payload is usually a &str or String message.
            if let Some(msg) = payload.downcast_ref::<&str>() {
                println!("recovered. error: {}", msg);
            } else if let Some(msg) = payload.downcast_ref::<String>() {
                println!("recovered. error: {}", msg);
            } else {
                println!("recovered from a non-string panic");
            }
        }
    }

    // Execution continues normally after the catch.
    println!("after catch_unwind");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_unwind_returns_err() {
        let result = panic::catch_unwind(|| may_panic());
        assert!(result.is_err());
    }

    #[test]
    fn test_catch_unwind_ok_passthrough() {
        let result = panic::catch_unwind(|| 2 + 2);
        assert_eq!(result.ok(), Some(4));
    }
}
