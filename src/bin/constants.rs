//! Constants: `const` items, their types, and use in expressions.
//!
//! Run with: cargo run --bin constants

// A `const` can be declared at module scope. Unlike `let`, a constant always
// requires an explicit type and must be computable at compile time.
const S: &str = "constant";

// Numeric constants participate in arithmetic like any other value of their
// type.
const N: i64 = 500_000_000;

fn main() {
    println!("{}", S);

    // Constants can also be declared inside a function body.
    const D: f64 = 3e20 / N as f64;
    println!("{}", D);

    // A cast converts the constant to the type a given context requires.
    println!("{}", D as i64);

    // f64::sin expects an f64, so we convert the integer constant.
    println!("{}", (N as f64).sin());
}
