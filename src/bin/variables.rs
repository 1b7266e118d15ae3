//! Declaring variables: inference, explicit types, mutability, and shadowing.
//!
//! Run with: cargo run --bin variables

fn main() {
    // `let` declares a binding; the type is inferred from the initializer.
    let a = "initial";
    println!("{}", a);

    // Multiple values can be bound at once by destructuring a tuple.
    let (b, c) = (1, 2);
    println!("{} {}", b, c);

    let d = true;
    println!("{}", d);

    // Types can be written explicitly when inference needs a hint or the
    // reader does.
    let e: i32 = 5;
    println!("{}", e);

    // Bindings are immutable by default. Reassignment requires `mut`.
    let mut f = 10;
    f += 1;
    println!("{}", f);

    // Rust has no implicit zero values: a binding must be initialized before
    // use, and the compiler enforces it. Types that have a sensible default
    // provide it explicitly through the `Default` trait.
    let g: i32 = Default::default();
    let h: String = Default::default();
    println!("{} {:?}", g, h);

    // Shadowing rebinds a name to a new value, even one of a different type.
    let e = "now a string";
    println!("{}", e);
}
