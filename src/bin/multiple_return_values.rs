//! Returning multiple values from a function with tuples.
//!
//! Run with: cargo run --bin multiple_return_values

// A tuple is the natural way to hand back more than one value. The `(i32,
// i32)` in the signature shows the function returns two i32s.
fn vals() -> (i32, i32) {
    (3, 7)
}

fn main() {
    // Destructure the two return values with a `let` pattern.
    let (a, b) = vals();
    println!("{}", a);
    println!("{}", b);

    // If you only want a subset of the returned values, use `_` as a
    // placeholder for the rest.
    let (_, c) = vals();
    println!("{}", c);

    // The tuple can also be kept whole and indexed by position.
    let pair = vals();
    println!("{} {}", pair.0, pair.1);
}
