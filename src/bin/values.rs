//! Basic value types: strings, integers, floats, and booleans.
//!
//! Run with: cargo run --bin values

fn main() {
    // Strings can be concatenated with `+` (a `String` on the left, a `&str`
    // on the right) or, more commonly, built with `format!`.
    println!("{}", "rust".to_string() + "aceans");
    println!("{}", format!("{}{}", "rust", "aceans"));

    // Integers and floats. Integer and float arithmetic never mix silently;
    // a cast has to be spelled out.
    println!("1+1 = {}", 1 + 1);
    println!("7.0/3.0 = {}", 7.0 / 3.0);
    println!("7/3 = {} (integer division truncates)", 7 / 3);
    println!("7 as f64 / 3.0 = {}", 7 as f64 / 3.0);

    // Booleans, with the usual short-circuiting operators.
    println!("{}", true && false);
    println!("{}", true || false);
    println!("{}", !true);
}
