//! Branching with if and else; if is an expression.
//!
//! Run with: cargo run --bin if_else

fn main() {
    // A straightforward branch. Conditions take no parentheses, and the
    // braces are mandatory.
    if 7 % 2 == 0 {
        println!("7 is even");
    } else {
        println!("7 is odd");
    }

    // An `if` without an `else` is fine when there is nothing to do
    // otherwise.
    if 8 % 4 == 0 {
        println!("8 is divisible by 4");
    }

    // Branches chain with `else if`.
    let num = 9;
    if num < 0 {
        println!("{} is negative", num);
    } else if num < 10 {
        println!("{} has 1 digit", num);
    } else {
        println!("{} has multiple digits", num);
    }

    // `if` is an expression: both arms produce a value, which replaces the
    // ternary operator found in other languages.
    let label = if num % 2 == 0 { "even" } else { "odd" };
    println!("{} is {}", num, label);
}
