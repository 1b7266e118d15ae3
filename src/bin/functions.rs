//! Defining and calling functions.
//!
//! Run with: cargo run --bin functions

// A function taking two i32s and returning their sum. The final expression
// of the body is the return value; no `return` keyword is needed there.
fn plus(a: i32, b: i32) -> i32 {
    a + b
}

// Each parameter declares its own type; there is no shorthand for runs of
// parameters sharing one type.
fn plus_plus(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

// An explicit `return` exits early.
fn clamp_positive(n: i32) -> i32 {
    if n < 0 {
        return 0;
    }
    n
}

fn main() {
    let res = plus(1, 2);
    println!("1+2 = {}", res);

    let res = plus_plus(1, 2, 3);
    println!("1+2+3 = {}", res);

    println!("clamped: {}", clamp_positive(-5));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus() {
        assert_eq!(plus(1, 2), 3);
        assert_eq!(plus(-1, 1), 0);
    }

    #[test]
    fn test_clamp_positive() {
        assert_eq!(clamp_positive(-5), 0);
        assert_eq!(clamp_positive(7), 7);
    }
}
