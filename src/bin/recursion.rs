//! Recursive functions.
//!
//! Run with: cargo run --bin recursion

// The classic factorial, with a base case of fact(0) = 1.
fn fact(n: u64) -> u64 {
    if n == 0 {
        return 1;
    }
    n * fact(n - 1)
}

// Plain `fn` items can refer to themselves freely, so mutually recursive
// helpers need no forward declarations.
fn fib(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

fn main() {
    println!("fact(7) = {}", fact(7));

    // Closures cannot call themselves by name; recursion from a closure
    // goes through a named fn item like `fib` here.
    let fib_closure = |n: u64| fib(n);
    println!("fib(7) = {}", fib_closure(7));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact() {
        assert_eq!(fact(0), 1);
        assert_eq!(fact(5), 120);
    }

    #[test]
    fn test_fib() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(fib(i as u64), *want);
        }
    }
}
