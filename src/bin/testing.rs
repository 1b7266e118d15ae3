//! Unit testing idioms and quick benchmarking.
//!
//! Run with: cargo run --bin testing  (and `cargo test` for the tests)

use std::time::Instant;

// The code under test: an integer minimum.
fn int_min(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

fn main() {
    // Tests live in a #[cfg(test)] module beside the code and run under
    // `cargo test`; see the module below. This main just shows the
    // micro-benchmark flavor of the same idea: run the function many
    // times, divide the elapsed time.
    const N: u32 = 10_000_000;
    let start = Instant::now();
    let mut acc = 0i64;
    for i in 0..N {
        // Feed varying inputs so the work is not optimized away.
        acc += int_min(i as i32, 100) as i64;
    }
    let elapsed = start.elapsed();
    println!("int_min: {} iterations in {:?}", N, elapsed);
    println!("         ~{} ns/op (acc {})", elapsed.as_nanos() / N as u128, acc);

    // Real benchmarking wants a harness (criterion) that handles warmup
    // and statistics; this inline version is fine for a first look.
}

#[cfg(test)]
mod tests {
    use super::*;

    // A single-case test: call the function, assert on the result. A
    // failing assert reports values and location without stopping other
    // tests.
    #[test]
    fn test_int_min_basic() {
        assert_eq!(int_min(45, -2), -2);
    }

    // Table-driven tests: the cases are data, the loop is the test body.
    // Adding a case is one line.
    #[test]
    fn test_int_min_table() {
        let cases = [
            (0, 1, 0),
            (1, 0, 0),
            (2, -2, -2),
            (0, -1, -1),
            (-1, 0, -1),
            (7, 7, 7),
        ];
        for (a, b, want) in cases {
            assert_eq!(int_min(a, b), want, "int_min({}, {})", a, b);
        }
    }

    // #[should_panic] documents that a call is expected to panic.
    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_divide_by_zero_panics() {
        let zero = [0i32; 1];
        let _ = 1 / zero[0];
    }
}
