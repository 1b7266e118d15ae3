//! Loop forms: while, for over ranges, loop, break and continue.
//!
//! Run with: cargo run --bin for_loops

fn main() {
    // The most basic loop type, with a single condition.
    let mut i = 1;
    while i <= 3 {
        println!("{}", i);
        i += 1;
    }

    // A classic counted loop is a `for` over a range. `0..3` excludes the
    // upper bound; `0..=3` would include it.
    for j in 0..3 {
        println!("{}", j);
    }

    // Ranges work anywhere an iterator does.
    for k in 0..=2 {
        println!("range iteration {}", k);
    }

    // `loop` repeats forever until a `break`.
    loop {
        println!("loop");
        break;
    }

    // `continue` skips to the next iteration.
    for n in 0..6 {
        if n % 2 == 0 {
            continue;
        }
        println!("{}", n);
    }
}
