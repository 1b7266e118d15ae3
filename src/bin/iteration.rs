//! Iterating over collections: slices, maps, strings, and enumerate.
//!
//! Run with: cargo run --bin iteration

use std::collections::HashMap;

fn main() {
    // Sum the numbers in a slice by iterating over it.
    let nums = [2, 3, 4];
    let mut sum = 0;
    for num in nums {
        sum += num;
    }
    println!("sum: {}", sum);

    // `enumerate` supplies the index alongside each element.
    for (i, num) in nums.iter().enumerate() {
        if *num == 3 {
            println!("index: {}", i);
        }
    }

    // Iterating a map yields key/value pairs, in arbitrary order.
    let kvs = HashMap::from([("a", "apple"), ("b", "banana")]);
    for (k, v) in &kvs {
        println!("{} -> {}", k, v);
    }

    // `keys()` iterates the keys alone.
    for k in kvs.keys() {
        println!("key: {}", k);
    }

    // Iterating a string's `char_indices` yields each character and the
    // byte offset where its UTF-8 encoding starts.
    for (i, c) in "rust".char_indices() {
        println!("{} {}", i, c);
    }
}
