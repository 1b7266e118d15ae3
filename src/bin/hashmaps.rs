//! HashMap basics: insert, lookup, removal, and iteration.
//!
//! Run with: cargo run --bin hashmaps

use std::collections::HashMap;

fn main() {
    // An empty map from string keys to integer values.
    let mut m: HashMap<String, i32> = HashMap::new();

    // Insert key/value pairs.
    m.insert("k1".to_string(), 7);
    m.insert("k2".to_string(), 13);

    // Printing shows all pairs, in arbitrary order.
    println!("map: {:?}", m);

    // `get` returns an Option: Some(&value) when the key is present, None
    // otherwise. There is no silent zero value for missing keys.
    let v1 = m.get("k1").copied().unwrap_or(0);
    println!("v1: {}", v1);
    let v3 = m.get("k3").copied().unwrap_or(0);
    println!("v3: {}", v3);

    println!("len: {}", m.len());

    // `remove` deletes a pair and returns the old value if there was one.
    m.remove("k2");
    println!("map: {:?}", m);

    // `clear` empties the map.
    m.clear();
    println!("map: {:?}", m);
    println!("len: {}", m.len());

    // `contains_key` is the presence test, decoupled from the value.
    let mut m2 = HashMap::new();
    m2.insert("k1", 7);
    m2.insert("k2", 13);
    let present = m2.contains_key("k2");
    println!("present: {}", present);

    // `HashMap::from` builds a map from an array of pairs.
    let n = HashMap::from([("foo", 1), ("bar", 2)]);
    println!("map: {:?}", n);

    // Maps compare equal when they hold the same pairs.
    let n2 = HashMap::from([("foo", 1), ("bar", 2)]);
    if n == n2 {
        println!("n == n2");
    }

    // The entry API updates in place without a double lookup.
    let mut counts: HashMap<&str, i32> = HashMap::new();
    for word in ["a", "b", "a", "c", "a"] {
        *counts.entry(word).or_insert(0) += 1;
    }
    println!("counts: {:?}", counts);
}
