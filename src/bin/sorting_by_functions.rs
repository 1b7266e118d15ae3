//! Custom sort orders with sort_by and sort_by_key.
//!
//! Run with: cargo run --bin sorting_by_functions

fn main() {
    // Sort strings by length instead of alphabetically. `sort_by_key`
    // derives the comparison from a key extracted per element.
    let mut fruits = vec!["peach", "banana", "kiwi"];
    fruits.sort_by_key(|s| s.len());
    println!("by length: {:?}", fruits);

    // `sort_by` takes the full comparator when the order isn't a simple
    // key, for example descending.
    fruits.sort_by(|a, b| b.len().cmp(&a.len()));
    println!("descending: {:?}", fruits);

    // The same technique sorts structs by any field.
    #[derive(Debug)]
    struct Person {
        name: String,
        age: u32,
    }

    let mut people = vec![
        Person { name: "Jax".to_string(), age: 37 },
        Person { name: "TJ".to_string(), age: 25 },
        Person { name: "Alex".to_string(), age: 72 },
    ];

    people.sort_by_key(|p| p.age);
    println!("by age: {:?}", people);

    // Ties can be broken by chaining comparisons with `then_with`.
    people.sort_by(|a, b| a.age.cmp(&b.age).then_with(|| a.name.cmp(&b.name)));
    println!("by age, then name: {:?}", people);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_sort_by_len() {
        let mut v = vec!["peach", "banana", "kiwi"];
        v.sort_by_key(|s| s.len());
        assert_eq!(v, vec!["kiwi", "peach", "banana"]);
    }
}
