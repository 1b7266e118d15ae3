//! Generic functions and generic types.
//!
//! Run with: cargo run --bin generics

use std::collections::HashMap;
use std::collections::VecDeque;
use std::hash::Hash;

// A generic function over any map. K needs `Clone` so the keys can be
// returned by value, and `Eq + Hash` because HashMap keys require it.
fn map_keys<K: Clone + Eq + Hash, V>(m: &HashMap<K, V>) -> Vec<K> {
    m.keys().cloned().collect()
}

// A generic type: a FIFO queue holding values of any single type T. The
// compiler monomorphizes a concrete version per T used.
struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    fn new() -> Self {
        Queue { items: VecDeque::new() }
    }

    fn push(&mut self, v: T) {
        self.items.push_back(v);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn all_items(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

fn main() {
    let m = HashMap::from([(1, 2), (2, 4), (4, 8)]);

    // Type parameters are inferred from the argument; no turbofish needed.
    let mut keys = map_keys(&m);
    keys.sort();
    println!("keys: {:?}", keys);

    // They can also be spelled out explicitly.
    let _ = map_keys::<i32, i32>(&m);

    let mut q: Queue<i32> = Queue::new();
    q.push(10);
    q.push(13);
    q.push(23);
    println!("queue: {:?}", q.all_items().collect::<Vec<_>>());
    println!("pop: {:?}", q.pop());
    println!("queue: {:?}", q.all_items().collect::<Vec<_>>());

    // The same Queue works for strings without any new code.
    let mut names: Queue<String> = Queue::new();
    names.push("alice".to_string());
    names.push("bob".to_string());
    println!("first out: {:?}", names.pop());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keys() {
        let m = HashMap::from([("a", 1), ("b", 2)]);
        let mut keys = map_keys(&m);
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_queue_fifo() {
        let mut q = Queue::new();
        q.push(1);
        q.push(2);
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), None);
    }
}
