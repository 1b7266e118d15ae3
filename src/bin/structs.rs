//! Structs: typed collections of fields.
//!
//! Run with: cargo run --bin structs

// A struct groups related fields under one type.
#[derive(Debug)]
struct Person {
    name: String,
    age: u32,
}

// Constructor functions are plain associated functions by convention named
// `new`. The struct is returned by value; ownership moves to the caller.
impl Person {
    fn new(name: &str) -> Person {
        // A sensible default for the remaining field.
        Person { name: name.to_string(), age: 42 }
    }
}

fn main() {
    // Create a struct with a literal, naming each field.
    println!("{:?}", Person { name: "Bob".to_string(), age: 20 });

    // Fields can be listed in any order when named.
    println!("{:?}", Person { age: 30, name: "Alice".to_string() });

    // Constructors encapsulate defaults.
    println!("{:?}", Person::new("Fred"));

    // `Box::new` places a struct on the heap when that's needed; field
    // access looks identical.
    let ann = Box::new(Person { name: "Ann".to_string(), age: 40 });
    println!("{:?}", ann);
    println!("{}", ann.age);

    // Access fields with a dot, through references too (auto-deref).
    let sean = Person { name: "Sean".to_string(), age: 50 };
    println!("{}", sean.name);
    let sp = &sean;
    println!("{}", sp.age);

    // Mutating a field requires the binding to be mutable.
    let mut sean = sean;
    sean.age = 51;
    println!("{}", sean.age);

    // Anonymous one-off groupings use tuples; for a named shape local to a
    // function, declare the struct right there.
    struct Dog {
        name: String,
        is_good: bool,
    }
    let dog = Dog { name: "Rex".to_string(), is_good: true };
    println!("{} is good: {}", dog.name, dog.is_good);
}
