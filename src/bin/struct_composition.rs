//! Composition over inheritance: nested structs, delegation, and default
//! trait methods.
//!
//! Run with: cargo run --bin struct_composition

use std::fmt;

struct Base {
    num: i32,
}

impl Base {
    fn describe(&self) -> String {
        format!("base with num={}", self.num)
    }
}

// A Container holds a Base as an ordinary named field. Rust has no field
// promotion; access goes through the field name, which keeps the data path
// explicit.
struct Container {
    base: Base,
    str_field: String,
}

// Behavior is shared by delegating: Container forwards to its Base where the
// behavior belongs to the inner type.
impl Container {
    fn describe(&self) -> String {
        self.base.describe()
    }
}

// Traits cover the other half of embedding: a trait with a default method
// bestows shared behavior on every implementor.
trait Describer: fmt::Debug {
    fn name(&self) -> &str;

    // Implementors get this for free unless they override it.
    fn describe(&self) -> String {
        format!("{} ({:?})", self.name(), self)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "num: {}, str: {}", self.base.num, self.str_field)
    }
}

impl Describer for Container {
    fn name(&self) -> &str {
        &self.str_field
    }
}

fn main() {
    let co = Container {
        base: Base { num: 1 },
        str_field: "some name".to_string(),
    };

    // Inner fields are reached through the explicit path.
    println!("co = {{num: {}, str: {}}}", co.base.num, co.str_field);
    println!("also num: {}", co.base.num);

    // The delegated method reads like a promoted one at the call site.
    println!("describe: {}", Container::describe(&co));

    // Through the trait object, the default method runs against Container's
    // own name() and Debug output.
    let d: &dyn Describer = &co;
    println!("describer: {}", d.describe());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegation() {
        let co = Container {
            base: Base { num: 7 },
            str_field: "x".to_string(),
        };
        assert_eq!(Container::describe(&co), "base with num=7");
    }
}
