//! Traits: named collections of method signatures, implemented per type.
//!
//! Run with: cargo run --bin traits

use std::f64::consts::PI;
use std::fmt;

// A basic trait for geometric shapes.
trait Geometry {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
}

struct Rect {
    width: f64,
    height: f64,
}

struct Circle {
    radius: f64,
}

// Unlike structural interfaces, a type opts in explicitly with an `impl
// Trait for Type` block.
impl Geometry for Rect {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn perimeter(&self) -> f64 {
        2.0 * self.width + 2.0 * self.height
    }
}

impl Geometry for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rect {}x{}", self.width, self.height)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle r={}", self.radius)
    }
}

// A generic function bounded by the trait works on any shape, dispatched
// statically.
fn measure<G: Geometry + fmt::Display>(g: &G) {
    println!("{}", g);
    println!("area:      {}", g.area());
    println!("perimeter: {}", g.perimeter());
}

// `dyn Geometry` is the dynamic-dispatch form: one function body, the
// concrete method chosen at runtime through a vtable.
fn total_area(shapes: &[Box<dyn Geometry>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

fn main() {
    let r = Rect { width: 3.0, height: 4.0 };
    let c = Circle { radius: 5.0 };

    measure(&r);
    measure(&c);

    let shapes: Vec<Box<dyn Geometry>> = vec![
        Box::new(Rect { width: 3.0, height: 4.0 }),
        Box::new(Circle { radius: 5.0 }),
    ];
    println!("total area: {}", total_area(&shapes));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let r = Rect { width: 3.0, height: 4.0 };
        assert_eq!(r.area(), 12.0);
        assert_eq!(r.perimeter(), 14.0);
    }

    #[test]
    fn test_total_area_dyn() {
        let shapes: Vec<Box<dyn Geometry>> = vec![
            Box::new(Rect { width: 2.0, height: 2.0 }),
            Box::new(Rect { width: 1.0, height: 1.0 }),
        ];
        assert_eq!(total_area(&shapes), 5.0);
    }
}
