//! Methods: functions attached to a type through impl blocks.
//!
//! Run with: cargo run --bin methods

struct Rect {
    width: u32,
    height: u32,
}

impl Rect {
    // `&self` borrows the receiver immutably; most methods want this.
    fn area(&self) -> u32 {
        self.width * self.height
    }

    fn perim(&self) -> u32 {
        2 * self.width + 2 * self.height
    }

    // `&mut self` lets the method modify the receiver.
    fn scale(&mut self, factor: u32) {
        self.width *= factor;
        self.height *= factor;
    }
}

fn main() {
    let mut r = Rect { width: 10, height: 5 };

    println!("area:  {}", r.area());
    println!("perim: {}", r.perim());

    // Method syntax auto-references: calling through a reference looks the
    // same as calling on the value.
    let rp = &r;
    println!("area:  {}", rp.area());
    println!("perim: {}", rp.perim());

    r.scale(2);
    println!("scaled area: {}", r.area());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_and_perim() {
        let r = Rect { width: 10, height: 5 };
        assert_eq!(r.area(), 50);
        assert_eq!(r.perim(), 30);
    }

    #[test]
    fn test_scale() {
        let mut r = Rect { width: 2, height: 3 };
        r.scale(3);
        assert_eq!(r.area(), 54);
    }
}
