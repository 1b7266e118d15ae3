//! References and Box: passing by value versus pointing at data.
//!
//! Run with: cargo run --bin references

// This function gets a copy of the i32; assigning to the parameter changes
// nothing at the call site.
fn zero_val(mut ival: i32) {
    ival = 0;
    let _ = ival;
}

// This one takes a mutable reference. Writing through `*iref` changes the
// caller's variable.
fn zero_ref(iref: &mut i32) {
    *iref = 0;
}

fn main() {
    let mut i = 1;
    println!("initial: {}", i);

    zero_val(i);
    println!("zero_val: {}", i);

    // `&mut i` lends the variable out for writing. The borrow ends when the
    // function returns.
    zero_ref(&mut i);
    println!("zero_ref: {}", i);

    // References can be printed as addresses for illustration, though code
    // rarely cares about the numeric value.
    println!("address: {:p}", &i);

    // `Box` puts a value on the heap and owns it. Dereferencing reads or
    // writes the heap value; the allocation is freed when the box drops.
    let mut boxed = Box::new(41);
    *boxed += 1;
    println!("boxed: {}", boxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ref_mutates() {
        let mut v = 99;
        zero_ref(&mut v);
        assert_eq!(v, 0);
    }
}
