//! Functions over any number of arguments: slices and macros.
//!
//! Run with: cargo run --bin variadic_functions

// Rust functions have a fixed arity, so "any number of ints" is expressed as
// a slice parameter. Callers pass as many values as they like in one `&[..]`.
fn sum(nums: &[i32]) -> i32 {
    print!("{:?} ", nums);
    let total: i32 = nums.iter().sum();
    println!("{}", total);
    total
}

// True variadic call syntax lives in macros. `println!` is the everyday
// example; here is a small one of our own that folds any number of
// expressions into a sum.
macro_rules! sum_of {
    ($($x:expr),+ $(,)?) => {
        0 $(+ $x)+
    };
}

fn main() {
    // Slice literals at the call site read much like variadic calls.
    sum(&[1, 2]);
    sum(&[1, 2, 3]);

    // If the values already live in a Vec, pass a borrow of it directly;
    // there is no spread operator because none is needed.
    let nums = vec![1, 2, 3, 4];
    sum(&nums);

    // The macro accepts any argument count at compile time.
    println!("sum_of!(1, 2) = {}", sum_of!(1, 2));
    println!("sum_of!(1, 2, 3, 4) = {}", sum_of!(1, 2, 3, 4));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_slice() {
        assert_eq!(sum(&[1, 2, 3]), 6);
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn test_sum_macro() {
        assert_eq!(sum_of!(1, 2, 3, 4), 10);
    }
}
