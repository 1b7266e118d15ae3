//! Errors as values: Result, the ? operator, and custom error types.
//!
//! Run with: cargo run --bin errors

use thiserror::Error;

// A fallible function returns Result. Ok carries the answer, Err the
// failure; callers must look at which one they got.
fn f1(arg: i32) -> Result<i32, String> {
    if arg == 42 {
        // A bare String works as a quick error type.
        return Err("can't work with 42".to_string());
    }
    Ok(arg + 3)
}

// Real programs define structured error types. thiserror derives the
// Display and Error impls from the annotations.
#[derive(Debug, Error, PartialEq)]
enum ArgError {
    #[error("{arg} - can't work with it")]
    Rejected { arg: i32 },
    #[error("argument {0} out of range")]
    OutOfRange(i32),
}

fn f2(arg: i32) -> Result<i32, ArgError> {
    if arg == 42 {
        return Err(ArgError::Rejected { arg });
    }
    if arg < 0 {
        return Err(ArgError::OutOfRange(arg));
    }
    Ok(arg + 3)
}

// The ? operator propagates an Err to the caller and unwraps an Ok, which
// keeps the happy path linear.
fn f2_twice(arg: i32) -> Result<i32, ArgError> {
    let a = f2(arg)?;
    let b = f2(a)?;
    Ok(b)
}

fn main() {
    for i in [7, 42] {
        match f1(i) {
            Ok(r) => println!("f1 worked: {}", r),
            Err(e) => println!("f1 failed: {}", e),
        }
    }

    for i in [7, 42, -1] {
        match f2(i) {
            Ok(r) => println!("f2 worked: {}", r),
            Err(e) => println!("f2 failed: {}", e),
        }
    }

    // Matching on the error enum recovers the structured data, no downcast
    // needed.
    if let Err(ArgError::Rejected { arg }) = f2(42) {
        println!("rejected arg was {}", arg);
    }

    println!("f2_twice(7) = {:?}", f2_twice(7));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f1() {
        assert_eq!(f1(7), Ok(10));
        assert!(f1(42).is_err());
    }

    #[test]
    fn test_f2_variants() {
        assert_eq!(f2(42), Err(ArgError::Rejected { arg: 42 }));
        assert_eq!(f2(-3), Err(ArgError::OutOfRange(-3)));
        assert_eq!(f2(1), Ok(4));
    }

    #[test]
    fn test_error_display() {
        let e = ArgError::Rejected { arg: 42 };
        assert_eq!(e.to_string(), "42 - can't work with it");
    }

    #[test]
    fn test_question_mark_propagates() {
        assert_eq!(f2_twice(36), Ok(42));
        assert_eq!(f2_twice(39), Err(ArgError::Rejected { arg: 42 }));
    }
}
