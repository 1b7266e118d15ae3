//! Parsing numbers from strings.
//!
//! Run with: cargo run --bin number_parsing

fn main() {
    // `parse` is driven by the target type annotation.
    let f: f64 = "1.234".parse().expect("valid float");
    println!("{}", f);

    let i: i64 = "123".parse().expect("valid int");
    println!("{}", i);

    // Hex and other bases go through from_str_radix. The prefix is not
    // consumed automatically, so strip it first.
    let d = i64::from_str_radix("1c8", 16).expect("valid hex");
    println!("{}", d);

    let u: u64 = "789".parse().expect("valid uint");
    println!("{}", u);

    // Parsing into a smaller type enforces its range.
    let k: i32 = "135".parse().expect("fits in i32");
    println!("{}", k);

    // Bad input yields an Err describing the failure instead of a panic,
    // as long as you don't unwrap it.
    let e = "wat".parse::<i64>();
    println!("{:?}", e);

    let overflow = "99999999999".parse::<i32>();
    println!("{:?}", overflow);
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_parse_ok() {
        assert_eq!("123".parse::<i64>(), Ok(123));
        assert_eq!("1.5".parse::<f64>(), Ok(1.5));
    }

    #[test]
    fn test_parse_errors() {
        assert!("wat".parse::<i64>().is_err());
        assert!("99999999999".parse::<i32>().is_err());
    }

    #[test]
    fn test_radix() {
        assert_eq!(i64::from_str_radix("ff", 16), Ok(255));
    }
}
