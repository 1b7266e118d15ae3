//! Formatting and parsing dates with pattern strings.
//!
//! Run with: cargo run --bin time_formatting_parsing

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Utc};

fn main() {
    // RFC 3339 is the interchange default; chrono reads and writes it
    // directly.
    let now = Utc::now();
    println!("{}", now.to_rfc3339());

    let t1 = DateTime::parse_from_rfc3339("2012-11-01T22:08:41+00:00").expect("valid rfc3339");
    println!("{}", t1);

    // Formatting uses strftime-style directives rather than a reference
    // date.
    println!("{}", now.format("%I:%M%p"));
    println!("{}", now.format("%a %b %e %H:%M:%S %Y"));
    println!("{}", now.format("%Y-%m-%dT%H:%M:%S%.6f%z"));

    // Parsing uses the same directives. A time without a date parses into
    // NaiveTime.
    let t2 = NaiveTime::parse_from_str("8 41 PM", "%l %M %p").expect("valid time");
    println!("{}", t2);

    // Numeric-only layouts.
    println!("{}", now.format("%Y-%m-%d"));
    println!("{}", now.format("%H:%M:%S"));

    let t3 = NaiveDateTime::parse_from_str("2014-04-15 18:00:15", "%Y-%m-%d %H:%M:%S")
        .expect("valid datetime");
    println!("{}", t3);

    // A timestamp with an offset keeps the offset in its type.
    let t4: DateTime<FixedOffset> =
        DateTime::parse_from_str("8:41PM +0000 2012-11-01", "%I:%M%p %z %Y-%m-%d")
            .expect("valid datetime");
    println!("{}", t4);

    // Parse errors explain which part of the input failed to match.
    let bad = NaiveDateTime::parse_from_str("8:41PM", "%Y-%m-%d");
    println!("{:?}", bad);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_round_trip() {
        let t = DateTime::parse_from_rfc3339("2012-11-01T22:08:41+00:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2012-11-01T22:08:41+00:00");
    }

    #[test]
    fn test_custom_format() {
        let t = NaiveDateTime::parse_from_str("2014-04-15 18:00:15", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(t.format("%Y/%m/%d").to_string(), "2014/04/15");
    }

    #[test]
    fn test_parse_error() {
        assert!(NaiveDateTime::parse_from_str("8:41PM", "%Y-%m-%d").is_err());
    }
}
