//! Working with time: wall-clock dates, durations, and arithmetic.
//!
//! Run with: cargo run --bin time

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

fn main() {
    // The current wall-clock moment, in UTC.
    let now = Utc::now();
    println!("{}", now);

    // Build a DateTime from its components.
    let then: DateTime<Utc> = Utc
        .with_ymd_and_hms(2009, 11, 17, 20, 34, 58)
        .single()
        .expect("valid calendar date")
        + Duration::nanoseconds(651_387_237);
    println!("{}", then);

    // Pull the components back out.
    println!("{}", then.year());
    println!("{}", then.month());
    println!("{}", then.day());
    println!("{}", then.hour());
    println!("{}", then.minute());
    println!("{}", then.second());
    println!("{}", then.nanosecond());
    println!("{:?}", then.weekday());

    // Comparisons.
    println!("{}", then < now);
    println!("{}", now > then);
    println!("{}", then == now);

    // The difference of two instants is a Duration.
    let diff = now - then;
    println!("{}", diff);
    println!("{}", diff.num_hours());
    println!("{}", diff.num_minutes());
    println!("{}", diff.num_seconds());

    // Advance or rewind by adding or subtracting durations.
    println!("{}", then + diff);
    println!("{}", then - diff);

    // For measuring elapsed time inside a program, the monotonic clock is
    // the right tool; it never jumps with wall-clock adjustments.
    let start = std::time::Instant::now();
    std::thread::sleep(std::time::Duration::from_millis(20));
    println!("elapsed: {:?}", start.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_access() {
        let t = Utc.with_ymd_and_hms(2009, 11, 17, 20, 34, 58).single().unwrap();
        assert_eq!(t.year(), 2009);
        assert_eq!(t.month(), 11);
        assert_eq!(t.weekday(), chrono::Weekday::Tue);
    }

    #[test]
    fn test_duration_arithmetic_round_trips() {
        let a = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single().unwrap();
        let b = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).single().unwrap();
        let diff = b - a;
        assert_eq!(a + diff, b);
        assert_eq!(b - diff, a);
    }
}
