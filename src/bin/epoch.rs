//! Seconds, milliseconds, and nanoseconds since the Unix epoch.
//!
//! Run with: cargo run --bin epoch

use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // SystemTime measures wall-clock time; the span since UNIX_EPOCH is
    // the epoch timestamp.
    let now = SystemTime::now();
    println!("{:?}", now);

    let since_epoch = now.duration_since(UNIX_EPOCH).expect("clock before 1970");
    println!("{}", since_epoch.as_secs());
    println!("{}", since_epoch.as_millis());
    println!("{}", since_epoch.as_nanos());

    // chrono exposes the same quantities on its DateTime type.
    let now: DateTime<Utc> = Utc::now();
    println!("{}", now.timestamp());
    println!("{}", now.timestamp_millis());
    println!("{}", now.timestamp_nanos_opt().expect("fits in i64 until 2262"));

    // And converts back from a timestamp to a date.
    let secs = now.timestamp();
    let back = DateTime::from_timestamp(secs, 0).expect("valid timestamp");
    println!("{}", back);

    let from_nanos =
        DateTime::from_timestamp(secs, now.timestamp_subsec_nanos()).expect("valid timestamp");
    println!("{}", from_nanos);
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    #[test]
    fn test_timestamp_round_trip() {
        let dt = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }
}
