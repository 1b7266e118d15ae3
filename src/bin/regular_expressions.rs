//! Regular expressions: matching, capturing, and replacing.
//!
//! Run with: cargo run --bin regular_expressions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Compiling a pattern is not free; a shared static compiles it once
    // for the whole program. The pattern matches words like "peach".
    static ref PEACH: Regex = Regex::new(r"p([a-z]+)ch").expect("valid pattern");
}

fn main() {
    // A quick yes/no match.
    println!("{}", PEACH.is_match("peach"));

    // `find` locates the first match and reports its text and span.
    if let Some(m) = PEACH.find("peach punch") {
        println!("match: {:?} at {}..{}", m.as_str(), m.start(), m.end());
    }

    // `captures` exposes the whole match and each parenthesized group.
    if let Some(caps) = PEACH.captures("peach punch") {
        println!("whole: {:?}", &caps[0]);
        println!("group: {:?}", &caps[1]);
    }

    // `find_iter` walks every match in the input.
    let all: Vec<&str> = PEACH.find_iter("peach punch pinch").map(|m| m.as_str()).collect();
    println!("all: {:?}", all);

    // A cap on the iterator limits how many matches we take.
    let first_two: Vec<&str> =
        PEACH.find_iter("peach punch pinch").take(2).map(|m| m.as_str()).collect();
    println!("first two: {:?}", first_two);

    // Patterns built at runtime go through Regex::new, which returns a
    // Result because the pattern text may be invalid.
    let runtime = Regex::new(r"p([a-z]+)ch").expect("valid pattern");
    println!("runtime compile ok: {}", runtime.is_match("punch"));
    println!("bad pattern: {:?}", Regex::new("p(").is_err());

    // `replace_all` substitutes every match; $1 refers to the first group.
    println!("{}", PEACH.replace_all("a peach", "<fruit>"));
    println!("{}", PEACH.replace_all("a peach", "p${1}ch => $1"));

    // A closure replacement computes each substitution from its captures.
    let upper = PEACH.replace_all("a peach and a punch", |caps: &regex::Captures| {
        caps[0].to_uppercase()
    });
    println!("{}", upper);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_match() {
        assert!(PEACH.is_match("peach"));
        assert!(!PEACH.is_match("apple"));
    }

    #[test]
    fn test_capture_group() {
        let caps = PEACH.captures("punch").expect("match");
        assert_eq!(&caps[1], "un");
    }

    #[test]
    fn test_replace_all() {
        assert_eq!(PEACH.replace_all("peach punch", "x"), "x x");
    }
}
