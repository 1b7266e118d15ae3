//! The everyday &str methods.
//!
//! Run with: cargo run --bin string_functions

fn main() {
    // A sampler of the methods used constantly in string-handling code.
    let p = |label: &str, value: String| println!("{:<10} {}", label, value);

    p("Contains:", format!("{}", "test".contains("es")));
    p("Count:", format!("{}", "test".matches('t').count()));
    p("HasPrefix:", format!("{}", "test".starts_with("te")));
    p("HasSuffix:", format!("{}", "test".ends_with("st")));
    p("Index:", format!("{:?}", "test".find('e')));
    p("Join:", ["a", "b"].join("-"));
    p("Repeat:", "a".repeat(5));
    p("Replace:", "foo".replace('o', "0"));
    p("Replacen:", "foo".replacen('o', "0", 1));
    p("Split:", format!("{:?}", "a-b-c-d-e".split('-').collect::<Vec<_>>()));
    p("ToLower:", "TEST".to_lowercase());
    p("ToUpper:", "test".to_uppercase());

    // A few more that come up just as often.
    p("Trim:", format!("{:?}", "  spaced  ".trim()));
    p("Parse:", format!("{:?}", "42".parse::<i32>()));
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_split_and_join_invert() {
        let parts: Vec<&str> = "a-b-c".split('-').collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
        assert_eq!(parts.join("-"), "a-b-c");
    }

    #[test]
    fn test_find_returns_byte_offset() {
        assert_eq!("test".find('e'), Some(1));
        assert_eq!("test".find('z'), None);
    }
}
