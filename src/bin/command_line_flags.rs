//! Declaring command-line flags with clap.
//!
//! Run with: cargo run --bin command_line_flags -- --word=opt --numb 7 --fork

use clap::Parser;

// The derive turns this struct into a parser: one flag per field, with the
// doc comment as help text and the default used when the flag is absent.
// `--help` and error messages come for free.
#[derive(Parser, Debug)]
#[command(about = "flag declaration example")]
struct Args {
    /// a string flag
    #[arg(long, default_value = "foo")]
    word: String,

    /// an int flag
    #[arg(long, default_value_t = 42)]
    numb: i64,

    /// a bool flag (false unless present)
    #[arg(long)]
    fork: bool,

    /// a string flag bound like a var
    #[arg(long, default_value = "bar")]
    svar: String,

    /// anything left over after the flags
    #[arg(trailing_var_arg = true)]
    tail: Vec<String>,
}

fn main() {
    let args = Args::parse();

    println!("word: {}", args.word);
    println!("numb: {}", args.numb);
    println!("fork: {}", args.fork);
    println!("svar: {}", args.svar);
    println!("tail: {:?}", args.tail);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["prog"]);
        assert_eq!(args.word, "foo");
        assert_eq!(args.numb, 42);
        assert!(!args.fork);
    }

    #[test]
    fn test_explicit_values() {
        let args = Args::parse_from(["prog", "--word=opt", "--numb", "7", "--fork"]);
        assert_eq!(args.word, "opt");
        assert_eq!(args.numb, 7);
        assert!(args.fork);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["prog", "--wat"]).is_err());
    }
}
