//! Subcommands with their own flags and arguments.
//!
//! Run with: cargo run --bin command_line_subcommands -- foo --enable arg1

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "subcommand example")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

// Each variant is a subcommand with its own flag set; the type system
// guarantees exactly one is chosen.
#[derive(Subcommand, Debug)]
enum Command {
    /// the foo subcommand
    Foo {
        /// enable the thing
        #[arg(long)]
        enable: bool,

        /// positional arguments for foo
        args: Vec<String>,
    },
    /// the bar subcommand
    Bar {
        /// a level for bar
        #[arg(long, default_value_t = 0)]
        level: u32,

        /// positional arguments for bar
        args: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Foo { enable, args } => {
            println!("subcommand 'foo'");
            println!("  enable: {}", enable);
            println!("  args: {:?}", args);
        }
        Command::Bar { level, args } => {
            println!("subcommand 'bar'");
            println!("  level: {}", level);
            println!("  args: {:?}", args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foo_with_flag_and_args() {
        let cli = Cli::parse_from(["prog", "foo", "--enable", "a1"]);
        match cli.command {
            Command::Foo { enable, args } => {
                assert!(enable);
                assert_eq!(args, vec!["a1"]);
            }
            other => panic!("wrong subcommand: {:?}", other),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["prog"]).is_err());
    }

    #[test]
    fn test_bar_default_level() {
        let cli = Cli::parse_from(["prog", "bar", "x"]);
        match cli.command {
            Command::Bar { level, args } => {
                assert_eq!(level, 0);
                assert_eq!(args, vec!["x"]);
            }
            other => panic!("wrong subcommand: {:?}", other),
        }
    }
}
