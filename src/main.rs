use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::debug;
use regex::Regex;
use std::io::{self, BufRead};

use regex_dialect::{
    Dialect, contains_regex, contains_unescaped_regex, escape_regex, safe_escape, safe_unescape,
    to_glob, tokenize_unescaped, tokenize_with, unescape_regex,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a POSIX-class pattern into another dialect
    Translate {
        /// Target dialect
        #[arg(short, long, value_enum, default_value_t = DialectArg::Java)]
        dialect: DialectArg,

        /// Pattern (reads lines from stdin if omitted)
        text: Option<String>,
    },

    /// Derive a glob from a pattern
    Glob {
        /// Pattern (reads lines from stdin if omitted)
        text: Option<String>,
    },

    /// Split text on a delimiter, one token per line
    Split {
        /// Delimiter, may be several characters long
        #[arg(short, long)]
        delimiter: String,

        /// Keep empty tokens from leading and trailing delimiters
        #[arg(short, long)]
        keep_ends: bool,

        /// Do not split on escaped delimiters
        #[arg(short, long)]
        ignore_escaped: bool,

        /// Text (reads lines from stdin if omitted)
        text: Option<String>,
    },

    /// Escape delimiters
    Escape {
        #[command(flatten)]
        delims: DelimArgs,

        /// Text (reads lines from stdin if omitted)
        text: Option<String>,
    },

    /// Undo escape
    Unescape {
        #[command(flatten)]
        delims: DelimArgs,

        /// Text (reads lines from stdin if omitted)
        text: Option<String>,
    },

    /// Report whether text contains regex metacharacters
    Inspect {
        /// Text (reads lines from stdin if omitted)
        text: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
struct DelimArgs {
    /// Delimiter to escape; may be repeated
    #[arg(short, long = "delimiter", value_name = "DELIM")]
    delimiters: Vec<String>,

    /// Use every regex metacharacter as a delimiter
    #[arg(short, long, conflicts_with = "delimiters")]
    regex: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DialectArg {
    Java,
    Dotnet,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Java => Dialect::Java,
            DialectArg::Dotnet => Dialect::DotNet,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Escape,
    Unescape,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("{:?}", args.command);

    match args.command {
        Command::Translate { dialect, text } => {
            let dialect = Dialect::from(dialect);
            for_each_input(text, |line| {
                println!("{}", dialect.translate(line));
                Ok(())
            })
        }
        Command::Glob { text } => for_each_input(text, |line| {
            let pattern = Regex::new(line).with_context(|| format!("Invalid pattern {line:?}"))?;
            let glob = to_glob(&pattern).with_context(|| format!("No glob for {line:?}"))?;
            println!("{glob}");
            Ok(())
        }),
        Command::Split {
            delimiter,
            keep_ends,
            ignore_escaped,
            text,
        } => {
            if delimiter.is_empty() {
                bail!("Delimiter must not be empty.");
            }
            for_each_input(text, |line| {
                let tokens = if ignore_escaped {
                    tokenize_unescaped(line, &delimiter, !keep_ends)
                } else {
                    tokenize_with(line, &delimiter, !keep_ends)
                };
                for token in tokens {
                    println!("{token}");
                }
                Ok(())
            })
        }
        Command::Escape { delims, text } => run_escape(&delims, text, Direction::Escape),
        Command::Unescape { delims, text } => run_escape(&delims, text, Direction::Unescape),
        Command::Inspect { text } => for_each_input(text, |line| {
            println!(
                "regex={} unescaped={}",
                contains_regex(line),
                contains_unescaped_regex(line)
            );
            Ok(())
        }),
    }
}

fn run_escape(delims: &DelimArgs, text: Option<String>, direction: Direction) -> Result<()> {
    if !delims.regex && delims.delimiters.is_empty() {
        bail!("Specify at least one --delimiter, or --regex.");
    }
    let list = delims.delimiters.iter().map(String::as_str).collect_vec();
    if !delims.regex {
        debug!("delimiters: {}", list.iter().format(" "));
    }
    for_each_input(text, |line| {
        let out = match (direction, delims.regex) {
            (Direction::Escape, true) => escape_regex(line),
            (Direction::Unescape, true) => unescape_regex(line),
            (Direction::Escape, false) => safe_escape(line, &list),
            (Direction::Unescape, false) => safe_unescape(line, &list),
        };
        println!("{out}");
        Ok(())
    })
}

/// Run `f` on `text`, or on every line of stdin when `text` is absent.
fn for_each_input(text: Option<String>, mut f: impl FnMut(&str) -> Result<()>) -> Result<()> {
    if let Some(text) = text {
        return f(&text);
    }
    let mut failures = 0usize;
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if let Err(err) = f(&line) {
            eprintln!("{err:#}");
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} line(s) failed.");
    }
    Ok(())
}
