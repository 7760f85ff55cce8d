//! Command-line interface for katexify
//! This binary converts LaTeX documents into the subset KaTeX can render.
//!
//! Usage:
//!   katexify convert [`<path>`]           - Convert a file (or stdin) and print the result
//!   katexify rules [--format `<format>`]  - List the rewrite rule table

use clap::{Arg, Command};
use std::io::Read;
use std::process;

use katexify::katex::{convert, RULES};

fn main() {
    let matches = Command::new("katexify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrites LaTeX documents into the subset KaTeX can render")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a LaTeX document and print the KaTeX-compatible result")
                .arg(
                    Arg::new("path")
                        .help("Path to the LaTeX file; reads stdin when omitted")
                        .required(false)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("rules")
                .about("List the rewrite rule table")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path");
            handle_convert_command(path.map(|s| s.as_str()));
        }
        Some(("rules", rules_matches)) => {
            let format = rules_matches.get_one::<String>("format").unwrap();
            handle_rules_command(format);
        }
        _ => unreachable!(),
    }
}

/// Handle the convert command
fn handle_convert_command(path: Option<&str>) {
    let input = match read_input(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    print!("{}", convert(&input));
}

/// Read the document from a file, or from stdin when no path was given
fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Handle the rules command
fn handle_rules_command(format: &str) {
    match format {
        "json" => match serde_json::to_string_pretty(RULES) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        "text" => {
            for rule in RULES {
                let replacement = if rule.replacement.is_empty() {
                    "<delete>"
                } else {
                    rule.replacement
                };
                match rule.note {
                    Some(note) => println!("{} => {}  ({})", rule.pattern, replacement, note),
                    None => println!("{} => {}", rule.pattern, replacement),
                }
            }
        }
        other => {
            eprintln!("Error: unknown format '{}', expected 'text' or 'json'", other);
            process::exit(1);
        }
    }
}
