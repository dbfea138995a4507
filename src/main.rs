use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use stringtree::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parse_file, parse_file_with, EscapeMode, ParseOptions, Tree,
};
use tracing_subscriber::EnvFilter;

/// Parse a stringtree document and print its outline.
#[derive(Parser, Debug)]
#[command(name = "stringtree", version)]
struct Args {
    /// Document to parse
    file: PathBuf,

    /// Fail on anomalies instead of tolerating them
    #[arg(long)]
    strict: bool,

    /// Decode `\"` and `\n` the standard way
    #[arg(long)]
    standard_escapes: bool,

    /// Maximum group nesting
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,
}

impl Args {
    fn options(&self) -> ParseOptions {
        let escapes = if self.standard_escapes {
            EscapeMode::Standard
        } else {
            EscapeMode::Compatible
        };

        ParseOptions::default()
            .strict(self.strict)
            .escapes(escapes)
            .max_depth(self.max_depth)
            .source_name(self.file.display().to_string())
    }

    fn is_lenient_default(&self) -> bool {
        !self.strict && !self.standard_escapes && self.max_depth.is_none()
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.tokens {
        return print_tokens(&args);
    }

    if args.is_lenient_default() {
        return match parse_file(&args.file) {
            Some(tree) => {
                print_tree(&tree, 0);
                ExitCode::SUCCESS
            }
            None => {
                println!("Error: could not open {}", args.file.display());
                ExitCode::FAILURE
            }
        };
    }

    match parse_file_with(&args.file, &args.options()) {
        Ok(tree) => {
            print_tree(&tree, 0);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn print_tokens(args: &Args) -> ExitCode {
    let source = match std::fs::read(&args.file) {
        Ok(bytes) => bytes,
        Err(_) => {
            println!("Error: could not open {}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    match tokenize(&source, &args.options()) {
        Ok(tokens) => {
            for token in tokens {
                println!("{:>6}  {}", token.span.start.0, token);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn print_tree(tree: &Tree, indent: usize) {
    for child in tree {
        if child.label().is_empty() {
            println!("{}{{}}", "  ".repeat(indent));
        } else {
            println!("{}{:?}", "  ".repeat(indent), child.label());
        }
        print_tree(child, indent + 1);
    }
}

fn display_error(error: &Error) {
    /*
        Error: name (tip)
        -> settings.st @ byte 12
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {} ({})", error.get_error_name(), error.get_kind());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    println!("-> {} @ byte {}", position.1, position.0);
}
