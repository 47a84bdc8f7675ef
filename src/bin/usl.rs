//! Command-line interface for usl
//! Tokenizes a `.usl` file and prints the token tree, or the first diagnostic.
//!
//! Usage:
//!   usl `<path>` [--format `<format>`] [--config `<file>`] [--no-color]  - Tokenize and print
//!   usl `<path>` --compile                                          - Tokenize, then compile (not implemented)
//!   usl --list-formats                                              - List output formats
//!
//! Logging goes to stderr and is controlled by `USL_LOG` (e.g. `USL_LOG=debug`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use crossterm::style::Stylize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;
use usl::usl::config::{Loader, UslConfig};
use usl::usl::formats::FormatRegistry;
use usl::{tokenize_source, Diagnostic};

fn main() {
    init_tracing();

    let matches = Command::new("usl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizer for usl source files")
        .arg(
            Arg::new("path")
                .help("Path to the .usl file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (treeviz, json, yaml)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print diagnostics without colors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compile")
                .long("compile")
                .help("Compile the tokenized program (not implemented)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("No input file given");
        process::exit(1);
    };
    handle_tokenize_command(path, &config, matches.get_flag("compile"));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("USL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<UslConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("no-color") {
        loader = loader.set_override("output.color", false)?;
    }
    loader.build()
}

fn handle_tokenize_command(path: &str, config: &UslConfig, compile: bool) {
    let extension = &config.input.extension;
    if Path::new(path).extension().and_then(|e| e.to_str()) != Some(extension.as_str()) {
        eprintln!("Not a .{} file", extension);
        process::exit(1);
    }

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}: {}", e, path);
        process::exit(1);
    });

    let tokens = tokenize_source(&source).unwrap_or_else(|diagnostic| {
        print_diagnostic(&diagnostic, config.output.color);
        process::exit(1);
    });

    if compile {
        eprintln!("compilation is not implemented");
        process::exit(2);
    }

    let output = FormatRegistry::builtin(config.output.show_line_numbers)
        .serialize(&tokens, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        });

    print!("{}", output);
}

fn print_diagnostic(diagnostic: &Diagnostic, color: bool) {
    let (kind, message, source_line, highlight) = diagnostic.payload();
    if color {
        eprintln!(
            "\n{}: {}\n\n{}\n{}",
            kind.red().bold(),
            message.red(),
            source_line.white(),
            highlight.magenta().bold()
        );
    } else {
        eprintln!("\n{}: {}\n\n{}\n{}", kind, message, source_line, highlight);
    }
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    for (name, description) in FormatRegistry::builtin(true).formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
