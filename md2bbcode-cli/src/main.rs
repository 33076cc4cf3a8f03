// Command-line interface for md2bbcode
//
// Converts a README into BBCode for XenForo forums. The input format is auto-detected from the
// file extension (.md/.markdown, .html/.htm, .json for a serialized token stream) and can be
// overridden with --from.
//
// Usage:
//  md2bbcode <input> [--from <format>] [--domain <url>] [--escape] [-o <file>]
//  md2bbcode <input> --debug         - Write the first pass and the final BBCode to files
//  md2bbcode --list-formats          - List available input formats
//
// Settings are layered: built-in defaults, then ./md2bbcode.toml if present, then --config,
// then flags. Logs go to stderr (RUST_LOG, or --verbose) so stdout stays pure BBCode.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use md2bbcode::{Conversion, Format, FormatRegistry};
use md2bbcode_config::{ConfigError, Loader, Md2BbcodeConfig};
use std::fs;
use tracing_subscriber::EnvFilter;

/// Names accepted by --from, kept in step with `FormatRegistry::with_defaults`
const AVAILABLE_FORMATS: &[&str] = &["html", "markdown", "tokens"];

fn build_cli() -> Command {
    Command::new("md2bbcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert README Markdown and HTML to XenForo BBCode")
        .long_about(
            "md2bbcode converts GitHub-flavored README files into BBCode for XenForo forums.\n\n\
            Markdown is rendered first; raw HTML in it (and any HTML input) is then converted\n\
            by a second pass that understands inline styles, alignment and legacy font tags.\n\n\
            Examples:\n  \
            md2bbcode README.md                              # BBCode on stdout\n  \
            md2bbcode README.md --domain https://github.com/o/r/raw/main/\n  \
            md2bbcode README.md --debug                      # readme.1stpass + readme.finalpass\n  \
            md2bbcode page.html -o post.txt                  # Convert HTML to a file",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file (Markdown, HTML or a JSON token stream)")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Input format (auto-detected from the file extension if omitted)")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("domain")
                .long("domain")
                .value_name("URL")
                .help("Base URL for relative links and images")
                .value_hint(ValueHint::Url),
        )
        .arg(
            Arg::new("escape")
                .long("escape")
                .help("Escape raw HTML instead of converting it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Write the first pass and the final BBCode to files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write the BBCode to a file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2bbcode.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available input formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(&matches);
    let input = matches
        .get_one::<String>("input")
        .expect("input is required");

    // Auto-detect --from if not provided
    let registry = FormatRegistry::default();
    let from = match matches.get_one::<String>("from") {
        Some(from) => from.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let options = config.convert.to_options();
    tracing::info!(%input, format = %from, domain = ?options.domain(), escape = options.escape, "converting");
    let conversion = registry
        .convert(&source, &from, &options)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    if matches.get_flag("debug") {
        write_debug_files(&conversion, &config);
        return;
    }

    match matches.get_one::<String>("output") {
        Some(path) => write_file(path, &conversion.bbcode),
        None => print!("{}", conversion.bbcode),
    }
}

fn init_tracing(verbose: bool) {
    // --verbose shows the library's debug events, otherwise RUST_LOG or warnings only
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {:<10} {}", name, format.description());
            println!("  {:<10} extensions: {}", "", format.file_extensions().join(", "));
        }
    }
}

fn write_debug_files(conversion: &Conversion, config: &Md2BbcodeConfig) {
    let debug_cfg = &config.debug;
    write_file(&debug_cfg.first_pass_file, &conversion.first_pass);
    write_file(&debug_cfg.final_pass_file, &conversion.bbcode);
    tracing::info!(
        first_pass = %debug_cfg.first_pass_file,
        final_pass = %debug_cfg.final_pass_file,
        "wrote debug output"
    );
}

fn write_file(path: &str, contents: &str) {
    fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing file '{path}': {e}");
        std::process::exit(1);
    });
}

fn load_cli_config(matches: &ArgMatches) -> Md2BbcodeConfig {
    let loader = Loader::new().with_optional_file("md2bbcode.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    apply_cli_overrides(loader, matches)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Flags win over every configuration file
fn apply_cli_overrides(mut loader: Loader, matches: &ArgMatches) -> Result<Loader, ConfigError> {
    if let Some(domain) = matches.get_one::<String>("domain") {
        loader = loader.set_override("convert.domain", domain.as_str())?;
    }
    if matches.get_flag("escape") {
        loader = loader.set_override("convert.escape", true)?;
    }
    Ok(loader)
}
