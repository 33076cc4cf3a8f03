use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of FormatRegistry::with_defaults()
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_FORMATS: &[&str] = &["html", "markdown", "tokens"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2bbcode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert README Markdown and HTML to XenForo BBCode")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2bbcode", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2bbcode", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2bbcode", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
