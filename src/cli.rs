use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_OUT: &str = "lex.yy.go";

#[derive(Debug, Parser)]
#[command(
    name = "lexpp",
    about = "lexpp: %ifdef/%if conditional preprocessor for lexer sources",
    version
)]
pub struct LexppCli {
    /// Input file; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Define %ifdef symbols (comma-separated, repeatable)
    ///
    /// Examples:
    ///   lexpp -D DEBUG scanner.l
    ///   lexpp -D "UNICODE, TRACE" -D EXTRA scanner.l
    #[arg(short = 'D', long = "define", value_name = "LIST")]
    pub defines: Vec<String>,

    /// Generator output name; preprocessed text goes to the same name with
    /// `.go` replaced by `.e` (default: lex.yy.go -> lex.yy.e)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Write preprocessed text to stdout instead of a file
    #[arg(short = 't', long = "stdout", action = ArgAction::SetTrue)]
    pub stdout: bool,

    /// Print pass statistics to stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Pretty diagnostics
    #[arg(long = "pretty-errors", action = ArgAction::SetTrue)]
    pub pretty_errors: bool,

    /// Path to config (TOML); default: ~/.lexpp/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}
