//! lexpp main: conditional preprocessing for lexer sources.
use clap::Parser; // trait import enables LexppCli::parse()
use std::path::PathBuf;

use lexpp::cli::{LexppCli, DEFAULT_OUT};
use lexpp::commands::preprocess::{self, PreprocessOpts};
use lexpp::config::LexppConfig;

fn main() -> anyhow::Result<()> {
    let args = LexppCli::parse();
    let cfg = LexppConfig::load(&args.config)?;

    // config defines come first, -D flags add to them
    let mut defines = cfg.defines;
    defines.extend(args.defines);

    let out = args
        .out
        .or(cfg.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));

    let code = preprocess::main(PreprocessOpts {
        input: args.input,
        defines,
        out,
        to_stdout: args.stdout,
        verbose: args.verbose,
        pretty: args.pretty_errors || cfg.pretty_errors,
    })?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
