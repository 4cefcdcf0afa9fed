//! src/commands/preprocess.rs
//! Read a lexer source, run the conditional pass, write the `.e` result.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::diagnostics::print_error;
use crate::core::{PassStats, Preprocessor, SymbolTable};
use crate::debug_log;
use crate::io::atomic::atomic_write;

#[derive(Debug, Clone)]
pub struct PreprocessOpts {
    pub input: Option<PathBuf>,
    /// Raw `-D` style lists, config entries first.
    pub defines: Vec<String>,
    pub out: PathBuf,
    pub to_stdout: bool,
    pub verbose: bool,
    pub pretty: bool,
}

/// Returns the process exit code: 0 on success, 1 on a preprocessing error.
pub fn main(opts: PreprocessOpts) -> Result<i32> {
    let (name, mut buf) = read_input(opts.input.as_deref())?;
    let symbols = SymbolTable::from_define_list(&opts.defines);
    debug_log!("{}: {} bytes, {} symbols", name, buf.len(), symbols.len());
    let source = opts.pretty.then(|| buf.clone());

    let stats = match Preprocessor::new(&symbols).run_in_place(&mut buf) {
        Ok(stats) => stats,
        Err(e) => {
            if let Some(source) = &source {
                print_error(&name, &String::from_utf8_lossy(source), &e);
            } else {
                eprintln!("{} {}", "error:".bright_red(), e);
            }
            return Ok(1);
        }
    };

    if opts.verbose {
        report(&symbols, &stats);
    }

    if opts.to_stdout {
        let mut out = io::stdout().lock();
        out.write_all(&buf).context("writing stdout")?;
        out.flush().context("writing stdout")?;
    } else {
        let dest = preprocessed_path(&opts.out);
        atomic_write(&dest, &buf).with_context(|| format!("writing {}", dest.display()))?;
        debug_log!("wrote {}", dest.display());
    }
    Ok(0)
}

/// `lex.yy.go` -> `lex.yy.e`; names without `.go` just gain `.e`.
pub fn preprocessed_path(out: &Path) -> PathBuf {
    let s = out.to_string_lossy();
    let stem = s.strip_suffix(".go").unwrap_or(&s);
    PathBuf::from(format!("{stem}.e"))
}

fn read_input(input: Option<&Path>) -> Result<(String, Vec<u8>)> {
    match input {
        Some(p) => {
            let bytes = fs::read(p).with_context(|| format!("reading {}", p.display()))?;
            Ok((p.display().to_string(), bytes))
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes).context("reading stdin")?;
            Ok(("<stdin>".to_string(), bytes))
        }
    }
}

fn report(symbols: &SymbolTable, stats: &PassStats) {
    let names: Vec<&str> = symbols.iter().collect();
    eprintln!(
        "{} defined: {}",
        "lexpp:".bright_blue(),
        if names.is_empty() { "(none)".to_string() } else { names.join(", ") }
    );
    eprintln!(
        "{} {} lines, {} directives, {} excluded regions, {} bytes blanked",
        "lexpp:".bright_blue(),
        stats.lines,
        stats.directives,
        stats.regions,
        stats.blanked_bytes
    );
}
