//! Single-pass conditional preprocessing.
//!
//! Directive lines and excluded regions are overwritten with spaces in
//! place. Newlines are never touched, so the output has the same length and
//! line numbering as the input.

use crate::core::directive::{at_line_start, blank_line, recognize, Directive};
use crate::core::error::PreprocessError;
use crate::core::exclusion::ExclusionState;
use crate::core::expr::Evaluator;
use crate::core::symbols::SymbolTable;
use crate::debug_log;

/// Counters gathered during a successful pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub lines: usize,
    pub directives: usize,
    pub regions: usize,
    pub blanked_bytes: usize,
}

pub struct Preprocessor<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Preprocessor<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Preprocess a copy of `input`; nothing is returned unless the whole
    /// pass succeeds.
    pub fn run(&self, input: &[u8]) -> Result<Vec<u8>, PreprocessError> {
        let mut buf = input.to_vec();
        self.run_in_place(&mut buf)?;
        Ok(buf)
    }

    /// Preprocess `buf` in place. On error its contents are unspecified.
    pub fn run_in_place(&self, buf: &mut [u8]) -> Result<PassStats, PreprocessError> {
        let evaluator = Evaluator::new(self.symbols);
        let mut state = ExclusionState::new();
        let mut stats = PassStats::default();
        let mut line = 1;

        for i in 0..buf.len() {
            if buf[i] == b'\n' {
                line += 1;
                continue;
            }
            if buf[i] != b'%' || !at_line_start(buf, i) {
                continue;
            }
            let Some(directive) = recognize(buf, i) else {
                continue;
            };
            stats.directives += 1;
            debug_log!("line {}: {} (depth {})", line, directive.keyword(), state.depth);

            match directive {
                Directive::IfDef(cond) | Directive::IfNDef(cond) | Directive::If(cond) => {
                    let opened = state.open(i, line, || {
                        let value = match directive {
                            Directive::IfDef(_) => evaluator.symbol(cond),
                            Directive::IfNDef(_) => evaluator.symbol(cond).map(|v| !v),
                            _ => evaluator.evaluate(cond),
                        };
                        value.map_err(|fault| PreprocessError::Syntax {
                            line,
                            snippet: fault.snippet(cond),
                        })
                    })?;
                    if opened {
                        stats.regions += 1;
                        debug_log!("line {}: excluding", line);
                    }
                }
                Directive::Else => {
                    let was_excluding = state.is_excluding();
                    stats.blanked_bytes += state.else_branch(buf, i, line);
                    if !was_excluding {
                        stats.regions += 1;
                    }
                }
                Directive::EndIf => {
                    stats.blanked_bytes += state.close(buf, i);
                }
            }

            let before = count_non_space(buf, i);
            blank_line(buf, i);
            stats.blanked_bytes += before;
        }

        state.finish()?;
        stats.lines = match buf.last() {
            None => 0,
            Some(b'\n') => line - 1,
            Some(_) => line,
        };
        Ok(stats)
    }
}

fn count_non_space(buf: &[u8], at: usize) -> usize {
    buf[at..].iter().take_while(|&&c| c != b'\n').filter(|&&c| c != b' ').count()
}

/// Preprocess `buf` in place against `symbols`.
pub fn preprocess(buf: &mut [u8], symbols: &SymbolTable) -> Result<PassStats, PreprocessError> {
    Preprocessor::new(symbols).run_in_place(buf)
}
