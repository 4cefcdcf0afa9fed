//! Boolean condition evaluator for `%if`, `%ifdef` and `%ifndef`.
//!
//! Grammar:
//!
//! ```text
//! expr  := ['!']* atom ( ('&&' | '||') ['!']* atom )*
//! atom  := identifier | '(' expr ')'
//! ```
//!
//! `&&` and `||` have no relative precedence. Operators are applied in the
//! order they appear and evaluation stops at the first operator whose left
//! side already decides the outcome (`false &&`, `true ||`); the rest of the
//! text of that group is never looked at, even if it is malformed.
//!
//! Parenthesised groups are tracked on an explicit stack, so nesting depth
//! is bounded only by the line length.

use crate::core::symbols::SymbolTable;

/// Where evaluation failed, as a byte offset into the text handed to
/// [`Evaluator::evaluate`]. `offset == text.len()` means the text ended
/// while a term was still expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprFault {
    pub offset: usize,
}

impl ExprFault {
    /// The condition text up to and including the offending character.
    pub fn snippet(&self, text: &[u8]) -> String {
        let mut end = (self.offset + 1).min(text.len());
        // finish a multi-byte UTF-8 character
        while end < text.len() && text[end] & 0xC0 == 0x80 {
            end += 1;
        }
        String::from_utf8_lossy(&text[..end]).into_owned()
    }
}

/// An open `(` group: where it closes and the negation pending before it.
struct Group {
    close: usize,
    negate: bool,
}

pub struct Evaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn evaluate(&self, text: &[u8]) -> Result<bool, ExprFault> {
        let closers = match_parens(text);
        let mut groups: Vec<Group> = Vec::new();
        let mut result = false;
        let mut negate = false;
        let mut expect_term = true;
        let mut i = 0;

        loop {
            let group_end = groups.last().map_or(text.len(), |g| g.close);
            if i == group_end {
                if expect_term {
                    return Err(ExprFault { offset: i });
                }
                let Some(group) = groups.pop() else {
                    return Ok(result);
                };
                result = result != group.negate;
                negate = false;
                i = group.close + 1;
                continue;
            }

            let c = text[i];
            if is_space(c) {
                i += 1;
                continue;
            }
            match c {
                b'!' => {
                    if !expect_term {
                        return Err(ExprFault { offset: i });
                    }
                    negate = !negate;
                    i += 1;
                }
                b'&' | b'|' if text.get(i + 1) == Some(&c) => {
                    if expect_term {
                        return Err(ExprFault { offset: i });
                    }
                    if (c == b'&') != result {
                        // left side decides the enclosing group
                        i = group_end;
                        continue;
                    }
                    expect_term = true;
                    i += 2;
                }
                b'(' => {
                    if !expect_term {
                        return Err(ExprFault { offset: i });
                    }
                    let close = closers[i].ok_or(ExprFault { offset: text.len() })?;
                    groups.push(Group { close, negate });
                    result = false;
                    negate = false;
                    i += 1;
                }
                c if is_ident_start(c) => {
                    if !expect_term {
                        return Err(ExprFault { offset: i });
                    }
                    let end = identifier_end(text, i);
                    result = self.symbols.contains(&text[i..end]) != negate;
                    negate = false;
                    expect_term = false;
                    i = end;
                }
                _ => return Err(ExprFault { offset: i }),
            }
        }
    }

    /// `%ifdef` / `%ifndef` condition: one identifier. Anything after the
    /// identifier and a whitespace byte is ignored.
    pub fn symbol(&self, text: &[u8]) -> Result<bool, ExprFault> {
        match text.first() {
            Some(&c) if is_ident_start(c) => {}
            _ => return Err(ExprFault { offset: 0 }),
        }
        let end = identifier_end(text, 0);
        match text.get(end) {
            Some(&c) if !is_space(c) => Err(ExprFault { offset: end }),
            _ => Ok(self.symbols.contains(&text[..end])),
        }
    }
}

/// For every `(`, the index of its matching `)`, if any.
fn match_parens(text: &[u8]) -> Vec<Option<usize>> {
    let mut closers = vec![None; text.len()];
    let mut open = Vec::new();
    for (k, &c) in text.iter().enumerate() {
        match c {
            b'(' => open.push(k),
            b')' => {
                if let Some(o) = open.pop() {
                    closers[o] = Some(k);
                }
            }
            _ => {}
        }
    }
    closers
}

fn is_ident_start(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphabetic()
}

fn identifier_end(text: &[u8], start: usize) -> usize {
    let mut k = start + 1;
    while k < text.len() && (text[k].is_ascii_alphanumeric() || text[k] == b'_') {
        k += 1;
    }
    k
}

/// Whitespace as the scanner and evaluator see it.
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
