//! Directive recognition at line starts.
//!
//! Only the five conditional keywords are directives. Any other `%`-prefixed
//! line is ordinary content and is left alone.

use crate::core::expr::is_space;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    IfDef(&'a [u8]),
    IfNDef(&'a [u8]),
    If(&'a [u8]),
    Else,
    EndIf,
}

impl Directive<'_> {
    pub fn keyword(&self) -> &'static str {
        match self {
            Directive::IfDef(_) => "%ifdef",
            Directive::IfNDef(_) => "%ifndef",
            Directive::If(_) => "%if",
            Directive::Else => "%else",
            Directive::EndIf => "%endif",
        }
    }
}

/// True when `at` is offset 0 or directly follows a newline.
pub fn at_line_start(buf: &[u8], at: usize) -> bool {
    at == 0 || buf.get(at - 1) == Some(&b'\n')
}

/// Offset of the newline ending the line containing `at`, or `buf.len()`.
pub fn line_end(buf: &[u8], at: usize) -> usize {
    buf[at..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(buf.len(), |n| at + n)
}

/// Replace everything from `at` up to the end of its line with spaces.
pub fn blank_line(buf: &mut [u8], at: usize) {
    let end = line_end(buf, at);
    buf[at..end].fill(b' ');
}

/// Recognise a directive whose `%` sits at `at`.
pub fn recognize(buf: &[u8], at: usize) -> Option<Directive<'_>> {
    if buf.get(at) != Some(&b'%') {
        return None;
    }
    let end = line_end(buf, at);

    if keyword_then_space(buf, at, b"%ifdef") {
        return Some(Directive::IfDef(condition(buf, at + 6, end)));
    }
    if keyword_then_space(buf, at, b"%ifndef") {
        return Some(Directive::IfNDef(condition(buf, at + 7, end)));
    }
    if keyword_then_space(buf, at, b"%if") {
        return Some(Directive::If(condition(buf, at + 3, end)));
    }
    if keyword_then_end(buf, at, b"%else") {
        return Some(Directive::Else);
    }
    if keyword_then_end(buf, at, b"%endif") {
        return Some(Directive::EndIf);
    }
    None
}

/// `%ifdef`, `%ifndef` and `%if` need at least one whitespace byte after them.
fn keyword_then_space(buf: &[u8], at: usize, kw: &[u8]) -> bool {
    let after = at + kw.len();
    buf.get(at..after) == Some(kw) && buf.get(after).is_some_and(|&c| is_space(c))
}

/// `%else` and `%endif` may also end the buffer.
fn keyword_then_end(buf: &[u8], at: usize, kw: &[u8]) -> bool {
    let after = at + kw.len();
    buf.get(at..after) == Some(kw) && buf.get(after).map_or(true, |&c| is_space(c))
}

fn condition(buf: &[u8], from: usize, end: usize) -> &[u8] {
    let mut from = from.min(end);
    let mut end = end;
    while from < end && is_space(buf[from]) {
        from += 1;
    }
    while end > from && is_space(buf[end - 1]) {
        end -= 1;
    }
    &buf[from..end]
}
