//! Defined-symbol set consulted by `%ifdef` / `%ifndef` / `%if`.
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: BTreeSet<String>,
}

impl SymbolTable {
    /// Build from raw names. Entries are trimmed; empty ones are dropped.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = raw
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { names }
    }

    /// Build from `-D` style lists, e.g. `"FOO, BAR,,BAZ"`.
    pub fn from_define_list<I, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw = Vec::new();
        for list in lists {
            raw.extend(list.as_ref().split(',').map(str::to_string));
        }
        Self::new(raw)
    }

    pub fn contains(&self, name: &[u8]) -> bool {
        match std::str::from_utf8(name) {
            Ok(s) => self.names.contains(s),
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
