//! Nested-exclusion state machine.
//!
//! Only the outermost excluded region is tracked. Conditionals opened while
//! already excluding just bump `depth`; their bodies are blanked together
//! with the enclosing region once it closes.

use crate::core::error::PreprocessError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExclusionState {
    pub depth: usize,
    pub region_start_offset: usize,
    pub region_start_line: usize,
}

impl ExclusionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_excluding(&self) -> bool {
        self.depth > 0
    }

    /// `%ifdef` / `%ifndef` / `%if`. The condition is only evaluated at
    /// depth 0. Returns whether a new region was opened.
    pub fn open<E>(
        &mut self,
        offset: usize,
        line: usize,
        condition: impl FnOnce() -> Result<bool, E>,
    ) -> Result<bool, E> {
        if self.depth > 0 {
            self.depth += 1;
            return Ok(false);
        }
        if condition()? {
            return Ok(false);
        }
        self.begin(offset, line);
        Ok(true)
    }

    /// `%else`. Returns the number of bytes blanked.
    pub fn else_branch(&mut self, buf: &mut [u8], offset: usize, line: usize) -> usize {
        match self.depth {
            0 => {
                self.begin(offset, line);
                0
            }
            1 => {
                self.depth = 0;
                blank_region(buf, self.region_start_offset, offset)
            }
            _ => 0,
        }
    }

    /// `%endif`. A stray `%endif` at depth 0 is ignored. Returns the number
    /// of bytes blanked.
    pub fn close(&mut self, buf: &mut [u8], offset: usize) -> usize {
        if self.depth == 0 {
            return 0;
        }
        self.depth -= 1;
        if self.depth == 0 {
            blank_region(buf, self.region_start_offset, offset)
        } else {
            0
        }
    }

    pub fn finish(&self) -> Result<(), PreprocessError> {
        if self.depth > 0 {
            return Err(PreprocessError::Unterminated { line: self.region_start_line });
        }
        Ok(())
    }

    fn begin(&mut self, offset: usize, line: usize) {
        self.depth = 1;
        self.region_start_offset = offset;
        self.region_start_line = line;
    }
}

/// Space out every non-newline byte in `buf[from..to]`. Returns how many
/// bytes were not already spaces.
pub fn blank_region(buf: &mut [u8], from: usize, to: usize) -> usize {
    let mut changed = 0;
    for c in &mut buf[from..to] {
        if *c != b'\n' && *c != b' ' {
            *c = b' ';
            changed += 1;
        }
    }
    changed
}
