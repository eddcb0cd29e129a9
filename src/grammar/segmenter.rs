//! Clause boundary scanning

use crate::annotate::labels::DepLabel;
use crate::annotate::stream::TokenStream;

/// Opening bracket of an aside the scan must not split
pub(crate) fn is_open_bracket(text: &str) -> bool {
    matches!(text, "{" | "(" | "[")
}

pub(crate) fn is_close_bracket(text: &str) -> bool {
    matches!(text, "}" | ")" | "]")
}

/// Sentence-terminating token texts
pub(crate) fn is_terminator(text: &str) -> bool {
    matches!(text, "." | "!" | "?" | ";" | "--" | "...")
}

/// Forward scan over a token stream producing candidate clause bounds
///
/// A boundary fires at a sentence terminator or a coordinating
/// conjunction, never inside a bracketed aside. The caller reports back
/// whether the candidate mapped: a rejected candidate inches the end
/// forward one token (skipping spurious terminators, e.g. inside
/// abbreviations), an accepted one jumps the scan past the consumed verb
/// phrase. Boundaries are monotonically non-decreasing.
#[derive(Debug)]
pub struct ClauseScan {
    start: usize,
    end: usize,
    len: usize,
    in_bracket: bool,
}

impl ClauseScan {
    pub fn new(len: usize) -> Self {
        Self { start: 0, end: 1, len, in_bracket: false }
    }

    /// Advance to the next candidate boundary; `None` when the stream is
    /// exhausted
    pub fn next_candidate(&mut self, stream: &TokenStream) -> Option<(usize, usize)> {
        while self.end < self.len && self.start < self.end {
            let token = stream.token(self.end);

            if is_open_bracket(&token.text) {
                self.in_bracket = true;
            }
            if is_close_bracket(&token.text) && self.in_bracket {
                self.in_bracket = false;
            }
            if self.in_bracket {
                self.end += 1;
                continue;
            }

            if !is_terminator(&token.text) && token.dep != DepLabel::Cc {
                self.end += 1;
                continue;
            }

            return Some((self.start, self.end));
        }
        None
    }

    /// The candidate failed to map; keep scanning past it
    pub fn reject(&mut self) {
        self.end += 1;
    }

    /// The candidate mapped; resume after the consumed verb phrase
    ///
    /// `map_end` is the index of the verb phrase's rightmost dependent and
    /// becomes the start of the next scan. A mapped end that would move
    /// the scan backward (a verb phrase rooted left of the clause) falls
    /// back to single-token progress, keeping boundaries monotonically
    /// non-decreasing and the scan finite.
    pub fn accept(&mut self, map_end: usize) {
        self.start = if map_end > self.start {
            map_end
        } else {
            self.start + 1
        };
        self.end = self.start + 1;
    }

    /// Unconsumed tail of the stream after the scan, if any
    pub fn remainder(&self) -> Option<(usize, usize)> {
        (self.start < self.len).then_some((self.start, self.len))
    }
}
