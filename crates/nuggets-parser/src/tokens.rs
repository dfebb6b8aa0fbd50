//! The six fixed tokens of the nugget dialect.
//!
//! Every token is three ASCII bytes, so any offset the scanner derives from a
//! token match is also a valid `char` boundary in the surrounding text.

/// Opens a directive: `[[[`
pub const OPEN: &str = "[[[";
/// Closes a directive: `]]]`
pub const CLOSE: &str = "]]]";
/// Separates the term from positional parameters: `|||`
pub const DELIMITER: &str = "|||";
/// Separates a term from its disambiguation context: `///`
pub const CONTEXT: &str = "///";
/// Marks a parameter as translatable: `(((`
pub const PARAM_OPEN: &str = "(((";
/// Ends a translatable parameter: `)))`
pub const PARAM_CLOSE: &str = ")))";

/// Length in bytes shared by all tokens.
pub const TOKEN_LEN: usize = 3;

/// Find `token` in `text` at or after byte offset `from`.
pub(crate) fn find_from(text: &str, token: &str, from: usize) -> Option<usize> {
    text.get(from..)
        .and_then(|rest| rest.find(token))
        .map(|pos| from + pos)
}

/// Non-overlapping occurrences of `token` in `text`.
pub(crate) fn count(text: &str, token: &str) -> usize {
    text.matches(token).count()
}

/// Running tallies of the four tokens that decide completeness.
///
/// Counts from consecutive slices add up to the counts of the joined text as
/// long as every cut falls right after a `]]]`, since no token can straddle it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TokenCounts {
    open: usize,
    close: usize,
    param_open: usize,
    param_close: usize,
}

impl TokenCounts {
    pub(crate) fn of(text: &str) -> Self {
        let mut counts = Self::default();
        counts.add(text);
        counts
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.open += count(text, OPEN);
        self.close += count(text, CLOSE);
        self.param_open += count(text, PARAM_OPEN);
        self.param_close += count(text, PARAM_CLOSE);
    }

    pub(crate) fn is_balanced(&self) -> bool {
        self.open == self.close && self.param_open == self.param_close
    }
}
