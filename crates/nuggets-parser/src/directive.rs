//! A located nugget span and its direct children.

use std::fmt;

use crate::scanner::locate;
use crate::tokens::{TOKEN_LEN, TokenCounts};

/// One candidate or confirmed `[[[...]]]` span.
///
/// A directive always remembers the buffer it was located in. For a top-level
/// directive that is the input text; for a child it is the parent's own text.
/// `start` and `end` are offsets into [`Directive::buffer`] and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    buffer: &'a str,
    start: usize,
    len: usize,
}

impl<'a> Directive<'a> {
    /// Treat the whole of `text` as a directive span.
    ///
    /// ```
    /// use nuggets_parser::Directive;
    ///
    /// let d = Directive::new("[[[quick [[[brown]]]]]]");
    /// assert!(d.is_complete());
    /// assert_eq!(d.child_list().len(), 1);
    /// ```
    pub fn new(text: &'a str) -> Self {
        Directive {
            buffer: text,
            start: 0,
            len: text.len(),
        }
    }

    pub(crate) fn span(buffer: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= buffer.len());
        Directive {
            buffer,
            start,
            len: end - start,
        }
    }

    /// The "nothing here" sentinel, anchored where the search began.
    pub fn not_found(buffer: &'a str, at: usize) -> Self {
        Directive {
            buffer,
            start: at,
            len: 0,
        }
    }

    /// The buffer this directive was located in.
    pub fn buffer(&self) -> &'a str {
        self.buffer
    }

    pub fn text(&self) -> &'a str {
        self.buffer.get(self.start..self.end()).unwrap_or("")
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_found(&self) -> bool {
        self.len > 0
    }

    /// Opening/closing tokens balance, and so do parameter-open/close tokens.
    /// Delimiter and context tokens are not counted.
    pub fn is_complete(&self) -> bool {
        if !self.is_found() {
            return false;
        }
        TokenCounts::of(self.text()).is_balanced()
    }

    /// Direct children, left to right. Grandchildren are reached through the
    /// children themselves.
    pub fn children(&self) -> Children<'a> {
        if self.is_complete() {
            Children {
                text: self.text(),
                next: TOKEN_LEN,
                done: false,
            }
        } else {
            Children {
                text: "",
                next: 0,
                done: true,
            }
        }
    }

    pub fn child_list(&self) -> Vec<Directive<'a>> {
        self.children().collect()
    }
}

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_found() {
            f.write_str("<not found>")
        } else if !self.is_complete() {
            write!(f, "<incomplete>{}", self.text())
        } else {
            f.write_str(self.text())
        }
    }
}

/// Iterator over the direct children of a complete directive.
///
/// Each child is located inside the parent's text, starting where the
/// previous child ended.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    text: &'a str,
    next: usize,
    done: bool,
}

impl<'a> Iterator for Children<'a> {
    type Item = Directive<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let child = locate(self.text, self.next);
        if !child.is_found() {
            self.done = true;
            return None;
        }
        self.next = child.end();
        Some(child)
    }
}

impl std::iter::FusedIterator for Children<'_> {}
