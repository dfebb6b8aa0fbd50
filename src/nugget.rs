//! Decomposition of a single nugget body into term, context and parameters.
//!
//! Body syntax: `[[[term///context|||param|||(((translated param)))]]]`.
//! The term may reference parameters as `%0`, `%1`, ... by position.

use std::borrow::Cow;
use std::convert::Infallible;

use nuggets_parser::tokens::{
    CLOSE, CONTEXT, DELIMITER, OPEN, PARAM_CLOSE, PARAM_OPEN, TOKEN_LEN,
};

/// One positional parameter of a nugget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param<'a> {
    /// Substituted as written.
    Literal(&'a str),
    /// Wrapped in `(((...)))`, passed through lookup before substitution.
    Translatable {
        term: String,
        context: Option<String>,
    },
}

/// The structured form of a `[[[...]]]` body whose children are already
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nugget<'a> {
    pub term: &'a str,
    pub context: Option<&'a str>,
    pub params: Vec<Param<'a>>,
}

impl<'a> Nugget<'a> {
    /// Split `body` into its parts. Returns `None` unless `body` is wrapped in
    /// `[[[` and `]]]`.
    pub fn parse(body: &'a str) -> Option<Self> {
        if body.len() < 2 * TOKEN_LEN || !body.starts_with(OPEN) || !body.ends_with(CLOSE) {
            return None;
        }
        let inner = &body[TOKEN_LEN..body.len() - TOKEN_LEN];

        let mut segments = inner.split(DELIMITER);
        let (term, context) = split_context(segments.next().unwrap_or(""));
        let params = segments.map(parse_param).collect();

        Some(Nugget {
            term,
            context,
            params,
        })
    }

    pub fn render<F>(&self, mut lookup: F) -> String
    where
        F: FnMut(&str, &str) -> String,
    {
        let result: Result<String, Infallible> =
            self.try_render(|term, context| Ok(lookup(term, context)));
        match result {
            Ok(text) => text,
            Err(never) => match never {},
        }
    }

    /// Translate the term, then replace each `%N` with parameter `N`.
    ///
    /// Lookup runs for the term first, then for translatable parameters in
    /// order. Placeholders are replaced textually in ascending order, so `%1`
    /// also matches the front of `%10`.
    pub fn try_render<F, E>(&self, mut lookup: F) -> Result<String, E>
    where
        F: FnMut(&str, &str) -> Result<String, E>,
    {
        let mut text = lookup(self.term, self.context.unwrap_or(""))?;
        for (index, param) in self.params.iter().enumerate() {
            let value = match param {
                Param::Literal(value) => Cow::Borrowed(*value),
                Param::Translatable { term, context } => {
                    let context = context.as_deref().unwrap_or("");
                    Cow::Owned(lookup(term.as_str(), context)?)
                }
            };
            text = text.replace(&format!("%{index}"), &value);
        }
        Ok(text)
    }
}

fn split_context(text: &str) -> (&str, Option<&str>) {
    match text.split_once(CONTEXT) {
        Some((term, context)) => (term, Some(context)),
        None => (text, None),
    }
}

fn parse_param(segment: &str) -> Param<'_> {
    if !segment.contains(PARAM_OPEN) {
        return Param::Literal(segment);
    }
    let stripped = segment.replace(PARAM_OPEN, "").replace(PARAM_CLOSE, "");
    let (term, context) = split_context(&stripped);
    Param::Translatable {
        term: term.to_string(),
        context: context.map(str::to_string),
    }
}

/// Translate one resolved nugget body. Anything that is not a nugget body is
/// returned unchanged.
pub fn decompose<F>(body: &str, lookup: F) -> String
where
    F: FnMut(&str, &str) -> String,
{
    match Nugget::parse(body) {
        Some(nugget) => nugget.render(lookup),
        None => body.to_string(),
    }
}

pub fn try_decompose<F, E>(body: &str, lookup: F) -> Result<String, E>
where
    F: FnMut(&str, &str) -> Result<String, E>,
{
    match Nugget::parse(body) {
        Some(nugget) => nugget.try_render(lookup),
        None => Ok(body.to_string()),
    }
}
