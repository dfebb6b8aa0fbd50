//! Rayon-backed driver that translates sibling nuggets concurrently.
//!
//! Results are spliced back by position, so the output matches
//! [`translate_all`](crate::translate_all) whenever `lookup` is pure.

use nuggets_parser::{Directive, beyond_depth, locate, splice};
use rayon::prelude::*;

use crate::config::Config;
use crate::nugget::decompose;

pub fn translate_all_par<F>(text: &str, lookup: F, config: Option<Config>) -> String
where
    F: Fn(&str, &str) -> String + Sync,
{
    let config = config.unwrap_or_default();

    let mut directives = Vec::new();
    let mut directive = locate(text, 0);
    while directive.is_found() {
        directives.push(directive);
        directive = locate(text, directive.end());
    }
    if directives.is_empty() {
        return text.to_string();
    }

    let resolved: Vec<String> = directives
        .par_iter()
        .map(|d| resolve_par(d, &lookup, 1, config.max_depth))
        .collect();

    // Top-level directives are children of the whole text.
    let out = splice(&Directive::new(text), directives.iter().copied().zip(resolved));

    log::debug!("Translated {} top-level nuggets in parallel", directives.len());
    out
}

fn resolve_par<F>(directive: &Directive<'_>, lookup: &F, depth: usize, max_depth: usize) -> String
where
    F: Fn(&str, &str) -> String + Sync,
{
    if let Some(verbatim) = beyond_depth(directive, depth, max_depth) {
        return verbatim;
    }

    let children = directive.child_list();
    let resolved: Vec<String> = children
        .par_iter()
        .map(|child| resolve_par(child, lookup, depth + 1, max_depth))
        .collect();

    decompose(&splice(directive, children.into_iter().zip(resolved)), lookup)
}
