//! Depth-first resolution of a directive and everything nested inside it.

use std::convert::Infallible;

use crate::directive::Directive;

/// Nesting depth beyond which directives are left as plain text.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resolve `directive` with an infallible `substitute`.
///
/// Children are resolved first and spliced back into the parent's text; the
/// assembled text, still wrapped in its own `[[[`/`]]]`, is then handed to
/// `substitute`.
///
/// ```
/// use nuggets_parser::{locate, resolve};
///
/// let d = locate("[[[a [[[b]]]]]]", 0);
/// let out = resolve(&d, |body| body.replace("[[[", "<").replace("]]]", ">"));
/// assert_eq!(out, "<a <b>>");
/// ```
pub fn resolve<F>(directive: &Directive<'_>, mut substitute: F) -> String
where
    F: FnMut(&str) -> String,
{
    let result: Result<String, Infallible> =
        try_resolve(directive, |body| Ok(substitute(body)));
    match result {
        Ok(text) => text,
        Err(never) => match never {},
    }
}

/// Resolve `directive`, stopping at the first error from `substitute`.
pub fn try_resolve<F, E>(directive: &Directive<'_>, substitute: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    try_resolve_bounded(directive, substitute, DEFAULT_MAX_DEPTH)
}

/// Like [`try_resolve`], with an explicit nesting limit.
///
/// `directive` itself sits at depth 1. A directive deeper than `max_depth` is
/// copied through verbatim: its children are not visited and `substitute`
/// never sees it.
pub fn try_resolve_bounded<F, E>(
    directive: &Directive<'_>,
    mut substitute: F,
    max_depth: usize,
) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    resolve_at(directive, &mut substitute, 1, max_depth)
}

fn resolve_at<F, E>(
    directive: &Directive<'_>,
    substitute: &mut F,
    depth: usize,
    max_depth: usize,
) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    if let Some(verbatim) = beyond_depth(directive, depth, max_depth) {
        return Ok(verbatim);
    }

    let resolved = directive
        .children()
        .map(|child| {
            resolve_at(&child, &mut *substitute, depth + 1, max_depth).map(|text| (child, text))
        })
        .collect::<Result<Vec<_>, E>>()?;

    substitute(&splice(directive, resolved))
}

/// The directive's own text when it sits deeper than `max_depth`, `None`
/// when it should be resolved.
pub fn beyond_depth(directive: &Directive<'_>, depth: usize, max_depth: usize) -> Option<String> {
    if depth <= max_depth {
        return None;
    }
    let text = directive.text();
    log::warn!(
        "Directive nesting exceeds {} levels, leaving {} bytes untranslated",
        max_depth,
        text.len()
    );
    Some(text.to_string())
}

/// Rebuild `directive`'s text with each child replaced by its resolution.
///
/// `resolved` pairs children of `directive` with their text, in the order
/// [`Directive::children`] yields them.
pub fn splice<'a, I, S>(directive: &Directive<'a>, resolved: I) -> String
where
    I: IntoIterator<Item = (Directive<'a>, S)>,
    S: AsRef<str>,
{
    let text = directive.text();
    let mut assembled = String::with_capacity(text.len());
    let mut previous_end = 0;
    for (child, translated) in resolved {
        assembled.push_str(&text[previous_end..child.start()]);
        assembled.push_str(translated.as_ref());
        previous_end = child.end();
    }
    assembled.push_str(&text[previous_end..]);
    assembled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::locate;

    fn strip(body: &str) -> String {
        body.trim_start_matches("[[[")
            .trim_end_matches("]]]")
            .to_uppercase()
    }

    #[test]
    fn leaf_directive_is_substituted_once() {
        let d = locate("x [[[jumps]]] y", 0);
        let mut seen = Vec::new();
        let out = resolve(&d, |body| {
            seen.push(body.to_string());
            strip(body)
        });
        assert_eq!(out, "JUMPS");
        assert_eq!(seen, vec!["[[[jumps]]]"]);
    }

    #[test]
    fn children_resolve_before_parent() {
        let d = locate("[[[jumps [[[and leaps]]]]]]", 0);
        let mut seen = Vec::new();
        let out = resolve(&d, |body| {
            seen.push(body.to_string());
            match body {
                "[[[and leaps]]]" => "and bounds".to_string(),
                "[[[jumps and bounds]]]" => "bounces".to_string(),
                other => other.to_string(),
            }
        });
        assert_eq!(out, "bounces");
        assert_eq!(seen, vec!["[[[and leaps]]]", "[[[jumps and bounds]]]"]);
    }

    #[test]
    fn siblings_resolve_left_to_right() {
        let d = locate("[[[a [[[b]]] c [[[d]]] e]]]", 0);
        let mut order = Vec::new();
        let out = resolve(&d, |body| {
            order.push(body.to_string());
            strip(body)
        });
        assert_eq!(out, "A B C D E");
        assert_eq!(order, vec!["[[[b]]]", "[[[d]]]", "[[[a B c D e]]]"]);
    }

    #[test]
    fn error_from_substitute_propagates() {
        let d = locate("[[[a [[[b]]]]]]", 0);
        let out: Result<String, String> = try_resolve(&d, |body| {
            if body == "[[[b]]]" {
                Err("no catalog".to_string())
            } else {
                Ok(body.to_string())
            }
        });
        assert_eq!(out, Err("no catalog".to_string()));
    }

    #[test]
    fn error_stops_later_siblings() {
        let d = locate("[[[ [[[a]]] [[[b]]] ]]]", 0);
        let mut calls = 0;
        let out: Result<String, ()> = try_resolve(&d, |_| {
            calls += 1;
            Err(())
        });
        assert!(out.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn nesting_past_limit_is_left_verbatim() {
        let d = locate("[[[a [[[b [[[c]]]]]]]]]", 0);
        let out: Result<String, Infallible> =
            try_resolve_bounded(&d, |body| Ok(strip(body)), 2);
        // Depth 3 ("[[[c]]]") is copied through, so depth 2 sees its tokens.
        assert_eq!(out.unwrap(), "A B [[[C");
    }

    #[test]
    fn zero_depth_limit_leaves_everything_verbatim() {
        let d = locate("[[[a]]]", 0);
        let out: Result<String, Infallible> =
            try_resolve_bounded(&d, |body| Ok(strip(body)), 0);
        assert_eq!(out.unwrap(), "[[[a]]]");
    }

    #[test]
    fn splice_keeps_text_between_children() {
        let d = locate("[[[a [[[b]]] c [[[d]]] e]]]", 0);
        let resolved: Vec<_> = d.children().map(|c| (c, "_")).collect();
        assert_eq!(splice(&d, resolved), "[[[a _ c _ e]]]");
    }

    #[test]
    fn splice_without_children_copies_text() {
        let d = locate("[[[plain]]]", 0);
        assert_eq!(splice(&d, Vec::<(Directive<'_>, String)>::new()), "[[[plain]]]");
    }

    #[test]
    fn beyond_depth_only_past_the_limit() {
        let d = locate("[[[a]]]", 0);
        assert_eq!(beyond_depth(&d, 2, 2), None);
        assert_eq!(beyond_depth(&d, 3, 2), Some("[[[a]]]".to_string()));
    }

    #[test]
    fn thousands_of_levels_stop_at_the_limit() {
        let depth = 3000;
        let input = format!("{}x{}", "[[[".repeat(depth), "]]]".repeat(depth));
        let d = locate(&input, 0);
        let out = resolve(&d, |body| body[3..body.len() - 3].to_string());
        let kept = depth - DEFAULT_MAX_DEPTH;
        assert_eq!(out, format!("{}x{}", "[[[".repeat(kept), "]]]".repeat(kept)));
    }

    #[test]
    fn deep_nesting_within_default_limit() {
        let depth = 40;
        let input = format!("{}x{}", "[[[".repeat(depth), "]]]".repeat(depth));
        let d = locate(&input, 0);
        let mut calls = 0;
        let out = resolve(&d, |body| {
            calls += 1;
            strip(body)
        });
        assert_eq!(out, "X");
        assert_eq!(calls, depth);
    }
}
