//! The top-level driver: find every nugget in a text and translate it.

use std::convert::Infallible;

use nuggets_parser::{locate, try_resolve_bounded};

use crate::config::Config;
use crate::nugget::try_decompose;

/// Translate every nugget in `text` with the default configuration.
///
/// `lookup` receives a term and its context (empty when none was given) and
/// returns the translation.
pub fn translate_all<F>(text: &str, lookup: F) -> String
where
    F: FnMut(&str, &str) -> String,
{
    translate_all_with_config(text, lookup, &Config::default())
}

pub fn translate_all_with_config<F>(text: &str, mut lookup: F, config: &Config) -> String
where
    F: FnMut(&str, &str) -> String,
{
    let result: Result<String, Infallible> =
        try_translate_all_with_config(text, |term, context| Ok(lookup(term, context)), config);
    match result {
        Ok(text) => text,
        Err(never) => match never {},
    }
}

/// Translate every nugget in `text`, stopping at the first lookup error.
pub fn try_translate_all<F, E>(text: &str, lookup: F) -> Result<String, E>
where
    F: FnMut(&str, &str) -> Result<String, E>,
{
    try_translate_all_with_config(text, lookup, &Config::default())
}

/// Text outside nuggets, and any nugget that never balances along with
/// everything after it, is copied through unchanged.
pub fn try_translate_all_with_config<F, E>(
    text: &str,
    mut lookup: F,
    config: &Config,
) -> Result<String, E>
where
    F: FnMut(&str, &str) -> Result<String, E>,
{
    #[cfg(debug_assertions)]
    {
        crate::init_logger();
    }

    let mut directive = locate(text, 0);
    // Nothing to translate, hand the input straight back.
    if !directive.is_found() {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut previous_end = 0;
    let mut count = 0;

    while directive.is_found() {
        out.push_str(&text[previous_end..directive.start()]);
        let resolved = try_resolve_bounded(
            &directive,
            |body| try_decompose(body, &mut lookup),
            config.max_depth,
        )?;
        out.push_str(&resolved);
        previous_end = directive.end();
        count += 1;
        directive = locate(text, previous_end);
    }

    out.push_str(&text[previous_end..]);

    log::debug!(
        "Translated {} top-level nuggets, {} trailing bytes copied",
        count,
        text.len() - previous_end
    );
    Ok(out)
}
