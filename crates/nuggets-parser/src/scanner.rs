//! Balanced-span scanning for `[[[...]]]` directives.

use crate::directive::Directive;
use crate::tokens::{CLOSE, OPEN, TOKEN_LEN, TokenCounts, find_from};

/// Locate the next balanced directive in `buffer` at or after `from`.
///
/// The first closing token is searched from `from`, not from the opening
/// token, so a stray `]]]` in front of the directive is tried first. It gives
/// an empty candidate and the span keeps growing to the next `]]]` until the
/// open/close counts balance.
///
/// Token counts are kept as the span grows, so each byte is counted once and
/// a deeply nested directive is located in linear time.
///
/// Returns [`Directive::not_found`] anchored at `from` when there is no
/// opening token, no closing token, or the closing tokens run out before the
/// span balances. In the last case the caller should treat everything from
/// `from` onward as plain text.
pub fn locate(buffer: &str, from: usize) -> Directive<'_> {
    let Some(start) = find_from(buffer, OPEN, from) else {
        return Directive::not_found(buffer, from);
    };
    let Some(mut close) = find_from(buffer, CLOSE, from) else {
        log::debug!("Unclosed directive at byte {}, passing it through", start);
        return Directive::not_found(buffer, from);
    };

    let mut counts = TokenCounts::default();
    let mut counted_to = start;
    loop {
        let end = close + TOKEN_LEN;
        if end > start {
            counts.add(&buffer[counted_to..end]);
            counted_to = end;
            if counts.is_balanced() {
                return Directive::span(buffer, start, end);
            }
        }

        // Nested opening tokens: grow to the next closing token.
        match find_from(buffer, CLOSE, end) {
            Some(next) => close = next,
            None => {
                log::debug!(
                    "Directive at byte {} never balances, passing {} bytes through",
                    start,
                    buffer.len().saturating_sub(from)
                );
                return Directive::not_found(buffer, from);
            }
        }
    }
}
