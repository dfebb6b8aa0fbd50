//! Scanner and resolver for triple-bracket translation nuggets.
//!
//! A nugget is a `[[[...]]]` span embedded in free-form text. Nuggets may nest;
//! this crate finds balanced spans, enumerates their direct children and
//! resolves them depth-first. What happens to a single nugget body is left to
//! the caller's `substitute` function (see the `nuggets` crate for the
//! term/parameter/context decomposition).
//!
//! Malformed markup is never an error. A span that cannot be balanced is
//! reported as not found and the caller passes the text through unchanged.

pub mod directive;
pub mod resolve;
pub mod scanner;
pub mod tokens;

pub use directive::{Children, Directive};
pub use resolve::{
    DEFAULT_MAX_DEPTH, beyond_depth, resolve, splice, try_resolve, try_resolve_bounded,
};
pub use scanner::locate;
