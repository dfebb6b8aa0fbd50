//! Resolve triple-bracket translation nuggets embedded in free-form text.
//!
//! ```no_run
//! let out = nuggets::translate_all("The fox [[[jumps]]] over", |term, _context| {
//!     term.to_uppercase()
//! });
//! assert_eq!(out, "The fox JUMPS over");
//! ```
//!
//! Markup: `[[[term///context|||literal|||(((translatable)))]]]`, with `%0`,
//! `%1`, ... in the term standing for the parameters. Nuggets nest, and inner
//! nuggets are translated before the nugget that contains them.

pub mod config;
pub mod nugget;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod translate;

pub use config::Config;
pub use config::ConfigBuilder;
pub use nugget::{Nugget, Param, decompose, try_decompose};
pub use nuggets_parser::{Directive, locate};
#[cfg(feature = "parallel")]
pub use parallel::translate_all_par;
pub use translate::{
    translate_all, translate_all_with_config, try_translate_all, try_translate_all_with_config,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
