//! tagconf: sectioned key/value config files with override tags
//!
//! Files are made of `[section]` headers and `key = value` lines. Values are
//! coerced to booleans, integers, floats, strings or lists. A key written as
//! `key<tag> = value` only applies when `tag` is among the overrides passed to
//! [`load`], and once applied it cannot be replaced by a plain assignment.
//!
//! ```
//! let doc = tagconf::load_str(
//!     "[server]\nport = 8080\nport<production> = 80\n",
//!     ["production"],
//! )?;
//! assert_eq!(doc.lookup("server.port").and_then(|v| v.as_i64()), Some(80));
//! # Ok::<(), tagconf::ConfigError>(())
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod parse;

pub use document::{Document, Section, Value};
pub use error::{ConfigError, Result};
pub use loader::{load, load_reader, load_str};
pub use parse::OverrideTag;
