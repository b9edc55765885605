// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Compiled `strftime` patterns for [`chrono`] date and time values.
//!
//! Formatting with chrono's own [`DateTime::format`] scans the format string
//! every time a value is formatted. This crate compiles a pattern once into a
//! [`Strftime`], a list of renderers that can be reused for any number of
//! values:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use chrono_strftime::Strftime;
//!
//! let pattern = Strftime::new("%a, %d %b %Y %H:%M:%S %z").unwrap();
//! let dt = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
//! assert_eq!(pattern.format(&dt).to_string(), "Tue, 10 Nov 2009 23:00:00 +0000");
//! ```
//!
//! See the [`strftime`](format::strftime) module for the supported directives.
//!
//! ## Custom directives
//!
//! Directives are looked up in a [`DirectiveTable`]. The global table with
//! the built-in directives is never modified; [`Options`] adds or overrides
//! directives on a private copy:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use chrono_strftime::{Options, Renderer, Strftime, Timestamp};
//!
//! fn quarter(buf: &mut String, ts: &Timestamp) {
//!     use chrono::Datelike;
//!     buf.push_str(&(ts.date().month0() / 3 + 1).to_string());
//! }
//!
//! let options = Options::new().directive('q', Renderer::derived(quarter));
//! let pattern = Strftime::with_options("%Y Q%q", &options).unwrap();
//! let dt = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
//! assert_eq!(pattern.format(&dt).to_string(), "2009 Q4");
//! ```
//!
//! ## One-shot formatting
//!
//! [`format`] and [`format_datetime`] compile and render in one go, writing
//! the output while the pattern is scanned.
//!
//! ## Crate features
//!
//! - `logging` (default): emit `log` records while compiling patterns.
//! - `serde`: (de)serialize [`Strftime`] as its pattern string.
//!
//! [`DateTime::format`]: chrono::DateTime::format

#![warn(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;

use chrono::{DateTime, TimeZone};

#[macro_use]
mod logging;

mod error;
pub mod format;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;
mod timestamp;

pub use error::{DirectiveNotFound, Error, Result};
pub use format::{format, DelayedFormat, Directive, DirectiveTable, Options, Renderer, Strftime};
pub use timestamp::Timestamp;

/// Formats `dt` with `pattern` and the built-in directives.
///
/// # Errors
///
/// See [`format`].
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
/// assert_eq!(chrono_strftime::format_datetime("%D %T", &dt).unwrap(), "11/10/09 23:00:00");
/// ```
pub fn format_datetime<Tz: TimeZone>(pattern: &str, dt: &DateTime<Tz>) -> Result<String>
where
    Tz::Offset: fmt::Display,
{
    format(pattern, &Timestamp::from(dt), &Options::new())
}
