// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

use std::fmt;
use std::io;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};

use super::strftime::{self, CombiningBuilder};
use super::{DirectiveTable, Options, Renderer, BUFFER_HEADROOM};
use crate::error::{Error, Result};
use crate::Timestamp;

/// A compiled `strftime` pattern.
///
/// Compiling resolves every directive once, so rendering is a walk over a list
/// of renderers. A `Strftime` never changes after it is built and can be
/// shared between threads and rendered concurrently.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_strftime::{Strftime, Timestamp};
///
/// let pattern = Strftime::new("%Y-%m-%d %H:%M:%S").unwrap();
/// let ts = Timestamp::from(&Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap());
/// assert_eq!(pattern.render_to_string(&ts), "2009-11-10 23:00:00");
///
/// let mut out = Vec::new();
/// pattern.render_to_writer(&mut out, &ts).unwrap();
/// assert_eq!(out, b"2009-11-10 23:00:00");
/// ```
#[derive(Clone, Debug)]
pub struct Strftime {
    /// The source text, kept for diagnostics and buffer sizing.
    pattern: String,
    items: Box<[Renderer]>,
}

impl Strftime {
    /// Compiles `pattern` against the global directive table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StrayEscape`] if the pattern ends with a lone `%` and
    /// [`Error::UnknownDirective`] for a `%` followed by an unknown character.
    pub fn new(pattern: &str) -> Result<Strftime> {
        Strftime::with_table(pattern, DirectiveTable::global())
    }

    /// Compiles `pattern` against the table described by `options`.
    ///
    /// # Errors
    ///
    /// Same as [`Strftime::new`].
    pub fn with_options(pattern: &str, options: &Options) -> Result<Strftime> {
        Strftime::with_table(pattern, &options.resolve())
    }

    /// Compiles `pattern` against `table`.
    ///
    /// # Errors
    ///
    /// Same as [`Strftime::new`].
    pub fn with_table(pattern: &str, table: &DirectiveTable) -> Result<Strftime> {
        let mut builder = CombiningBuilder::new();
        if let Err(err) = strftime::compile(&mut builder, pattern, table) {
            debug!("failed to compile {:?}: {}", pattern, err);
            return Err(err);
        }
        let merged = builder.merged();
        let items = builder.finish().into_boxed_slice();
        trace!(
            "compiled {:?} into {} renderer(s), {} literal(s) merged",
            pattern,
            items.len(),
            merged
        );
        Ok(Strftime { pattern: pattern.to_owned(), items })
    }

    /// Returns the pattern this was compiled from.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the compiled renderers, in output order.
    #[inline]
    pub fn renderers(&self) -> &[Renderer] {
        &self.items
    }

    /// Appends the rendering of `ts` to `buf`.
    pub fn render_into(&self, buf: &mut String, ts: &Timestamp) {
        for item in self.items.iter() {
            item.render(buf, ts);
        }
    }

    /// Renders `ts` into a new string.
    pub fn render_to_string(&self, ts: &Timestamp) -> String {
        let mut buf = String::with_capacity(self.pattern.len() + BUFFER_HEADROOM);
        self.render_into(&mut buf, ts);
        buf
    }

    /// Renders `ts` and writes the result to `w`.
    ///
    /// # Errors
    ///
    /// Returns the error of `w` as is. The pattern stays usable afterwards.
    pub fn render_to_writer<W: io::Write>(&self, mut w: W, ts: &Timestamp) -> io::Result<()> {
        w.write_all(self.render_to_string(ts).as_bytes())
    }

    /// Returns a value that renders `dt` when displayed.
    ///
    /// This makes a compiled pattern usable with `format!` and `to_string`,
    /// like [`DateTime::format`] is.
    pub fn format<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> DelayedFormat<'_>
    where
        Tz::Offset: fmt::Display,
    {
        DelayedFormat { pattern: self, ts: Timestamp::from(dt) }
    }
}

impl FromStr for Strftime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Strftime> {
        Strftime::new(s)
    }
}

/// Writes the original pattern.
impl fmt::Display for Strftime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// A *temporary* object which can be used as an argument to `format!` or others.
/// This is normally constructed via [`Strftime::format`].
#[derive(Debug)]
pub struct DelayedFormat<'a> {
    pattern: &'a Strftime,
    ts: Timestamp,
}

impl fmt::Display for DelayedFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.pattern.render_to_string(&self.ts))
    }
}
