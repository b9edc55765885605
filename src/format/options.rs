// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

use std::borrow::Cow;

use super::formatting;
use super::{DirectiveTable, Renderer};

/// Settings for compiling a pattern.
///
/// By default patterns compile against [`DirectiveTable::global`]. A different
/// base table can be supplied with [`directive_table`](Options::directive_table),
/// and single directives can be added or overridden on top of the base with
/// [`directive`](Options::directive):
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_strftime::{Options, Strftime};
///
/// let options = Options::new().milliseconds('L').directive('Z', "GMT");
/// let pattern = Strftime::with_options("%H:%M:%S.%L %Z", &options).unwrap();
/// let dt = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
/// assert_eq!(pattern.format(&dt).to_string(), "23:00:00.000 GMT");
/// ```
///
/// The base table is never changed: when it is immutable, directives are
/// added to a mutable copy of it, and a mutable base is copied as well.
#[derive(Clone, Debug, Default)]
pub struct Options {
    table: Option<DirectiveTable>,
    extra: Vec<(char, Renderer)>,
}

impl Options {
    /// Makes options that compile against the global table.
    pub fn new() -> Options {
        Options::default()
    }

    /// Uses `table` as the base table in place of the global one.
    #[must_use]
    pub fn directive_table(mut self, table: DirectiveTable) -> Options {
        self.table = Some(table);
        self
    }

    /// Registers `renderer` under `key` on top of the base table.
    ///
    /// Later registrations of the same key win.
    #[must_use]
    pub fn directive(mut self, key: char, renderer: impl Into<Renderer>) -> Options {
        self.extra.push((key, renderer.into()));
        self
    }

    /// Registers the milliseconds of the second, zero-padded to 3 digits, under `key`.
    #[must_use]
    pub fn milliseconds(self, key: char) -> Options {
        self.directive(key, Renderer::derived(formatting::milliseconds))
    }

    /// Registers the microseconds of the second, zero-padded to 6 digits, under `key`.
    #[must_use]
    pub fn microseconds(self, key: char) -> Options {
        self.directive(key, Renderer::derived(formatting::microseconds))
    }

    /// Registers the number of seconds since the Unix epoch under `key`.
    #[must_use]
    pub fn unix_seconds(self, key: char) -> Options {
        self.directive(key, Renderer::derived(formatting::unix_seconds))
    }

    /// Returns the table patterns compile against with these options.
    pub(crate) fn resolve(&self) -> Cow<'_, DirectiveTable> {
        let base = self.table.as_ref().unwrap_or_else(|| DirectiveTable::global());
        if self.extra.is_empty() {
            return Cow::Borrowed(base);
        }
        let mut table = base.derive_mutable_copy();
        for (key, renderer) in &self.extra {
            table.insert(*key, renderer.clone());
        }
        trace!("resolved directive table with {} extra directive(s)", self.extra.len());
        Cow::Owned(table)
    }
}
