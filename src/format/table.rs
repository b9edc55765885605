// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::formatting::BUILTINS;
use super::Renderer;
use crate::error::{DirectiveNotFound, Error, Result};

static DEFAULT: Lazy<DirectiveTable> =
    Lazy::new(|| DirectiveTable { entries: BUILTINS.iter().cloned().collect(), mutable: false });

/// A mapping from directive characters to [`Renderer`]s.
///
/// The table only matters while a pattern compiles; a compiled [`Strftime`]
/// keeps no reference to it.
///
/// The [global](DirectiveTable::global) table holds the built-in directives and
/// can never be changed. Custom directives go into a mutable copy:
///
/// ```
/// use chrono_strftime::{DirectiveTable, Renderer};
///
/// let mut table = DirectiveTable::global().derive_mutable_copy();
/// table.set('L', Renderer::literal("<L>")).unwrap();
/// assert!(table.lookup('L').is_ok());
/// assert!(DirectiveTable::global().lookup('L').is_err());
/// ```
///
/// [`Strftime`]: crate::Strftime
#[derive(Clone, Debug)]
pub struct DirectiveTable {
    entries: HashMap<char, Renderer>,
    mutable: bool,
}

impl DirectiveTable {
    /// Returns the process-wide table of built-in directives.
    ///
    /// It is initialized on first use and is immutable from then on.
    pub fn global() -> &'static DirectiveTable {
        &DEFAULT
    }

    /// Makes a mutable table seeded with the built-in directives.
    pub fn new() -> DirectiveTable {
        DEFAULT.derive_mutable_copy()
    }

    /// Makes a mutable table without any directive, not even `%%`.
    pub fn empty() -> DirectiveTable {
        DirectiveTable { entries: HashMap::new(), mutable: true }
    }

    /// Makes a mutable copy of this table.
    #[must_use]
    pub fn derive_mutable_copy(&self) -> DirectiveTable {
        DirectiveTable { entries: self.entries.clone(), mutable: true }
    }

    /// Returns true if [`set`](Self::set) and [`remove`](Self::remove) are allowed.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    /// Returns the renderer registered under `key`.
    pub fn lookup(&self, key: char) -> core::result::Result<&Renderer, DirectiveNotFound> {
        self.entries.get(&key).ok_or(DirectiveNotFound { key })
    }

    /// Registers `renderer` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImmutableTable`] if this table is not mutable.
    pub fn set(&mut self, key: char, renderer: impl Into<Renderer>) -> Result<()> {
        if !self.mutable {
            return Err(Error::ImmutableTable { directive: key });
        }
        self.insert(key, renderer.into());
        Ok(())
    }

    /// Inserts without checking mutability. Only for tables this crate just derived.
    pub(crate) fn insert(&mut self, key: char, renderer: Renderer) {
        self.entries.insert(key, renderer);
    }

    /// Removes the entry for `key`, returning it if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImmutableTable`] if this table is not mutable.
    pub fn remove(&mut self, key: char) -> Result<Option<Renderer>> {
        if !self.mutable {
            return Err(Error::ImmutableTable { directive: key });
        }
        Ok(self.entries.remove(&key))
    }

    /// Returns the number of registered directives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no directive is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for DirectiveTable {
    fn default() -> DirectiveTable {
        DirectiveTable::new()
    }
}
