// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Errors raised while building directive tables and compiling patterns.

/// The error returned by [`DirectiveTable::lookup`](crate::DirectiveTable::lookup)
/// when no directive is registered under a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no directive registered for `{key}`")]
pub struct DirectiveNotFound {
    /// The key that was looked up.
    pub key: char,
}

/// An error from compiling a pattern or changing a directive table.
///
/// Writing a rendered pattern to an [`io::Write`](std::io::Write) sink never
/// produces this type; sink failures are returned as the sink's own
/// [`std::io::Error`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The pattern ends with a `%` that has no directive character after it.
    #[error("stray % at the end of pattern")]
    StrayEscape,
    /// The character after a `%` has no entry in the active directive table.
    #[error("unknown directive `%{directive}`")]
    UnknownDirective {
        /// The offending character.
        directive: char,
        /// The failed table lookup.
        #[source]
        source: DirectiveNotFound,
    },
    /// A table that is not mutable was asked to insert or remove a directive.
    #[error("cannot change directive `{directive}` in an immutable directive table")]
    ImmutableTable {
        /// The key of the rejected change.
        directive: char,
    },
}

impl Error {
    /// Returns the directive character this error is about, if any.
    pub fn directive(&self) -> Option<char> {
        match *self {
            Error::StrayEscape => None,
            Error::UnknownDirective { directive, .. } | Error::ImmutableTable { directive } => {
                Some(directive)
            }
        }
    }
}

/// Same as `Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
