// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Directives, directive tables and compiled patterns.
//!
//! A pattern is compiled once against a [`DirectiveTable`] into a [`Strftime`],
//! which is then rendered any number of times. [`format`] compiles and renders
//! in one go without keeping the compiled form around.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::Timestamp;

mod compiled;
pub(crate) mod formatting;
mod options;
pub mod strftime;
mod table;

pub use compiled::{DelayedFormat, Strftime};
pub use options::Options;
pub use table::DirectiveTable;

use self::strftime::Executor;

/// Extra capacity reserved for the output on top of the pattern length.
///
/// Most directives expand to a handful of bytes, so this is a guess and not a
/// bound; the buffer grows when it is exceeded.
pub(crate) const BUFFER_HEADROOM: usize = 10;

/// A caller-supplied directive.
///
/// Implement this to register renderers that need state, such as a lookup table
/// or a configured precision. Stateless renderers can be plain functions passed
/// to [`Renderer::derived`].
pub trait Directive: fmt::Debug + Send + Sync {
    /// Appends the text for `ts` to `buf`.
    fn render(&self, buf: &mut String, ts: &Timestamp);
}

/// One unit of output generation in a compiled pattern.
#[derive(Clone)]
pub enum Renderer {
    /// A fixed text, written as is regardless of the timestamp.
    Literal(Cow<'static, str>),
    /// A text derived from the timestamp by a function.
    Derived(fn(&mut String, &Timestamp)),
    /// Adjacent literals folded together at compile time.
    ///
    /// Only the compiler produces this variant. It renders exactly like a
    /// [`Renderer::Literal`] holding the same text.
    Combined(String),
    /// A caller-supplied [`Directive`].
    Custom(Arc<dyn Directive>),
}

impl Renderer {
    /// Makes a renderer that always writes `text`.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Renderer {
        Renderer::Literal(text.into())
    }

    /// Makes a renderer out of a function of the timestamp.
    pub fn derived(f: fn(&mut String, &Timestamp)) -> Renderer {
        Renderer::Derived(f)
    }

    /// Makes a renderer out of a caller-supplied [`Directive`].
    pub fn custom<D: Directive + 'static>(directive: D) -> Renderer {
        Renderer::Custom(Arc::new(directive))
    }

    /// Appends the output of this renderer for `ts` to `buf`.
    #[inline]
    pub fn render(&self, buf: &mut String, ts: &Timestamp) {
        match self {
            Renderer::Literal(s) => buf.push_str(s),
            Renderer::Combined(s) => buf.push_str(s),
            Renderer::Derived(f) => f(buf, ts),
            Renderer::Custom(d) => d.render(buf, ts),
        }
    }

    /// Returns true if this renderer may be folded into a preceding literal.
    ///
    /// `Combined` is excluded: it only ever exists as the left-hand side of a
    /// fold, never as the incoming item.
    #[inline]
    pub fn is_mergeable(&self) -> bool {
        matches!(self, Renderer::Literal(_))
    }

    /// Returns the fixed text of a `Literal` or `Combined` renderer.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Renderer::Literal(s) => Some(s),
            Renderer::Combined(s) => Some(s),
            Renderer::Derived(_) | Renderer::Custom(_) => None,
        }
    }

    /// Appends `text` to this renderer if it is a literal, turning it into a
    /// `Combined` renderer. Returns false and does nothing otherwise.
    pub(crate) fn absorb(&mut self, text: &str) -> bool {
        match self {
            Renderer::Literal(s) => {
                let mut combined = String::with_capacity(s.len() + text.len());
                combined.push_str(s);
                combined.push_str(text);
                *self = Renderer::Combined(combined);
                true
            }
            Renderer::Combined(s) => {
                s.push_str(text);
                true
            }
            Renderer::Derived(_) | Renderer::Custom(_) => false,
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Renderer::Derived(_) => f.write_str("Derived(..)"),
            Renderer::Combined(s) => f.debug_tuple("Combined").field(s).finish(),
            Renderer::Custom(d) => f.debug_tuple("Custom").field(d).finish(),
        }
    }
}

impl From<&'static str> for Renderer {
    fn from(text: &'static str) -> Renderer {
        Renderer::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for Renderer {
    fn from(text: String) -> Renderer {
        Renderer::Literal(Cow::Owned(text))
    }
}

impl From<fn(&mut String, &Timestamp)> for Renderer {
    fn from(f: fn(&mut String, &Timestamp)) -> Renderer {
        Renderer::Derived(f)
    }
}

impl From<Arc<dyn Directive>> for Renderer {
    fn from(directive: Arc<dyn Directive>) -> Renderer {
        Renderer::Custom(directive)
    }
}

/// Formats `ts` with `pattern` in one pass.
///
/// The pattern is recompiled on every call and the output is written while
/// the pattern is scanned, so nothing but the output is allocated. Compile a
/// [`Strftime`] instead when the same pattern is used repeatedly.
///
/// # Errors
///
/// Returns an error, and no output, if the pattern ends with a lone `%` or
/// uses a directive missing from the table chosen by `options`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_strftime::{format, Options, Timestamp};
///
/// let ts = Timestamp::from(&Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap());
/// assert_eq!(format("%Y-%m-%d", &ts, &Options::new()).unwrap(), "2009-11-10");
/// assert!(format("100%", &ts, &Options::new()).is_err());
/// ```
pub fn format(pattern: &str, ts: &Timestamp, options: &Options) -> Result<String> {
    let table = options.resolve();
    let mut executor = Executor::new(ts, pattern.len() + BUFFER_HEADROOM);
    if let Err(err) = strftime::compile(&mut executor, pattern, &table) {
        debug!("failed to format with {:?}: {}", pattern, err);
        return Err(err);
    }
    Ok(executor.finish())
}
