// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

/*!
`strftime`-inspired date and time formatting syntax.

## Specifiers

The default [`DirectiveTable`](crate::DirectiveTable) knows the following
specifiers. Their output follows the C locale.

Spec. | Example       | Description
----- | ------------- | -----------
      |               | **DATE SPECIFIERS:**
`%Y`  | `2001`        | The full proleptic Gregorian year, zero-padded to 4 digits. [1]
`%C`  | `20`          | The proleptic Gregorian year divided by 100, zero-padded to 2 digits. [2]
`%y`  | `01`          | The proleptic Gregorian year modulo 100, zero-padded to 2 digits. [2]
      |               |
`%m`  | `07`          | Month number (01--12), zero-padded to 2 digits.
`%b`  | `Jul`         | Abbreviated month name. Always 3 letters.
`%B`  | `July`        | Full month name.
`%h`  | `Jul`         | Same as `%b`.
      |               |
`%d`  | `08`          | Day number (01--31), zero-padded to 2 digits.
`%e`  | ` 8`          | Same as `%d` but space-padded.
      |               |
`%a`  | `Sun`         | Abbreviated weekday name. Always 3 letters.
`%A`  | `Sunday`      | Full weekday name.
`%w`  | `0`           | Sunday = 0, Monday = 1, ..., Saturday = 6.
`%u`  | `7`           | Monday = 1, Tuesday = 2, ..., Sunday = 7. (ISO 8601)
      |               |
`%U`  | `28`          | Week number starting with Sunday (00--53), zero-padded to 2 digits. [3]
`%W`  | `27`          | Same as `%U`, but week 1 starts with the first Monday in that year instead.
      |               |
`%G`  | `2001`        | Same as `%Y` but uses the year number in ISO 8601 week date. [4]
`%g`  | `01`          | Same as `%y` but uses the year number in ISO 8601 week date. [4]
`%V`  | `27`          | Same as `%U` but uses the week number in ISO 8601 week date (01--53). [4]
      |               |
`%j`  | `189`         | Day of the year (001--366), zero-padded to 3 digits.
      |               |
`%D`  | `07/08/01`    | Month-day-year format. Same as `%m/%d/%y`.
`%x`  | `07/08/01`    | Same as `%D`.
`%F`  | `2001-07-08`  | Year-month-day format (ISO 8601). Same as `%Y-%m-%d`.
`%v`  | ` 8-Jul-2001` | Day-month-year format. Same as `%e-%b-%Y`.
      |               |
      |               | **TIME SPECIFIERS:**
`%H`  | `00`          | Hour number (00--23), zero-padded to 2 digits.
`%k`  | ` 0`          | Same as `%H` but space-padded.
`%I`  | `12`          | Hour number in 12-hour clocks (01--12), zero-padded to 2 digits.
`%l`  | `12`          | Same as `%I` but space-padded.
      |               |
`%P`  | `am`          | `am` or `pm` in 12-hour clocks.
`%p`  | `AM`          | `AM` or `PM` in 12-hour clocks.
      |               |
`%M`  | `34`          | Minute number (00--59), zero-padded to 2 digits.
`%S`  | `60`          | Second number (00--60), zero-padded to 2 digits. [5]
      |               |
`%R`  | `00:34`       | Hour-minute format. Same as `%H:%M`.
`%T`  | `00:34:60`    | Hour-minute-second format. Same as `%H:%M:%S`.
`%X`  | `00:34:60`    | Same as `%T`.
`%r`  | `12:34:60 AM` | Hour-minute-second format in 12-hour clocks. Same as `%I:%M:%S %p`.
      |               |
      |               | **TIME ZONE SPECIFIERS:**
`%Z`  | `ACST`        | Time zone name.
`%z`  | `+0930`       | Offset from the local time to UTC (with UTC being `+0000`).
      |               |
      |               | **DATE & TIME SPECIFIERS:**
`%c`  | `Sun Jul  8 00:34:60 2001` | `ctime` date & time format. Same as `%a %b %e %T %Y` sans `\n`.
      |               |
`%s`  | `994485899`   | UNIX timestamp, the number of seconds since 1970-01-01 00:00 UTC. [6]
      |               |
      |               | **SPECIAL SPECIFIERS:**
`%t`  |               | Literal tab (`\t`).
`%n`  |               | Literal newline (`\n`).
`%%`  |               | Literal percent sign.

Notes:

1. `%Y`:
   Years outside of 0 to 9999 are written with an explicit sign.

2. `%C`, `%y`:
   This is floor division, so 100 BCE (year number -99) will print `-1` and `99` respectively.

3. `%U`:
   Week 1 starts with the first Sunday in that year.
   It is possible to have week 0 for days before the first Sunday.

4. `%G`, `%g`, `%V`:
   Week 1 is the first week with at least 4 days in that year.
   Week 0 does not exist, so this should be used with `%G` or `%g`.

5. `%S`:
   It accounts for leap seconds, so `60` is possible.

6. `%s`:
   This is not padded and can be negative.
   It only accounts for non-leap seconds.

Any other character after `%` is an error, as is a `%` at the very end of
the pattern. More directives can be registered through
[`Options`](crate::Options).
*/

use super::{DirectiveTable, Renderer};
use crate::error::{Error, Result};
use crate::Timestamp;

/// A piece of a pattern, as handed out by [`compile`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum Item<'a> {
    /// A run of pattern text without any `%`.
    Verbatim(&'a str),
    /// The renderer a `%` directive resolved to.
    Directive(&'a Renderer),
}

/// Receives the items of a pattern in order.
pub(crate) trait Handler {
    fn accept(&mut self, item: Item<'_>);
}

/// Scans `pattern` and feeds its items to `handler`.
///
/// On error the handler may have seen a prefix of the items; callers throw
/// whatever it built away.
pub(crate) fn compile<H: Handler>(
    handler: &mut H,
    pattern: &str,
    table: &DirectiveTable,
) -> Result<()> {
    let mut remainder = pattern;
    while !remainder.is_empty() {
        let i = match remainder.find('%') {
            Some(i) => i,
            None => {
                handler.accept(Item::Verbatim(remainder));
                break;
            }
        };
        // `%` is a single byte, so whatever follows starts at `i + 1`.
        let mut spec = remainder[i + 1..].chars();
        let directive = match spec.next() {
            Some(c) => c,
            None => return Err(Error::StrayEscape),
        };
        if i > 0 {
            handler.accept(Item::Verbatim(&remainder[..i]));
        }
        let renderer = table
            .lookup(directive)
            .map_err(|source| Error::UnknownDirective { directive, source })?;
        handler.accept(Item::Directive(renderer));
        remainder = spec.as_str();
    }
    Ok(())
}

/// Collects items into renderers, folding adjacent literals together.
///
/// The output never holds two neighbouring literals: an incoming literal is
/// appended to the previous entry when that one is a literal too.
#[derive(Debug, Default)]
pub(crate) struct CombiningBuilder {
    items: Vec<Renderer>,
    /// Whether the last entry of `items` can take more literal text.
    prev_mergeable: bool,
    merged: usize,
}

impl CombiningBuilder {
    pub(crate) fn new() -> CombiningBuilder {
        CombiningBuilder::default()
    }

    pub(crate) fn push(&mut self, renderer: Renderer) {
        if self.prev_mergeable && renderer.is_mergeable() {
            if let (Some(prev), Some(text)) = (self.items.last_mut(), renderer.as_literal()) {
                if prev.absorb(text) {
                    self.merged += 1;
                    return;
                }
            }
        }
        self.prev_mergeable = renderer.is_mergeable();
        self.items.push(renderer);
    }

    /// Returns how many literals were folded into a previous entry.
    pub(crate) fn merged(&self) -> usize {
        self.merged
    }

    pub(crate) fn finish(self) -> Vec<Renderer> {
        self.items
    }
}

impl Handler for CombiningBuilder {
    fn accept(&mut self, item: Item<'_>) {
        match item {
            Item::Verbatim(s) => self.push(Renderer::literal(s.to_owned())),
            Item::Directive(r) => self.push(r.clone()),
        }
    }
}

/// Renders items as soon as they are scanned.
#[derive(Debug)]
pub(crate) struct Executor<'t> {
    ts: &'t Timestamp,
    buf: String,
}

impl<'t> Executor<'t> {
    pub(crate) fn new(ts: &'t Timestamp, capacity: usize) -> Executor<'t> {
        Executor { ts, buf: String::with_capacity(capacity) }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

impl Handler for Executor<'_> {
    fn accept(&mut self, item: Item<'_>) {
        match item {
            Item::Verbatim(s) => self.buf.push_str(s),
            Item::Directive(r) => r.render(&mut self.buf, self.ts),
        }
    }
}
