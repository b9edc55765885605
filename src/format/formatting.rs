// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! The built-in directive renderers.
//!
//! These follow the C locale `strftime` conventions. Each one appends to the
//! output buffer and never fails.

use std::borrow::Cow;
use std::fmt::Write;

use chrono::{Datelike, Timelike};

use super::Renderer;
use crate::Timestamp;

const SHORT_MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const SHORT_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const LONG_WEEKDAYS: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

macro_rules! lit {
    ($x:expr) => {
        Renderer::Literal(Cow::Borrowed($x))
    };
}
macro_rules! der {
    ($f:ident) => {
        Renderer::Derived($f)
    };
}

/// Every directive in the default table, keyed by the character after `%`.
pub(crate) static BUILTINS: [(char, Renderer); 42] = [
    ('A', der!(weekday_full)),
    ('a', der!(weekday_abbrev)),
    ('B', der!(month_full)),
    ('b', der!(month_abbrev)),
    ('C', der!(century)),
    ('c', der!(date_and_time)),
    ('D', der!(american_date)),
    ('d', der!(day_zero)),
    ('e', der!(day_space)),
    ('F', der!(iso_date)),
    ('G', der!(iso_week_year)),
    ('g', der!(iso_week_year2)),
    ('H', der!(hour24_zero)),
    ('h', der!(month_abbrev)),
    ('I', der!(hour12_zero)),
    ('j', der!(day_of_year)),
    ('k', der!(hour24_space)),
    ('l', der!(hour12_space)),
    ('M', der!(minute)),
    ('m', der!(month)),
    ('n', lit!("\n")),
    ('P', der!(ampm_lower)),
    ('p', der!(ampm_upper)),
    ('R', der!(clock_nosecs)),
    ('r', der!(clock_12hour)),
    ('S', der!(second)),
    ('s', der!(unix_seconds)),
    ('T', der!(clock_secs)),
    ('t', lit!("\t")),
    ('U', der!(week_sun)),
    ('u', der!(weekday_mon)),
    ('V', der!(week_iso)),
    ('v', der!(vms_date)),
    ('W', der!(week_mon)),
    ('w', der!(weekday_sun)),
    // The C locale's national time and date representations.
    ('X', der!(clock_secs)),
    ('x', der!(american_date)),
    ('Y', der!(year)),
    ('y', der!(year2)),
    ('Z', der!(zone_name)),
    ('z', der!(zone_offset)),
    ('%', lit!("%")),
];

/// Padding characters for numeric items.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Pad {
    /// No padding.
    None,
    /// Zero (`0`) padding.
    Zero,
    /// Space padding.
    Space,
}

fn write_num(w: &mut String, v: i64, width: usize, pad: Pad) {
    // `fmt::Write` for `String` never fails.
    let _ = match pad {
        Pad::None => write!(w, "{}", v),
        Pad::Zero => write!(w, "{:01$}", v, width),
        Pad::Space => write!(w, "{:1$}", v, width),
    };
}

/// Writes a full year, with an explicit sign outside of 0..=9999 as per ISO 8601.
fn write_year(w: &mut String, year: i64) {
    if (0..10_000).contains(&year) {
        write_num(w, year, 4, Pad::Zero);
    } else {
        let _ = write!(w, "{:+05}", year);
    }
}

/// %A
pub(crate) fn weekday_full(w: &mut String, ts: &Timestamp) {
    w.push_str(LONG_WEEKDAYS[ts.date().weekday().num_days_from_sunday() as usize]);
}

/// %a
pub(crate) fn weekday_abbrev(w: &mut String, ts: &Timestamp) {
    w.push_str(SHORT_WEEKDAYS[ts.date().weekday().num_days_from_sunday() as usize]);
}

/// %B
pub(crate) fn month_full(w: &mut String, ts: &Timestamp) {
    w.push_str(LONG_MONTHS[ts.date().month0() as usize]);
}

/// %b, %h
pub(crate) fn month_abbrev(w: &mut String, ts: &Timestamp) {
    w.push_str(SHORT_MONTHS[ts.date().month0() as usize]);
}

/// %C
///
/// This is floor division, so 100 BCE (year -99) is century `-1`.
pub(crate) fn century(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().year()).div_euclid(100), 2, Pad::Zero);
}

/// %c
pub(crate) fn date_and_time(w: &mut String, ts: &Timestamp) {
    weekday_abbrev(w, ts);
    w.push(' ');
    month_abbrev(w, ts);
    w.push(' ');
    day_space(w, ts);
    w.push(' ');
    clock_secs(w, ts);
    w.push(' ');
    year(w, ts);
}

/// %D, %x
pub(crate) fn american_date(w: &mut String, ts: &Timestamp) {
    month(w, ts);
    w.push('/');
    day_zero(w, ts);
    w.push('/');
    year2(w, ts);
}

/// %d
pub(crate) fn day_zero(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().day()), 2, Pad::Zero);
}

/// %e
pub(crate) fn day_space(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().day()), 2, Pad::Space);
}

/// %F
pub(crate) fn iso_date(w: &mut String, ts: &Timestamp) {
    year(w, ts);
    w.push('-');
    month(w, ts);
    w.push('-');
    day_zero(w, ts);
}

/// %G
pub(crate) fn iso_week_year(w: &mut String, ts: &Timestamp) {
    write_year(w, i64::from(ts.date().iso_week().year()));
}

/// %g
pub(crate) fn iso_week_year2(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().iso_week().year()).rem_euclid(100), 2, Pad::Zero);
}

/// %H
pub(crate) fn hour24_zero(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.time().hour()), 2, Pad::Zero);
}

/// %k
pub(crate) fn hour24_space(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.time().hour()), 2, Pad::Space);
}

/// %I
pub(crate) fn hour12_zero(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.time().hour12().1), 2, Pad::Zero);
}

/// %l
pub(crate) fn hour12_space(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.time().hour12().1), 2, Pad::Space);
}

/// %j
pub(crate) fn day_of_year(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().ordinal()), 3, Pad::Zero);
}

/// %M
pub(crate) fn minute(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.time().minute()), 2, Pad::Zero);
}

/// %m
pub(crate) fn month(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().month()), 2, Pad::Zero);
}

/// %P
pub(crate) fn ampm_lower(w: &mut String, ts: &Timestamp) {
    w.push_str(if ts.time().hour12().0 { "pm" } else { "am" });
}

/// %p
pub(crate) fn ampm_upper(w: &mut String, ts: &Timestamp) {
    w.push_str(if ts.time().hour12().0 { "PM" } else { "AM" });
}

/// %R
pub(crate) fn clock_nosecs(w: &mut String, ts: &Timestamp) {
    hour24_zero(w, ts);
    w.push(':');
    minute(w, ts);
}

/// %r
pub(crate) fn clock_12hour(w: &mut String, ts: &Timestamp) {
    hour12_zero(w, ts);
    w.push(':');
    minute(w, ts);
    w.push(':');
    second(w, ts);
    w.push(' ');
    ampm_upper(w, ts);
}

/// %S
///
/// A leap second is written as `60`.
pub(crate) fn second(w: &mut String, ts: &Timestamp) {
    let t = ts.time();
    write_num(w, i64::from(t.second() + t.nanosecond() / 1_000_000_000), 2, Pad::Zero);
}

/// %s
pub(crate) fn unix_seconds(w: &mut String, ts: &Timestamp) {
    write_num(w, ts.unix_seconds(), 1, Pad::None);
}

/// %T, %X
pub(crate) fn clock_secs(w: &mut String, ts: &Timestamp) {
    hour24_zero(w, ts);
    w.push(':');
    minute(w, ts);
    w.push(':');
    second(w, ts);
}

/// %U
///
/// Week 1 starts with the first Sunday of the year, days before it are in week 0.
pub(crate) fn week_sun(w: &mut String, ts: &Timestamp) {
    let d = ts.date();
    let week = (d.ordinal0() + 7 - d.weekday().num_days_from_sunday()) / 7;
    write_num(w, i64::from(week), 2, Pad::Zero);
}

/// %W
///
/// Same as `%U` with weeks starting on Monday.
pub(crate) fn week_mon(w: &mut String, ts: &Timestamp) {
    let d = ts.date();
    let week = (d.ordinal0() + 7 - d.weekday().num_days_from_monday()) / 7;
    write_num(w, i64::from(week), 2, Pad::Zero);
}

/// %V
pub(crate) fn week_iso(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().iso_week().week()), 2, Pad::Zero);
}

/// %u
pub(crate) fn weekday_mon(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().weekday().number_from_monday()), 1, Pad::None);
}

/// %w
pub(crate) fn weekday_sun(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().weekday().num_days_from_sunday()), 1, Pad::None);
}

/// %v
pub(crate) fn vms_date(w: &mut String, ts: &Timestamp) {
    day_space(w, ts);
    w.push('-');
    month_abbrev(w, ts);
    w.push('-');
    year(w, ts);
}

/// %Y
pub(crate) fn year(w: &mut String, ts: &Timestamp) {
    write_year(w, i64::from(ts.date().year()));
}

/// %y
pub(crate) fn year2(w: &mut String, ts: &Timestamp) {
    write_num(w, i64::from(ts.date().year()).rem_euclid(100), 2, Pad::Zero);
}

/// %Z
pub(crate) fn zone_name(w: &mut String, ts: &Timestamp) {
    w.push_str(ts.zone_name());
}

/// %z
pub(crate) fn zone_offset(w: &mut String, ts: &Timestamp) {
    let off = ts.offset().local_minus_utc();
    let (sign, off) = if off < 0 { ('-', -off) } else { ('+', off) };
    w.push(sign);
    write_num(w, i64::from(off / 3600), 2, Pad::Zero);
    write_num(w, i64::from(off / 60 % 60), 2, Pad::Zero);
}

/// Milliseconds of the second, zero-padded to 3 digits.
pub(crate) fn milliseconds(w: &mut String, ts: &Timestamp) {
    let nano = ts.time().nanosecond() % 1_000_000_000;
    write_num(w, i64::from(nano / 1_000_000), 3, Pad::Zero);
}

/// Microseconds of the second, zero-padded to 6 digits.
pub(crate) fn microseconds(w: &mut String, ts: &Timestamp) {
    let nano = ts.time().nanosecond() % 1_000_000_000;
    write_num(w, i64::from(nano / 1_000), 6, Pad::Zero);
}
