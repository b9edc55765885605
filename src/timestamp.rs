// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! The date and time view handed to every directive.

use core::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

/// A local date and time together with its UTC offset and time zone name.
///
/// This is what a compiled pattern renders. It is usually built from a
/// [`DateTime`] through `From`, which keeps the offset's `Display` output as
/// the zone name (so `Utc` is named `UTC` and a [`FixedOffset`] is named after
/// its `+HH:MM` form).
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_strftime::Timestamp;
///
/// let dt = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
/// let ts = Timestamp::from(&dt);
/// assert_eq!(ts.zone_name(), "UTC");
/// assert_eq!(ts.unix_seconds(), 1257894000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// The local date and time.
    datetime: NaiveDateTime,
    /// The local-to-UTC difference.
    offset: FixedOffset,
    /// The time zone name written by `%Z`.
    zone: String,
}

impl Timestamp {
    /// Makes a new `Timestamp` from a local date and time, its offset and a zone name.
    #[must_use]
    pub fn new(datetime: NaiveDateTime, offset: FixedOffset, zone: impl Into<String>) -> Timestamp {
        Timestamp { datetime, offset, zone: zone.into() }
    }

    /// Makes a new `Timestamp` for a date and time in UTC.
    #[must_use]
    pub fn from_utc(datetime: NaiveDateTime) -> Timestamp {
        Timestamp::from(&Utc.from_utc_datetime(&datetime))
    }

    /// Returns the local date and time.
    #[inline]
    pub fn naive_local(&self) -> &NaiveDateTime {
        &self.datetime
    }

    /// Returns the local date.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// Returns the local time.
    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.datetime.time()
    }

    /// Returns the offset from UTC.
    #[inline]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the time zone name.
    #[inline]
    pub fn zone_name(&self) -> &str {
        &self.zone
    }

    /// Returns the number of non-leap seconds since 1970-01-01 00:00:00 UTC.
    pub fn unix_seconds(&self) -> i64 {
        self.datetime.and_utc().timestamp() - i64::from(self.offset.local_minus_utc())
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Timestamp
where
    Tz::Offset: fmt::Display,
{
    fn from(dt: &DateTime<Tz>) -> Timestamp {
        let offset = dt.offset();
        Timestamp { datetime: dt.naive_local(), offset: offset.fix(), zone: offset.to_string() }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp
where
    Tz::Offset: fmt::Display,
{
    fn from(dt: DateTime<Tz>) -> Timestamp {
        Timestamp::from(&dt)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn test_from_utc_datetime() {
        let dt = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
        let ts = Timestamp::from(&dt);
        assert_eq!(ts.naive_local(), &dt.naive_utc());
        assert_eq!(ts.offset().local_minus_utc(), 0);
        assert_eq!(ts.zone_name(), "UTC");
        assert_eq!(ts, Timestamp::from_utc(dt.naive_utc()));
    }

    #[test]
    fn test_from_fixed_offset_datetime() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let dt = kst.with_ymd_and_hms(2009, 11, 11, 8, 0, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2009, 11, 11).unwrap());
        assert_eq!(ts.zone_name(), "+09:00");
        assert_eq!(ts.unix_seconds(), 1257894000);
    }

    #[test]
    fn test_explicit_zone_name() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let ts = Timestamp::new(local, est, "EST");
        assert_eq!(ts.zone_name(), "EST");
        assert_eq!(ts.unix_seconds(), 5 * 3600);
    }
}
