// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2026 Vallés Puig, Ramon

//! Broken-down calendar time (`struct tm`).
//!
//! [`Tm`] is a passive record laid out exactly like the C standard library
//! `struct tm`. The documented field ranges are not enforced: any value can
//! be stored and is read back unchanged. Only the `chrono` conversions look
//! at the fields, and they report [`SuResult::OutOfRange`] instead of
//! normalizing.

use crate::result::{SuOutcome, SuResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::os::raw::c_int;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calendar time broken down into its components, C layout.
///
/// `Default` yields the all-zero value.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tm {
    /// Seconds after the minute, `[0, 60]` (60 is a leap second).
    pub tm_sec: c_int,
    /// Minutes after the hour, `[0, 59]`.
    pub tm_min: c_int,
    /// Hours since midnight, `[0, 23]`.
    pub tm_hour: c_int,
    /// Day of the month, `[1, 31]`.
    pub tm_mday: c_int,
    /// Months since January, `[0, 11]`.
    pub tm_mon: c_int,
    /// Years since 1900.
    pub tm_year: c_int,
    /// Days since Sunday, `[0, 6]`.
    pub tm_wday: c_int,
    /// Days since January 1, `[0, 365]`.
    pub tm_yday: c_int,
    /// Daylight saving time flag: positive in effect, zero not in effect,
    /// negative unknown.
    pub tm_isdst: c_int,
}

/// Meaning of [`Tm::tm_isdst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DstFlag {
    /// Positive flag.
    InEffect,
    /// Zero flag.
    NotInEffect,
    /// Negative flag.
    Unknown,
}

const YEAR_BASE: c_int = 1900;

impl Tm {
    /// The all-zero value, same as `Tm::default()`.
    pub const fn zeroed() -> Self {
        Self {
            tm_sec: 0,
            tm_min: 0,
            tm_hour: 0,
            tm_mday: 0,
            tm_mon: 0,
            tm_year: 0,
            tm_wday: 0,
            tm_yday: 0,
            tm_isdst: 0,
        }
    }

    /// Interprets the sign of `tm_isdst`.
    #[inline]
    pub const fn dst(&self) -> DstFlag {
        if self.tm_isdst > 0 {
            DstFlag::InEffect
        } else if self.tm_isdst == 0 {
            DstFlag::NotInEffect
        } else {
            DstFlag::Unknown
        }
    }

    /// Writes `1`, `0` or `-1` into `tm_isdst`.
    #[inline]
    pub fn set_dst(&mut self, flag: DstFlag) {
        self.tm_isdst = match flag {
            DstFlag::InEffect => 1,
            DstFlag::NotInEffect => 0,
            DstFlag::Unknown => -1,
        };
    }

    /// Gregorian year, `tm_year + 1900`.
    #[inline]
    pub const fn full_year(&self) -> i64 {
        self.tm_year as i64 + YEAR_BASE as i64
    }

    /// Breaks a Unix timestamp down in UTC, like `gmtime`.
    pub fn from_unix_timestamp(seconds: i64) -> SuOutcome<Self> {
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(Self::from)
            .ok_or(SuResult::OutOfRange)
    }

    /// Reassembles the date and time fields into a `NaiveDateTime`.
    ///
    /// `tm_wday`, `tm_yday` and `tm_isdst` are ignored. Fields outside
    /// their documented range are rejected, not carried into the next unit.
    /// `tm_sec == 60` maps to chrono's leap-second representation.
    pub fn to_naive_datetime(&self) -> SuOutcome<NaiveDateTime> {
        let year = i32::try_from(self.full_year()).map_err(|_| SuResult::OutOfRange)?;
        let date = NaiveDate::from_ymd_opt(year, field(self.tm_mon)? + 1, field(self.tm_mday)?)
            .ok_or(SuResult::OutOfRange)?;
        let (hour, minute, second) = (
            field(self.tm_hour)?,
            field(self.tm_min)?,
            field(self.tm_sec)?,
        );
        let time = if second == 60 {
            date.and_hms_milli_opt(hour, minute, 59, 1_000)
        } else {
            date.and_hms_opt(hour, minute, second)
        };
        time.ok_or(SuResult::OutOfRange)
    }

    /// Seconds since the Unix epoch, reading the fields as UTC like `timegm`.
    ///
    /// A leap second yields the same timestamp as the second before it.
    pub fn to_unix_timestamp(&self) -> SuOutcome<i64> {
        Ok(self.to_naive_datetime()?.and_utc().timestamp())
    }
}

fn field(value: c_int) -> SuOutcome<u32> {
    u32::try_from(value).map_err(|_| SuResult::OutOfRange)
}

impl From<NaiveDateTime> for Tm {
    /// The daylight saving flag of a naive date-time is unknown (`-1`).
    fn from(dt: NaiveDateTime) -> Self {
        let leap = dt.nanosecond() >= 1_000_000_000;
        Self {
            tm_sec: dt.second() as c_int + c_int::from(leap),
            tm_min: dt.minute() as c_int,
            tm_hour: dt.hour() as c_int,
            tm_mday: dt.day() as c_int,
            tm_mon: dt.month0() as c_int,
            tm_year: dt.year() - YEAR_BASE,
            tm_wday: dt.weekday().num_days_from_sunday() as c_int,
            tm_yday: dt.ordinal0() as c_int,
            tm_isdst: -1,
        }
    }
}

impl From<DateTime<Utc>> for Tm {
    /// UTC never observes daylight saving time, so `tm_isdst` is `0`.
    fn from(dt: DateTime<Utc>) -> Self {
        let mut tm = Self::from(dt.naive_utc());
        tm.set_dst(DstFlag::NotInEffect);
        tm
    }
}

impl TryFrom<Tm> for NaiveDateTime {
    type Error = SuResult;

    fn try_from(tm: Tm) -> Result<Self, Self::Error> {
        tm.to_naive_datetime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn default_is_all_zero() {
        let tm = Tm::default();
        assert_eq!(tm, Tm::zeroed());
        assert_eq!(
            [
                tm.tm_sec, tm.tm_min, tm.tm_hour, tm.tm_mday, tm.tm_mon, tm.tm_year, tm.tm_wday,
                tm.tm_yday, tm.tm_isdst
            ],
            [0; 9]
        );
    }

    #[test]
    fn c_layout() {
        assert_eq!(size_of::<Tm>(), 9 * size_of::<c_int>());
        assert_eq!(align_of::<Tm>(), align_of::<c_int>());
        let step = size_of::<c_int>();
        assert_eq!(offset_of!(Tm, tm_sec), 0);
        assert_eq!(offset_of!(Tm, tm_hour), 2 * step);
        assert_eq!(offset_of!(Tm, tm_year), 5 * step);
        assert_eq!(offset_of!(Tm, tm_isdst), 8 * step);
    }

    #[test]
    fn out_of_range_fields_are_stored_verbatim() {
        let tm = Tm {
            tm_sec: 75,
            tm_min: -4,
            tm_hour: 99,
            tm_mday: 0,
            tm_mon: 12,
            tm_year: -5_000,
            tm_wday: 9,
            tm_yday: 400,
            tm_isdst: 7,
        };
        let copy = tm;
        assert_eq!(copy.tm_sec, 75);
        assert_eq!(copy.tm_min, -4);
        assert_eq!(copy.tm_hour, 99);
        assert_eq!(copy.tm_mon, 12);
        assert_eq!(copy.tm_yday, 400);
        assert_eq!(copy.tm_isdst, 7);
        assert_eq!(tm.to_naive_datetime(), Err(SuResult::OutOfRange));
    }

    #[test]
    fn dst_flag_is_tri_state() {
        let mut tm = Tm::zeroed();
        assert_eq!(tm.dst(), DstFlag::NotInEffect);
        tm.tm_isdst = 3;
        assert_eq!(tm.dst(), DstFlag::InEffect);
        tm.tm_isdst = -20;
        assert_eq!(tm.dst(), DstFlag::Unknown);
        tm.set_dst(DstFlag::InEffect);
        assert_eq!(tm.tm_isdst, 1);
        tm.set_dst(DstFlag::Unknown);
        assert_eq!(tm.tm_isdst, -1);
    }

    #[test]
    fn full_year_does_not_overflow() {
        let tm = Tm {
            tm_year: c_int::MAX,
            ..Tm::zeroed()
        };
        assert_eq!(tm.full_year(), c_int::MAX as i64 + 1900);
        assert_eq!(tm.to_unix_timestamp(), Err(SuResult::OutOfRange));
    }

    #[test]
    fn unix_epoch_breakdown() {
        let tm = Tm::from_unix_timestamp(0).unwrap();
        assert_eq!(
            tm,
            Tm {
                tm_sec: 0,
                tm_min: 0,
                tm_hour: 0,
                tm_mday: 1,
                tm_mon: 0,
                tm_year: 70,
                tm_wday: 4,
                tm_yday: 0,
                tm_isdst: 0,
            }
        );
        assert_eq!(tm.to_unix_timestamp(), Ok(0));
    }

    #[test]
    fn before_epoch_breakdown() {
        let tm = Tm::from_unix_timestamp(-86_400 + 3_661).unwrap();
        assert_eq!(tm.full_year(), 1969);
        assert_eq!((tm.tm_mon, tm.tm_mday), (11, 31));
        assert_eq!((tm.tm_hour, tm.tm_min, tm.tm_sec), (1, 1, 1));
        assert_eq!(tm.tm_wday, 3);
        assert_eq!(tm.tm_yday, 364);
        assert_eq!(tm.to_unix_timestamp(), Ok(-86_400 + 3_661));
    }

    #[test]
    fn naive_datetime_has_unknown_dst() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(18, 30, 5)
            .unwrap();
        let tm = Tm::from(dt);
        assert_eq!(tm.dst(), DstFlag::Unknown);
        assert_eq!(tm.tm_yday, 59);
        assert_eq!(tm.tm_wday, 4);
        assert_eq!(NaiveDateTime::try_from(tm), Ok(dt));
    }

    #[test]
    fn leap_second_maps_to_sixty() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_000)
            .unwrap();
        let tm = Tm::from(leap);
        assert_eq!(tm.tm_sec, 60);
        assert_eq!(tm.to_naive_datetime(), Ok(leap));

        let before = Tm { tm_sec: 59, ..tm };
        assert_eq!(tm.to_unix_timestamp(), before.to_unix_timestamp());
    }

    #[test]
    fn calendar_fields_are_not_normalized() {
        let feb_30 = Tm {
            tm_mday: 30,
            tm_mon: 1,
            tm_year: 124,
            ..Tm::zeroed()
        };
        assert_eq!(feb_30.to_unix_timestamp(), Err(SuResult::OutOfRange));

        let negative_hour = Tm {
            tm_mday: 1,
            tm_hour: -1,
            tm_year: 124,
            ..Tm::zeroed()
        };
        assert_eq!(negative_hour.to_naive_datetime(), Err(SuResult::OutOfRange));
    }

    #[test]
    fn weekday_and_yearday_are_ignored_on_input() {
        let mut tm = Tm::from_unix_timestamp(946_728_000).unwrap();
        assert_eq!(tm.tm_wday, 6);
        tm.tm_wday = 0;
        tm.tm_yday = 200;
        assert_eq!(tm.to_unix_timestamp(), Ok(946_728_000));
    }

    #[test]
    fn unrepresentable_timestamp_is_out_of_range() {
        assert_eq!(Tm::from_unix_timestamp(i64::MAX), Err(SuResult::OutOfRange));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_c_field_names() {
        let tm = Tm::from_unix_timestamp(0).unwrap();
        let json = serde_json::to_string(&tm).unwrap();
        assert!(json.contains("\"tm_year\":70"));
        assert!(json.contains("\"tm_isdst\":0"));
        let back: Tm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tm);
    }
}
