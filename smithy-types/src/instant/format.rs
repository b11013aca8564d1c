/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DateParseError {
    #[error("invalid timestamp: {0}")]
    Invalid(&'static str),
    #[error("failed to parse an integer component of the timestamp")]
    IntParseError,
}

pub(crate) mod date_time {
    use super::DateParseError;
    use crate::Instant;
    use chrono::DateTime;

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T23:48:18+01:00"
    pub(crate) fn parse(s: &str) -> Result<Instant, DateParseError> {
        if !s.is_ascii() {
            return Err(DateParseError::Invalid("not ascii"));
        }
        let parsed = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|_| DateParseError::Invalid("not an RFC 3339 date-time"))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub(crate) mod epoch_seconds {
    use super::DateParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    pub(crate) fn format(instant: &Instant) -> String {
        let nanos = instant.epoch_subsecond_nanos();
        if nanos == 0 {
            return instant.epoch_seconds().to_string();
        }
        // Render as a decimal number: -2 s + 0.5 s is "-1.5".
        let (whole, fraction) = if instant.epoch_seconds() < 0 {
            (instant.epoch_seconds() + 1, NANOS_PER_SECOND - nanos)
        } else {
            (instant.epoch_seconds(), nanos)
        };
        let sign = if whole == 0 && instant.epoch_seconds() < 0 {
            "-"
        } else {
            ""
        };
        let fraction = format!("{:0>9}", fraction);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    /// Ok: "1576540098", "1576540098.52", "-1.5"
    /// Not Ok: "1576540098.", "1576540098.1234567891"
    pub(crate) fn parse(s: &str) -> Result<Instant, DateParseError> {
        let s = s.trim();
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateParseError::IntParseError);
        }
        let whole: i64 = whole.parse().map_err(|_| DateParseError::IntParseError)?;
        let nanos = match fraction {
            None => 0,
            Some(fraction) => parse_fraction(fraction)?,
        };
        Ok(match (negative, nanos) {
            (false, nanos) => Instant::from_secs_and_nanos(whole, nanos),
            (true, 0) => Instant::from_epoch_seconds(-whole),
            (true, nanos) => Instant::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }

    fn parse_fraction(fraction: &str) -> Result<u32, DateParseError> {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateParseError::IntParseError);
        }
        if fraction.len() > 9 {
            return Err(DateParseError::Invalid("too much precision"));
        }
        let digits: u32 = fraction
            .parse()
            .map_err(|_| DateParseError::IntParseError)?;
        Ok(digits * 10_u32.pow(9 - fraction.len() as u32))
    }
}

#[cfg(test)]
mod test {
    use super::{date_time, epoch_seconds, DateParseError};
    use crate::Instant;

    #[test]
    fn epoch_seconds_format() {
        assert_eq!(
            epoch_seconds::format(&Instant::from_epoch_seconds(1576540098)),
            "1576540098"
        );
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(1576540098, 520_000_000)),
            "1576540098.52"
        );
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(-2, 500_000_000)),
            "-1.5"
        );
        assert_eq!(
            epoch_seconds::format(&Instant::from_secs_and_nanos(-1, 750_000_000)),
            "-0.25"
        );
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            epoch_seconds::parse("1576540098.52"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            epoch_seconds::parse("-1.5"),
            Ok(Instant::from_secs_and_nanos(-2, 500_000_000))
        );
        assert_eq!(
            epoch_seconds::parse("1576540098."),
            Err(DateParseError::IntParseError)
        );
        assert_eq!(
            epoch_seconds::parse("1.1234567891"),
            Err(DateParseError::Invalid("too much precision"))
        );
        assert_eq!(epoch_seconds::parse("abc"), Err(DateParseError::IntParseError));
    }

    #[track_caller]
    fn check_roundtrip(instant: Instant) {
        let formatted = epoch_seconds::format(&instant);
        assert_eq!(epoch_seconds::parse(&formatted), Ok(instant), "{}", formatted);
    }

    #[test]
    fn epoch_seconds_roundtrip() {
        for secs in -1000..1000 {
            check_roundtrip(Instant::from_epoch_seconds(secs));
            check_roundtrip(Instant::from_secs_and_nanos(secs, 1));
            check_roundtrip(Instant::from_secs_and_nanos(secs, 999_999_999));
        }
        check_roundtrip(Instant::from_epoch_seconds(9999999999));
    }

    #[test]
    fn date_time_parse() {
        assert_eq!(
            date_time::parse("2019-12-16T23:48:18.52Z"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            date_time::parse("2019-12-17T00:48:18+01:00"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert_eq!(
            date_time::parse("Mon, 16 Dec 2019 23:48:18 GMT"),
            Err(DateParseError::Invalid("not an RFC 3339 date-time"))
        );
    }
}
