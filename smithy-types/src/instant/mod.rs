/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamps as they appear in model shapes.

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

mod de;
mod format;
mod ser;

pub use format::DateParseError;

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;
const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// A point in time, stored as seconds since the Unix epoch plus a sub-second part.
///
/// `subsecond_nanos` is always in `0..1_000_000_000`, also for pre-epoch instants, so two
/// instants describing the same point in time are always equal and hash the same.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` is clamped into `[0, 1)`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64) as u32;
        Instant::from_secs_and_nanos(epoch_seconds, nanos.min(NANOS_PER_SECOND - 1))
    }

    /// Creates an instant from whole seconds and a sub-second part.
    ///
    /// Nanoseconds beyond one second are carried into `seconds`, which saturates at the `i64`
    /// bounds.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add((subsecond_nanos / NANOS_PER_SECOND) as i64),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Creates an instant from fractional epoch seconds.
    ///
    /// An `f64` can't hold a current timestamp to the nanosecond, so the fraction is rounded to
    /// the nearest microsecond.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let micros = ((epoch_seconds - seconds) * MICROS_PER_SECOND).round() as u32;
        Instant::from_secs_and_nanos(seconds as i64, micros * 1_000)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant {
                        seconds: seconds - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    pub fn from_str(s: &str, format: Format) -> Result<Self, DateParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub(crate) fn to_chrono_internal(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant.
    ///
    /// Instants outside of the range chrono can represent fall back to epoch seconds.
    pub fn fmt(&self, format: Format) -> String {
        match (format, self.to_chrono_internal()) {
            (Format::DateTime, Some(date_time)) => {
                let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                // AutoSi pads to milli/micro/nano boundaries; trim those zeroes.
                if self.has_nanos() {
                    let mut trimmed = rfc3339
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .to_owned();
                    trimmed.push('Z');
                    trimmed
                } else {
                    rfc3339
                }
            }
            _ => format::epoch_seconds::format(self),
        }
    }
}

#[cfg(feature = "chrono-conversions")]
impl Instant {
    /// Converts to a chrono `DateTime`, if the instant is within chrono's range.
    pub fn to_chrono(&self) -> Option<DateTime<Utc>> {
        self.to_chrono_internal()
    }
}

#[cfg(feature = "chrono-conversions")]
impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Instant::from_secs_and_nanos(value.timestamp(), value.timestamp_subsec_nanos())
    }
}

impl From<SystemTime> for Instant {
    fn from(value: SystemTime) -> Self {
        Instant::from_system_time(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC 3339 date-time, for example `2019-12-16T23:48:18Z`.
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, for example `1576540098.52`.
    EpochSeconds,
}
