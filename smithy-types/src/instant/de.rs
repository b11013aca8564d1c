/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{Format, Instant, NANOS_PER_SECOND};
use serde::de::{Error, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

struct InstantVisitor;

impl<'de> Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or an RFC-3339 date time")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        let seconds = i64::try_from(v).map_err(|_| E::custom("epoch seconds out of range"))?;
        Ok(Instant::from_epoch_seconds(seconds))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if !v.is_finite() {
            return Err(E::custom("epoch seconds must be finite"));
        }
        Ok(Instant::from_f64(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Instant::from_str(v, Format::DateTime)
            .or_else(|_| Instant::from_str(v, Format::EpochSeconds))
            .map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let seconds: i64 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let nanos: u32 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(1, &self))?;
        if nanos >= NANOS_PER_SECOND {
            return Err(A::Error::custom("subsecond nanos must be below one second"));
        }
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(InstantVisitor)
        } else {
            deserializer.deserialize_tuple(2, InstantVisitor)
        }
    }
}

#[cfg(test)]
mod test {
    use super::InstantVisitor;
    use crate::Instant;
    use serde::de::value::{Error as ValueError, SeqDeserializer};
    use serde::de::Visitor;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Test {
        instant: Instant,
    }

    #[test]
    fn integer_epoch_seconds() {
        let test: Test = serde_json::from_str(r#"{"instant":1576540098}"#).unwrap();
        assert_eq!(test.instant, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn fractional_epoch_seconds() {
        let test: Test = serde_json::from_str(r#"{"instant":1576540098.5}"#).unwrap();
        assert_eq!(
            test.instant,
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
        );
    }

    #[test]
    fn fractional_epoch_seconds_keep_their_decimal_value() {
        let test: Test = serde_json::from_str(r#"{"instant":1576540098.52}"#).unwrap();
        assert_eq!(
            test.instant,
            Instant::from_secs_and_nanos(1576540098, 520_000_000)
        );
    }

    #[test]
    fn seconds_and_nanos_pair() {
        let seq = SeqDeserializer::<_, ValueError>::new(vec![1576540098_i64, 5].into_iter());
        assert_eq!(
            InstantVisitor.visit_seq(seq).unwrap(),
            Instant::from_secs_and_nanos(1576540098, 5)
        );
    }

    #[test]
    fn pair_with_nanos_past_one_second_is_rejected() {
        let seq =
            SeqDeserializer::<_, ValueError>::new(vec![i64::MAX, 1_500_000_000].into_iter());
        let err = InstantVisitor.visit_seq(seq).unwrap_err();
        assert!(err.to_string().contains("below one second"), "{}", err);
    }

    #[test]
    fn date_time_string() {
        let test: Test = serde_json::from_str(r#"{"instant":"2019-12-16T23:48:18Z"}"#).unwrap();
        assert_eq!(test.instant, Instant::from_epoch_seconds(1576540098));
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Test>(r#"{"instant":"yesterday"}"#).is_err());
        assert!(serde_json::from_str::<Test>(r#"{"instant":true}"#).is_err());
    }
}
