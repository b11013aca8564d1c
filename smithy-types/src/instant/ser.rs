/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::Instant;
use serde::ser::SerializeTuple;

/// Human readable formats get an epoch-seconds number, the wire format of JSON protocols.
impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            if self.has_nanos() {
                serializer.serialize_f64(self.epoch_fractional_seconds())
            } else {
                serializer.serialize_i64(self.seconds)
            }
        } else {
            let mut tup_ser = serializer.serialize_tuple(2)?;
            tup_ser.serialize_element(&self.seconds)?;
            tup_ser.serialize_element(&self.subsecond_nanos)?;
            tup_ser.end()
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Test {
        instant: Instant,
    }

    #[test]
    fn whole_seconds_serialize_as_integer() {
        let test = Test {
            instant: Instant::from_epoch_seconds(1576540098),
        };
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"instant":1576540098}"#
        );
    }

    #[test]
    fn fractional_seconds_serialize_as_float() {
        let test = Test {
            instant: Instant::from_secs_and_nanos(1576540098, 500_000_000),
        };
        assert_eq!(
            serde_json::to_string(&test).unwrap(),
            r#"{"instant":1576540098.5}"#
        );
    }
}
