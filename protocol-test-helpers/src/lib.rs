/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("could not serialize the shape: {message}")]
    SerializationFailed { message: String },

    #[error("expected body to be valid JSON: {message}\n{found}")]
    InvalidBodyFormat { message: String, found: String },

    #[error("body did not match.\n{hint}\n=== expected ===\n{expected}\n=== found ===\n{found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },

    #[error("expected the body to be a JSON object, found `{found}`")]
    NotAnObject { found: String },

    #[error("forbidden member present: `{expected}`")]
    ForbiddenMember { expected: String },

    #[error("required member missing: `{expected}`")]
    RequiredMember { expected: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed:\n{}", e);
    }
}

fn to_body<T: Serialize>(shape: &T) -> Result<Value, ProtocolTestFailure> {
    serde_json::to_value(shape).map_err(|e| ProtocolTestFailure::SerializationFailed {
        message: e.to_string(),
    })
}

fn parse_expected(expected: &str) -> Result<Value, ProtocolTestFailure> {
    serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        message: e.to_string(),
        found: expected.to_owned(),
    })
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Serializes `shape` and compares it with the `expected` JSON document.
///
/// Member order and whitespace are ignored.
pub fn validate_json_body<T: Serialize>(
    shape: &T,
    expected: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual = to_body(shape)?;
    let expected = parse_expected(expected)?;
    assert_json_eq_no_panic(&actual, &expected).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: pretty(&expected),
            found: pretty(&actual),
            hint,
        }
    })
}

fn member_names<T: Serialize>(shape: &T) -> Result<Vec<String>, ProtocolTestFailure> {
    match to_body(shape)? {
        Value::Object(members) => Ok(members.keys().cloned().collect()),
        other => Err(ProtocolTestFailure::NotAnObject {
            found: other.to_string(),
        }),
    }
}

/// Fails when any of `forbid_members` appears as a top level member of the serialized shape.
pub fn forbid_members<T: Serialize>(
    shape: &T,
    forbid_members: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual = member_names(shape)?;
    for member in forbid_members {
        if actual.iter().any(|name| name == member) {
            return Err(ProtocolTestFailure::ForbiddenMember {
                expected: member.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_members<T: Serialize>(
    shape: &T,
    require_members: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual = member_names(shape)?;
    for member in require_members {
        if !actual.iter().any(|name| name == member) {
            return Err(ProtocolTestFailure::RequiredMember {
                expected: member.to_string(),
            });
        }
    }
    Ok(())
}
