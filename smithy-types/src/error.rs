/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while building model shapes.

use thiserror::Error;

/// Returned when an entry is added to a map member that already holds the key.
///
/// The map keeps the value that was inserted first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicated key ({key}) was provided")]
pub struct DuplicateKeyError {
    key: String,
}

impl DuplicateKeyError {
    pub fn new(key: impl Into<String>) -> Self {
        DuplicateKeyError { key: key.into() }
    }

    /// The key that was already present.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Returned by the strict `try_parse` conversion of an enum shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a known value of {enum_name}")]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        UnknownVariantError {
            enum_name,
            value: value.into(),
        }
    }

    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod test {
    use super::{DuplicateKeyError, UnknownVariantError};

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DuplicateKeyError::new("env").to_string(),
            "duplicated key (env) was provided"
        );
        assert_eq!(
            UnknownVariantError::new("LogLevel", "TRACE").to_string(),
            "`TRACE` is not a known value of LogLevel"
        );
    }
}
