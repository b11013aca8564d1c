/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;

/// Opaque holder for an enum value this version of the model does not know about.
///
/// Only the generated `From<&str>` conversions create these, and they only do so for values
/// outside the known set. A known value can therefore never end up wrapped in `Unknown`, and
/// matching on the known variants stays exhaustive for everything the model documents.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnknownVariantValue(String);

impl UnknownVariantValue {
    #[doc(hidden)]
    pub fn new(enum_name: &'static str, value: &str) -> Self {
        tracing::trace!(enum_name, value, "unrecognized enum value, keeping the raw string");
        UnknownVariantValue(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
