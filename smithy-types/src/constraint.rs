/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client-side checks of the constraints a model attaches to input members.
//!
//! Building a shape never validates it. Callers that want to catch bad input before it reaches
//! the service call [`Validate::validate`] on the built value.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Implemented by shapes that carry constraints.
pub trait Validate {
    /// Returns the first violated constraint, in member declaration order.
    fn validate(&self) -> Result<(), ConstraintViolation>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintViolation {
    #[error("`{path}` is required but was not set")]
    Missing { path: String },

    #[error("`{path}` has length {actual}, expected {}", describe_bounds(.min, .max))]
    Length {
        path: String,
        actual: u64,
        min: Option<u64>,
        max: Option<u64>,
    },

    #[error("`{path}` is {actual}, expected {}", describe_bounds(.min, .max))]
    Range {
        path: String,
        actual: i64,
        min: Option<i64>,
        max: Option<i64>,
    },

    #[error("`{path}` does not match the pattern `{pattern}`")]
    Pattern { path: String, pattern: String },
}

fn describe_bounds<T: fmt::Display>(min: &Option<T>, max: &Option<T>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {} and {}", min, max),
        (Some(min), None) => format!("at least {}", min),
        (None, Some(max)) => format!("at most {}", max),
        (None, None) => "any value".to_owned(),
    }
}

impl ConstraintViolation {
    /// The member path, eg. `tags[1].Key`.
    pub fn path(&self) -> &str {
        match self {
            ConstraintViolation::Missing { path }
            | ConstraintViolation::Length { path, .. }
            | ConstraintViolation::Range { path, .. }
            | ConstraintViolation::Pattern { path, .. } => path,
        }
    }

    /// Prefixes the member path with the path of the containing member.
    pub fn within(mut self, parent: &str) -> Self {
        let path = match &mut self {
            ConstraintViolation::Missing { path }
            | ConstraintViolation::Length { path, .. }
            | ConstraintViolation::Range { path, .. }
            | ConstraintViolation::Pattern { path, .. } => path,
        };
        *path = if path.starts_with('[') {
            format!("{}{}", parent, path)
        } else {
            format!("{}.{}", parent, path)
        };
        self
    }
}

fn reject(violation: ConstraintViolation) -> Result<(), ConstraintViolation> {
    tracing::debug!(path = violation.path(), %violation, "constraint violated");
    Err(violation)
}

/// Anything with a length a `@length` constraint can apply to.
pub trait HasLength {
    fn constraint_len(&self) -> usize;
}

impl HasLength for str {
    fn constraint_len(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn constraint_len(&self) -> usize {
        self.as_str().constraint_len()
    }
}

impl<T> HasLength for [T] {
    fn constraint_len(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn constraint_len(&self) -> usize {
        self.len()
    }
}

impl<V> HasLength for HashMap<String, V> {
    fn constraint_len(&self) -> usize {
        self.len()
    }
}

pub fn required<T>(path: &str, value: &Option<T>) -> Result<(), ConstraintViolation> {
    match value {
        Some(_) => Ok(()),
        None => reject(ConstraintViolation::Missing {
            path: path.to_owned(),
        }),
    }
}

/// Absent values always pass; combine with [`required`] when the member must be set.
pub fn length<T>(
    path: &str,
    value: Option<&T>,
    min: Option<u64>,
    max: Option<u64>,
) -> Result<(), ConstraintViolation>
where
    T: HasLength + ?Sized,
{
    let actual = match value {
        Some(value) => value.constraint_len() as u64,
        None => return Ok(()),
    };
    if min.map_or(false, |min| actual < min) || max.map_or(false, |max| actual > max) {
        return reject(ConstraintViolation::Length {
            path: path.to_owned(),
            actual,
            min,
            max,
        });
    }
    Ok(())
}

pub fn range<T>(
    path: &str,
    value: Option<T>,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<(), ConstraintViolation>
where
    T: Into<i64> + Copy,
{
    let actual = match value {
        Some(value) => value.into(),
        None => return Ok(()),
    };
    if min.map_or(false, |min| actual < min) || max.map_or(false, |max| actual > max) {
        return reject(ConstraintViolation::Range {
            path: path.to_owned(),
            actual,
            min,
            max,
        });
    }
    Ok(())
}

/// `regex` must be anchored; the whole value has to match.
pub fn pattern(path: &str, value: Option<&str>, regex: &Regex) -> Result<(), ConstraintViolation> {
    match value {
        Some(value) if !regex.is_match(value) => reject(ConstraintViolation::Pattern {
            path: path.to_owned(),
            pattern: regex.as_str().to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Validates a nested structure member.
pub fn nested<T: Validate>(path: &str, value: Option<&T>) -> Result<(), ConstraintViolation> {
    match value {
        Some(value) => value.validate().map_err(|violation| violation.within(path)),
        None => Ok(()),
    }
}

/// Validates every element of a list member.
pub fn each<T: Validate>(path: &str, values: Option<&[T]>) -> Result<(), ConstraintViolation> {
    for (index, value) in values.unwrap_or_default().iter().enumerate() {
        value
            .validate()
            .map_err(|violation| violation.within(&format!("{}[{}]", path, index)))?;
    }
    Ok(())
}
