/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Runtime support shared by generated model crates.
//!
//! Model crates declare their shapes with [`structure!`] and [`string_enum!`]; everything the
//! expansions refer to lives in this crate.

#[macro_use]
mod macros;

pub mod constraint;
pub mod error;
pub mod instant;
pub mod retry;
pub mod shape;
pub mod unknown;

pub use crate::instant::Instant;
