/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of modeled service errors.
//!
//! Retry policies live in the transport; the model only records what kind of failure an
//! error shape describes so that a policy can make its decision.

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout. Never produced by a modeled error,
    /// kept so transports can share the classification.
    TransientError,

    /// The server explicitly told the client to back off.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that should be retried.
    ServerError,

    /// The request itself was at fault.
    ClientError,
}

impl ErrorKind {
    /// Whether a request failing with this kind of error may succeed when sent again unchanged.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorKind::ClientError)
    }
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind`.
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled and the error kind
    /// depends on an HTTP status code), return `None`.
    fn error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}
