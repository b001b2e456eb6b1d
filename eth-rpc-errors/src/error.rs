// Copyright 2020-2024 Trust Computing GmbH.
// This file is part of Litentry.
//
// Litentry is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Litentry is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Litentry.  If not, see <https://www.gnu.org/licenses/>.

use std::borrow::Cow;

/// Which part of the input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The outer argument is not a record where one is required.
    Shape,
    /// `code` has the wrong type or lies outside the allowed range.
    Code,
    /// `message` is not a string or is empty.
    Message,
}

/// The only error surfaced by this crate. Raised when an error object can not be built
/// from the given input, so a malformed error object never exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidInputError {
    violation: Violation,
    message: Cow<'static, str>,
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;

impl InvalidInputError {
    pub(crate) const fn new(violation: Violation, message: &'static str) -> Self {
        Self { violation, message: Cow::Borrowed(message) }
    }

    pub fn violation(&self) -> Violation {
        self.violation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub(crate) const CODE_NOT_INTEGER: InvalidInputError =
    InvalidInputError::new(Violation::Code, "\"code\" must be an integer.");

pub(crate) const PROVIDER_CODE_OUT_OF_RANGE: InvalidInputError =
    InvalidInputError::new(Violation::Code, "\"code\" must be an integer such that: 1000 <= code <= 4999");

pub(crate) const SERVER_CODE_OUT_OF_RANGE: InvalidInputError =
    InvalidInputError::new(Violation::Code, "\"code\" must be an integer such that: -32099 <= code <= -32000");

pub(crate) const MESSAGE_EMPTY: InvalidInputError =
    InvalidInputError::new(Violation::Message, "\"message\" must be a non-empty string.");

pub(crate) const MESSAGE_NOT_STRING: InvalidInputError =
    InvalidInputError::new(Violation::Message, "Must specify string message.");

pub(crate) const CUSTOM_MESSAGE_INVALID: InvalidInputError =
    InvalidInputError::new(Violation::Message, "\"message\" must be a nonempty string");

pub(crate) const SERVER_ARG_NOT_RECORD: InvalidInputError =
    InvalidInputError::new(Violation::Shape, "Ethereum RPC Server errors must provide single object argument.");

pub(crate) const CUSTOM_ARG_NOT_RECORD: InvalidInputError =
    InvalidInputError::new(Violation::Shape, "Ethereum Provider custom errors must provide single object argument.");

pub(crate) const ERROR_OBJECT_NOT_RECORD: InvalidInputError =
    InvalidInputError::new(Violation::Shape, "Error objects must be JSON objects.");
