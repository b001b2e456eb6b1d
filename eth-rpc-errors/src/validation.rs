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

//! Predicates shared by the error value types and the factory.

use serde_json::Value;

use crate::codes::{PROVIDER_ERROR_CODE_RANGE, SERVER_ERROR_CODE_RANGE};

/// Reads `value` as an integral JSON-RPC code. Integral floats such as `4009.0` are accepted,
/// anything that does not fit an `i32` is not.
pub fn integer_code(value: &Value) -> Option<i32> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(code) = number.as_i64() {
        return i32::try_from(code).ok();
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
        .map(|f| f as i32)
}

pub fn is_valid_code(code: &Value) -> bool {
    integer_code(code).is_some()
}

pub fn is_valid_provider_code(code: &Value) -> bool {
    integer_code(code).is_some_and(|code| PROVIDER_ERROR_CODE_RANGE.contains(&code))
}

pub fn is_valid_message(message: &Value) -> bool {
    matches!(message, Value::String(s) if !s.is_empty())
}

/// A non-null, non-array record. Used on factory arguments, never on `data` payloads.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

pub fn is_server_error_code(code: i32) -> bool {
    SERVER_ERROR_CODE_RANGE.contains(&code)
}
