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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, MESSAGE_NOT_STRING};

/// Argument accepted by every factory function. Either nothing, a bare message, or a record
/// with `message`, `data` and, for `server` and `custom`, `code`.
///
/// An empty message counts as no message in both forms, so `""` and `{"message": ""}` both
/// get the canonical text. In a record, `null`, `false` and `0` are absent too; any other
/// non-string `message` is rejected.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ErrorArg {
    #[default]
    Empty,
    Message(String),
    Record(Map<String, Value>),
    /// Numbers, booleans and arrays. Ignored by the fixed-code constructors.
    Other(Value),
}

/// Typed form of the record argument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl ErrorArg {
    /// Splits the argument into an optional caller message and optional data.
    /// Fails only when a record carries a `message` that is not a string.
    pub(crate) fn into_message_and_data(self) -> Result<(Option<String>, Option<Value>)> {
        match self {
            ErrorArg::Empty | ErrorArg::Other(_) => Ok((None, None)),
            ErrorArg::Message(message) if message.is_empty() => Ok((None, None)),
            ErrorArg::Message(message) => Ok((Some(message), None)),
            ErrorArg::Record(mut record) => {
                let message = match record.remove("message") {
                    None => None,
                    Some(message) if is_falsy(&message) => None,
                    Some(Value::String(message)) => Some(message),
                    Some(_) => return Err(MESSAGE_NOT_STRING),
                };
                Ok((message, record.remove("data")))
            },
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl From<()> for ErrorArg {
    fn from(_: ()) -> Self {
        ErrorArg::Empty
    }
}

impl From<&str> for ErrorArg {
    fn from(message: &str) -> Self {
        ErrorArg::Message(message.to_string())
    }
}

impl From<String> for ErrorArg {
    fn from(message: String) -> Self {
        ErrorArg::Message(message)
    }
}

impl From<Value> for ErrorArg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ErrorArg::Empty,
            Value::String(message) => ErrorArg::Message(message),
            Value::Object(record) => ErrorArg::Record(record),
            other => ErrorArg::Other(other),
        }
    }
}

impl From<ErrorOptions> for ErrorArg {
    fn from(options: ErrorOptions) -> Self {
        let mut record = Map::new();
        if let Some(code) = options.code {
            record.insert("code".into(), code.into());
        }
        if let Some(message) = options.message {
            record.insert("message".into(), message.into());
        }
        if let Some(data) = options.data {
            record.insert("data".into(), data);
        }
        ErrorArg::Record(record)
    }
}

impl<T: Into<ErrorArg>> From<Option<T>> for ErrorArg {
    fn from(arg: Option<T>) -> Self {
        arg.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_shape() {
        assert_eq!(ErrorArg::from(()), ErrorArg::Empty);
        assert_eq!(ErrorArg::from(json!(null)), ErrorArg::Empty);
        assert_eq!(ErrorArg::from(None::<&str>), ErrorArg::Empty);
        assert_eq!(ErrorArg::from("foo"), ErrorArg::Message("foo".into()));
        assert_eq!(ErrorArg::from(json!("foo")), ErrorArg::Message("foo".into()));
        assert_eq!(ErrorArg::from(json!([1])), ErrorArg::Other(json!([1])));
        assert!(matches!(ErrorArg::from(json!({ "message": "foo" })), ErrorArg::Record(_)));
    }

    #[test]
    fn options_become_a_record() {
        let arg = ErrorArg::from(ErrorOptions::new().with_code(-32098).with_data(json!({ "foo": "bar" })));
        assert_eq!(arg, ErrorArg::from(json!({ "code": -32098, "data": { "foo": "bar" } })));
    }

    #[test]
    fn empty_message_is_treated_as_absent() {
        assert_eq!(ErrorArg::from("").into_message_and_data(), Ok((None, None)));
        assert_eq!(ErrorArg::from(json!(42)).into_message_and_data(), Ok((None, None)));
    }

    #[test]
    fn record_message_must_be_a_string() {
        let arg = ErrorArg::from(json!({ "message": null, "data": 1 }));
        assert_eq!(arg.into_message_and_data(), Ok((None, Some(json!(1)))));

        let arg = ErrorArg::from(json!({ "message": 2 }));
        assert_eq!(arg.into_message_and_data(), Err(MESSAGE_NOT_STRING));

        let arg = ErrorArg::from(json!({ "message": ["foo"] }));
        assert_eq!(arg.into_message_and_data(), Err(MESSAGE_NOT_STRING));
    }

    #[test]
    fn empty_record_message_matches_empty_bare_message() {
        let bare = ErrorArg::from("").into_message_and_data();
        for message in [json!(""), json!(false), json!(0)] {
            let arg = ErrorArg::from(json!({ "message": message, "data": 1 }));
            assert_eq!(arg.into_message_and_data(), Ok((None, Some(json!(1)))), "message: {message}");
        }
        assert_eq!(bare, Ok((None, None)));
    }
}
