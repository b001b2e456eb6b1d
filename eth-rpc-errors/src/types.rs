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

//! Error values: a generic JSON-RPC error and the Ethereum provider error refining it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{
    InvalidInputError, Result, CODE_NOT_INTEGER, ERROR_OBJECT_NOT_RECORD, MESSAGE_EMPTY, PROVIDER_CODE_OUT_OF_RANGE,
};
use crate::validation::{integer_code, is_plain_object, is_valid_code, is_valid_message, is_valid_provider_code};

/// The `{code, message, data?}` shape sent in a JSON-RPC 2.0 error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedJsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_data")]
    pub data: Option<Arc<Value>>,
}

/// A `data` key that is present, `null` included, reads as `Some`. Only a missing key is `None`.
fn present_data<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Arc<Value>>, D::Error> {
    Value::deserialize(deserializer).map(|data| Some(Arc::new(data)))
}

/// Read access shared by both error value types.
pub trait RpcErrorObject {
    fn code(&self) -> i32;

    fn message(&self) -> &str;

    fn data(&self) -> Option<&Value>;

    fn to_serialized(&self) -> SerializedJsonRpcError;
}

/// JSON-RPC error with an integer code and a non-empty message.
///
/// `data` is kept behind an `Arc`: cloning the error shares the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct JsonRpcError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Arc<Value>>,
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>, data: Option<Value>) -> Result<Self> {
        Self::with_shared_data(code, message, data.map(Arc::new))
    }

    /// Same as [`JsonRpcError::new`] but takes an already shared payload.
    pub fn with_shared_data(code: i32, message: impl Into<String>, data: Option<Arc<Value>>) -> Result<Self> {
        let message = message.into();
        if message.is_empty() {
            return Err(MESSAGE_EMPTY);
        }
        Ok(Self { code, message, data })
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_deref()
    }

    pub fn shared_data(&self) -> Option<Arc<Value>> {
        self.data.clone()
    }
}

impl RpcErrorObject for JsonRpcError {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn data(&self) -> Option<&Value> {
        self.data.as_deref()
    }

    fn to_serialized(&self) -> SerializedJsonRpcError {
        SerializedJsonRpcError { code: self.code, message: self.message.clone(), data: self.data.clone() }
    }
}

/// Reads an error object, applying the same checks as [`JsonRpcError::new`].
impl TryFrom<Value> for JsonRpcError {
    type Error = InvalidInputError;

    fn try_from(value: Value) -> Result<Self> {
        if !is_plain_object(&value) {
            return Err(ERROR_OBJECT_NOT_RECORD);
        }
        if !is_valid_code(&value["code"]) {
            return Err(CODE_NOT_INTEGER);
        }
        if !is_valid_message(&value["message"]) {
            return Err(MESSAGE_EMPTY);
        }
        let Value::Object(mut record) = value else {
            return Err(ERROR_OBJECT_NOT_RECORD);
        };
        let code = record.get("code").and_then(integer_code).ok_or(CODE_NOT_INTEGER)?;
        let Some(Value::String(message)) = record.remove("message") else {
            return Err(MESSAGE_EMPTY);
        };
        Self::new(code, message, record.remove("data"))
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_serialized(f, &self.to_serialized())
    }
}

impl std::error::Error for JsonRpcError {}

/// Provider error, its code is always within `1000..=4999`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "JsonRpcError")]
pub struct EthereumProviderError(JsonRpcError);

impl EthereumProviderError {
    pub fn new(code: i32, message: impl Into<String>, data: Option<Value>) -> Result<Self> {
        JsonRpcError::new(code, message, data)?.try_into()
    }

    pub fn code(&self) -> i32 {
        self.0.code
    }

    pub fn message(&self) -> &str {
        &self.0.message
    }

    pub fn data(&self) -> Option<&Value> {
        self.0.data()
    }

    pub fn as_json_rpc_error(&self) -> &JsonRpcError {
        &self.0
    }
}

impl RpcErrorObject for EthereumProviderError {
    fn code(&self) -> i32 {
        self.0.code
    }

    fn message(&self) -> &str {
        &self.0.message
    }

    fn data(&self) -> Option<&Value> {
        self.0.data()
    }

    fn to_serialized(&self) -> SerializedJsonRpcError {
        self.0.to_serialized()
    }
}

impl TryFrom<JsonRpcError> for EthereumProviderError {
    type Error = InvalidInputError;

    fn try_from(error: JsonRpcError) -> Result<Self> {
        if !is_valid_provider_code(&error.code.into()) {
            return Err(PROVIDER_CODE_OUT_OF_RANGE);
        }
        Ok(Self(error))
    }
}

impl From<EthereumProviderError> for JsonRpcError {
    fn from(error: EthereumProviderError) -> Self {
        error.0
    }
}

impl Serialize for EthereumProviderError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EthereumProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for EthereumProviderError {}

fn write_serialized(f: &mut fmt::Formatter<'_>, serialized: &SerializedJsonRpcError) -> fmt::Result {
    let text = serde_json::to_string_pretty(serialized).map_err(|_| fmt::Error)?;
    f.write_str(&text)
}
