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

//! Generic JSON-RPC errors.

use log::debug;

use super::ErrorArg;
use crate::codes::RpcErrorKey;
use crate::error::{Result, SERVER_ARG_NOT_RECORD, SERVER_CODE_OUT_OF_RANGE};
use crate::messages::{message_from_code, JSON_RPC_SERVER_ERROR_MESSAGE};
use crate::types::JsonRpcError;
use crate::validation::{integer_code, is_server_error_code, is_valid_code};

/// Builds the error registered under `key`. The code always comes from the registry,
/// the message defaults to the canonical one for that code.
pub fn by_key(key: RpcErrorKey, arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    let (message, data) = arg.into().into_message_and_data()?;
    let code = key.code();
    JsonRpcError::new(code, message.unwrap_or_else(|| message_from_code(code, None)), data)
}

pub fn invalid_input(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::InvalidInput, arg)
}

pub fn resource_not_found(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::ResourceNotFound, arg)
}

pub fn resource_unavailable(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::ResourceUnavailable, arg)
}

pub fn transaction_rejected(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::TransactionRejected, arg)
}

pub fn method_not_supported(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::MethodNotSupported, arg)
}

pub fn limit_exceeded(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::LimitExceeded, arg)
}

pub fn parse(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::Parse, arg)
}

pub fn invalid_request(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::InvalidRequest, arg)
}

pub fn method_not_found(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::MethodNotFound, arg)
}

pub fn invalid_params(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::InvalidParams, arg)
}

pub fn internal(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    by_key(RpcErrorKey::Internal, arg)
}

/// Implementation defined server error. Requires a record whose `code` lies in
/// `-32099..=-32000`, e.g. `json!({ "code": -32050, "data": ... })`.
pub fn server(arg: impl Into<ErrorArg>) -> Result<JsonRpcError> {
    let ErrorArg::Record(record) = arg.into() else {
        debug!("Rejected server error argument: not a record");
        return Err(SERVER_ARG_NOT_RECORD);
    };
    let Some(code) = record
        .get("code")
        .filter(|code| is_valid_code(code))
        .and_then(integer_code)
        .filter(|code| is_server_error_code(*code))
    else {
        debug!("Rejected server error code: {:?}", record.get("code"));
        return Err(SERVER_CODE_OUT_OF_RANGE);
    };
    let (message, data) = ErrorArg::Record(record).into_message_and_data()?;
    JsonRpcError::new(code, message.unwrap_or_else(|| JSON_RPC_SERVER_ERROR_MESSAGE.to_string()), data)
}
