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

//! Canonical messages for every registered code.

use log::trace;
use serde::Serialize;
use std::fmt;

use crate::codes::error_codes::{provider, rpc};
use crate::validation::is_server_error_code;

pub const JSON_RPC_SERVER_ERROR_MESSAGE: &str = "Unspecified server error.";

pub const FALLBACK_ERROR_MESSAGE: &str = "Unspecified error message. This is a bug, please report it.";

/// The document that defines a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorStandard {
    #[serde(rename = "JSON RPC 2.0")]
    JsonRpc2,
    #[serde(rename = "EIP-1474")]
    Eip1474,
    #[serde(rename = "EIP-1193")]
    Eip1193,
}

impl fmt::Display for ErrorStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::JsonRpc2 => "JSON RPC 2.0",
            Self::Eip1474 => "EIP-1474",
            Self::Eip1193 => "EIP-1193",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    pub standard: ErrorStandard,
    pub message: &'static str,
}

const fn info(standard: ErrorStandard, message: &'static str) -> Option<CodeInfo> {
    Some(CodeInfo { standard, message })
}

/// Looks `code` up in the message table. Only registered codes have an entry, the rest of
/// the server error range does not.
pub const fn code_info(code: i32) -> Option<CodeInfo> {
    use ErrorStandard::*;
    match code {
        rpc::PARSE => info(
            JsonRpc2,
            "Invalid JSON was received by the server. An error occurred on the server while parsing the JSON text.",
        ),
        rpc::INVALID_REQUEST => info(JsonRpc2, "The JSON sent is not a valid Request object."),
        rpc::METHOD_NOT_FOUND => info(JsonRpc2, "The method does not exist / is not available."),
        rpc::INVALID_PARAMS => info(JsonRpc2, "Invalid method parameter(s)."),
        rpc::INTERNAL => info(JsonRpc2, "Internal JSON-RPC error."),
        rpc::INVALID_INPUT => info(Eip1474, "Invalid input."),
        rpc::RESOURCE_NOT_FOUND => info(Eip1474, "Resource not found."),
        rpc::RESOURCE_UNAVAILABLE => info(Eip1474, "Resource unavailable."),
        rpc::TRANSACTION_REJECTED => info(Eip1474, "Transaction rejected."),
        rpc::METHOD_NOT_SUPPORTED => info(Eip1474, "Method not supported."),
        rpc::LIMIT_EXCEEDED => info(Eip1474, "Request limit exceeded."),
        provider::USER_REJECTED_REQUEST => info(Eip1193, "User rejected the request."),
        provider::UNAUTHORIZED => {
            info(Eip1193, "The requested account and/or method has not been authorized by the user.")
        },
        provider::UNSUPPORTED_METHOD => info(Eip1193, "The requested method is not supported by this Ethereum provider."),
        provider::DISCONNECTED => info(Eip1193, "The provider is disconnected from all chains."),
        provider::CHAIN_DISCONNECTED => info(Eip1193, "The provider is disconnected from the specified chain."),
        _ => None,
    }
}

pub const fn standard_from_code(code: i32) -> Option<ErrorStandard> {
    match code_info(code) {
        Some(info) => Some(info.standard),
        None => None,
    }
}

/// Returns the canonical message for `code`. Unregistered codes in the server error range
/// share one message, other codes get `fallback` or a generic message.
pub fn message_from_code(code: i32, fallback: Option<&str>) -> String {
    if let Some(info) = code_info(code) {
        return info.message.to_string();
    }
    if is_server_error_code(code) {
        return JSON_RPC_SERVER_ERROR_MESSAGE.to_string();
    }
    trace!("No message registered for code {}", code);
    fallback.unwrap_or(FALLBACK_ERROR_MESSAGE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{ProviderErrorKey, RpcErrorKey};

    #[test]
    fn every_registered_code_has_a_message() {
        for key in RpcErrorKey::ALL {
            assert!(code_info(key.code()).is_some(), "{key} has no message");
        }
        for key in ProviderErrorKey::ALL {
            assert_eq!(standard_from_code(key.code()), Some(ErrorStandard::Eip1193));
        }
    }

    #[test]
    fn registered_codes_win_over_server_range() {
        assert_eq!(message_from_code(-32000, None), "Invalid input.");
        assert_eq!(message_from_code(-32005, Some("ignored")), "Request limit exceeded.");
        assert_eq!(standard_from_code(-32603), Some(ErrorStandard::JsonRpc2));
    }

    #[test]
    fn server_range_resolves_to_shared_message() {
        assert_eq!(message_from_code(-32098, None), JSON_RPC_SERVER_ERROR_MESSAGE);
        assert_eq!(message_from_code(-32099, Some("ignored")), JSON_RPC_SERVER_ERROR_MESSAGE);
        assert_eq!(standard_from_code(-32098), None);
    }

    #[test]
    fn unknown_codes_use_fallback() {
        assert_eq!(message_from_code(4009, Some("foo")), "foo");
        assert_eq!(message_from_code(4009, None), FALLBACK_ERROR_MESSAGE);
        assert_eq!(message_from_code(-32100, None), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn standard_display() {
        assert_eq!(ErrorStandard::JsonRpc2.to_string(), "JSON RPC 2.0");
        assert_eq!(serde_json::to_value(ErrorStandard::Eip1474).unwrap(), "EIP-1474");
    }
}
