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

//! Error code registries for standard JSON-RPC 2.0 errors and Ethereum provider errors.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Raw codes, for callers that need the number without constructing an error.
pub mod error_codes {
    /// JSON-RPC 2.0 codes (https://www.jsonrpc.org/specification#error_object) and EIP-1474 codes.
    pub mod rpc {
        pub const INVALID_INPUT: i32 = -32000;
        pub const RESOURCE_NOT_FOUND: i32 = -32001;
        pub const RESOURCE_UNAVAILABLE: i32 = -32002;
        pub const TRANSACTION_REJECTED: i32 = -32003;
        pub const METHOD_NOT_SUPPORTED: i32 = -32004;
        pub const LIMIT_EXCEEDED: i32 = -32005;
        pub const PARSE: i32 = -32700;
        pub const INVALID_REQUEST: i32 = -32600;
        pub const METHOD_NOT_FOUND: i32 = -32601;
        pub const INVALID_PARAMS: i32 = -32602;
        pub const INTERNAL: i32 = -32603;
    }

    /// EIP-1193 provider codes.
    pub mod provider {
        pub const USER_REJECTED_REQUEST: i32 = 4001;
        pub const UNAUTHORIZED: i32 = 4100;
        pub const UNSUPPORTED_METHOD: i32 = 4200;
        pub const DISCONNECTED: i32 = 4900;
        pub const CHAIN_DISCONNECTED: i32 = 4901;
    }
}

/// Codes reserved for implementation defined server errors.
pub const SERVER_ERROR_CODE_RANGE: RangeInclusive<i32> = -32099..=-32000;

/// Codes an `EthereumProviderError` may carry.
pub const PROVIDER_ERROR_CODE_RANGE: RangeInclusive<i32> = 1000..=4999;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Unknown error key: {0}")]
pub struct UnknownKey(pub String);

/// Keys of the generic JSON-RPC namespace that map to a fixed code.
/// `server` is not listed here as it takes its code from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcErrorKey {
    InvalidInput,
    ResourceNotFound,
    ResourceUnavailable,
    TransactionRejected,
    MethodNotSupported,
    LimitExceeded,
    Parse,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    Internal,
}

impl RpcErrorKey {
    pub const ALL: [RpcErrorKey; 11] = [
        Self::InvalidInput,
        Self::ResourceNotFound,
        Self::ResourceUnavailable,
        Self::TransactionRejected,
        Self::MethodNotSupported,
        Self::LimitExceeded,
        Self::Parse,
        Self::InvalidRequest,
        Self::MethodNotFound,
        Self::InvalidParams,
        Self::Internal,
    ];

    pub const fn code(&self) -> i32 {
        use error_codes::rpc::*;
        match self {
            Self::InvalidInput => INVALID_INPUT,
            Self::ResourceNotFound => RESOURCE_NOT_FOUND,
            Self::ResourceUnavailable => RESOURCE_UNAVAILABLE,
            Self::TransactionRejected => TRANSACTION_REJECTED,
            Self::MethodNotSupported => METHOD_NOT_SUPPORTED,
            Self::LimitExceeded => LIMIT_EXCEEDED,
            Self::Parse => PARSE,
            Self::InvalidRequest => INVALID_REQUEST,
            Self::MethodNotFound => METHOD_NOT_FOUND,
            Self::InvalidParams => INVALID_PARAMS,
            Self::Internal => INTERNAL,
        }
    }

    /// The camelCase key used by other implementations of this registry.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalidInput",
            Self::ResourceNotFound => "resourceNotFound",
            Self::ResourceUnavailable => "resourceUnavailable",
            Self::TransactionRejected => "transactionRejected",
            Self::MethodNotSupported => "methodNotSupported",
            Self::LimitExceeded => "limitExceeded",
            Self::Parse => "parse",
            Self::InvalidRequest => "invalidRequest",
            Self::MethodNotFound => "methodNotFound",
            Self::InvalidParams => "invalidParams",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for RpcErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RpcErrorKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|key| key.name() == s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Keys of the Ethereum provider namespace that map to a fixed code.
/// `custom` is not listed here as it takes its code from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKey {
    UserRejectedRequest,
    Unauthorized,
    UnsupportedMethod,
    Disconnected,
    ChainDisconnected,
}

impl ProviderErrorKey {
    pub const ALL: [ProviderErrorKey; 5] = [
        Self::UserRejectedRequest,
        Self::Unauthorized,
        Self::UnsupportedMethod,
        Self::Disconnected,
        Self::ChainDisconnected,
    ];

    pub const fn code(&self) -> i32 {
        use error_codes::provider::*;
        match self {
            Self::UserRejectedRequest => USER_REJECTED_REQUEST,
            Self::Unauthorized => UNAUTHORIZED,
            Self::UnsupportedMethod => UNSUPPORTED_METHOD,
            Self::Disconnected => DISCONNECTED,
            Self::ChainDisconnected => CHAIN_DISCONNECTED,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::UserRejectedRequest => "userRejectedRequest",
            Self::Unauthorized => "unauthorized",
            Self::UnsupportedMethod => "unsupportedMethod",
            Self::Disconnected => "disconnected",
            Self::ChainDisconnected => "chainDisconnected",
        }
    }
}

impl fmt::Display for ProviderErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderErrorKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|key| key.name() == s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_codes_match_published_values() {
        assert_eq!(RpcErrorKey::Parse.code(), -32700);
        assert_eq!(RpcErrorKey::InvalidRequest.code(), -32600);
        assert_eq!(RpcErrorKey::MethodNotFound.code(), -32601);
        assert_eq!(RpcErrorKey::InvalidParams.code(), -32602);
        assert_eq!(RpcErrorKey::Internal.code(), -32603);
        assert_eq!(RpcErrorKey::InvalidInput.code(), -32000);
        assert_eq!(RpcErrorKey::LimitExceeded.code(), -32005);
    }

    #[test]
    fn provider_codes_are_in_provider_range() {
        for key in ProviderErrorKey::ALL {
            assert!(PROVIDER_ERROR_CODE_RANGE.contains(&key.code()), "{key} out of range");
        }
        assert_eq!(ProviderErrorKey::UserRejectedRequest.code(), 4001);
        assert_eq!(ProviderErrorKey::ChainDisconnected.code(), 4901);
    }

    #[test]
    fn registries_are_disjoint() {
        for rpc in RpcErrorKey::ALL {
            assert!(ProviderErrorKey::ALL.iter().all(|provider| provider.code() != rpc.code()));
        }
    }

    #[test]
    fn keys_parse_from_their_names() {
        for key in RpcErrorKey::ALL {
            assert_eq!(key.name().parse::<RpcErrorKey>(), Ok(key));
        }
        for key in ProviderErrorKey::ALL {
            assert_eq!(key.to_string().parse::<ProviderErrorKey>(), Ok(key));
        }
        assert_eq!("server".parse::<RpcErrorKey>(), Err(UnknownKey("server".into())));
        assert!("custom".parse::<ProviderErrorKey>().is_err());
    }
}
