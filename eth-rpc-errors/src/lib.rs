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

//! Standard JSON-RPC 2.0 and Ethereum provider errors.
//!
//! Every error is built through [`rpc_errors`] or [`provider_errors`], which resolve the
//! registry code and canonical message for a semantic key:
//!
//! ```
//! use eth_rpc_errors::{error_codes, provider_errors, rpc_errors};
//! use serde_json::json;
//!
//! let error = rpc_errors::invalid_input("foo").unwrap();
//! assert_eq!(error.code(), error_codes::rpc::INVALID_INPUT);
//! assert_eq!(error.message(), "foo");
//!
//! let error = provider_errors::custom(json!({ "code": 4009, "message": "foo" })).unwrap();
//! assert_eq!(serde_json::to_value(&error).unwrap(), json!({ "code": 4009, "message": "foo" }));
//! ```

mod codes;
mod error;
mod factory;
mod messages;
mod types;
pub mod validation;

#[cfg(feature = "jsonrpsee")]
mod jsonrpsee;


pub use codes::{
    error_codes, ProviderErrorKey, RpcErrorKey, UnknownKey, PROVIDER_ERROR_CODE_RANGE, SERVER_ERROR_CODE_RANGE,
};
pub use error::{InvalidInputError, Result, Violation};
pub use factory::{provider_errors, rpc_errors, ErrorArg, ErrorOptions};
pub use messages::{
    code_info, message_from_code, standard_from_code, CodeInfo, ErrorStandard, FALLBACK_ERROR_MESSAGE,
    JSON_RPC_SERVER_ERROR_MESSAGE,
};
pub use types::{EthereumProviderError, JsonRpcError, RpcErrorObject, SerializedJsonRpcError};
