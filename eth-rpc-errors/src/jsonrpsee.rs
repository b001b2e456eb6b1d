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

//! Conversions into jsonrpsee's error object, for servers built on jsonrpsee.

use jsonrpsee_types::{ErrorObject, ErrorObjectOwned};

use crate::types::{EthereumProviderError, JsonRpcError};

impl From<JsonRpcError> for ErrorObjectOwned {
    fn from(error: JsonRpcError) -> Self {
        ErrorObject::owned(error.code(), error.message(), error.data())
    }
}

impl From<EthereumProviderError> for ErrorObjectOwned {
    fn from(error: EthereumProviderError) -> Self {
        JsonRpcError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{provider_errors, rpc_errors};
    use serde_json::json;

    #[test]
    fn keeps_code_message_and_data() {
        let object: ErrorObjectOwned = rpc_errors::internal(json!({ "data": { "foo": "bar" } })).unwrap().into();
        assert_eq!(object.code(), -32603);
        assert_eq!(object.message(), "Internal JSON-RPC error.");
        assert_eq!(object.data().map(|data| data.get()), Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn provider_errors_convert() {
        let object: ErrorObjectOwned = provider_errors::disconnected(()).unwrap().into();
        assert_eq!(object.code(), 4900);
        assert!(object.data().is_none());
    }
}
