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

//! Ethereum provider errors (EIP-1193).

use log::debug;
use serde_json::Value;

use super::ErrorArg;
use crate::codes::ProviderErrorKey;
use crate::error::{Result, CODE_NOT_INTEGER, CUSTOM_ARG_NOT_RECORD, CUSTOM_MESSAGE_INVALID};
use crate::messages::message_from_code;
use crate::types::EthereumProviderError;
use crate::validation::{integer_code, is_valid_code, is_valid_message};

pub fn by_key(key: ProviderErrorKey, arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    let (message, data) = arg.into().into_message_and_data()?;
    let code = key.code();
    EthereumProviderError::new(code, message.unwrap_or_else(|| message_from_code(code, None)), data)
}

pub fn user_rejected_request(arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    by_key(ProviderErrorKey::UserRejectedRequest, arg)
}

pub fn unauthorized(arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    by_key(ProviderErrorKey::Unauthorized, arg)
}

pub fn unsupported_method(arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    by_key(ProviderErrorKey::UnsupportedMethod, arg)
}

pub fn disconnected(arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    by_key(ProviderErrorKey::Disconnected, arg)
}

pub fn chain_disconnected(arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    by_key(ProviderErrorKey::ChainDisconnected, arg)
}

/// Provider error with a caller chosen code and message. Only checks that `code` is an
/// integer; the `1000..=4999` range is left to [`EthereumProviderError::new`].
pub fn custom(arg: impl Into<ErrorArg>) -> Result<EthereumProviderError> {
    let ErrorArg::Record(mut record) = arg.into() else {
        debug!("Rejected custom provider error argument: not a record");
        return Err(CUSTOM_ARG_NOT_RECORD);
    };
    let Some(code) = record.get("code").filter(|code| is_valid_code(code)).and_then(integer_code) else {
        debug!("Rejected custom provider error code: {:?}", record.get("code"));
        return Err(CODE_NOT_INTEGER);
    };
    let Some(Value::String(message)) = record.remove("message").filter(is_valid_message) else {
        debug!("Rejected custom provider error message");
        return Err(CUSTOM_MESSAGE_INVALID);
    };
    EthereumProviderError::new(code, message, record.remove("data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::error_codes;
    use crate::error::{Violation, PROVIDER_CODE_OUT_OF_RANGE};
    use crate::ErrorOptions;
    use serde_json::json;

    #[test]
    fn no_argument_uses_canonical_message() {
        let error = unauthorized(()).unwrap();
        assert_eq!(error.code(), error_codes::provider::UNAUTHORIZED);
        assert_eq!(error.message(), "The requested account and/or method has not been authorized by the user.");
        assert_eq!(error.data(), None);
    }

    #[test]
    fn bare_string_and_record() {
        let error = user_rejected_request("nope").unwrap();
        assert_eq!(error.code(), 4001);
        assert_eq!(error.message(), "nope");

        let error = chain_disconnected(json!({ "data": { "chainId": "0x1" } })).unwrap();
        assert_eq!(error.message(), "The provider is disconnected from the specified chain.");
        assert_eq!(error.data(), Some(&json!({ "chainId": "0x1" })));
    }

    #[test]
    fn custom_builds_exact_code_and_message() {
        let error = custom(json!({ "code": 4009, "message": "foo" })).unwrap();
        assert_eq!(error.code(), 4009);
        assert_eq!(error.message(), "foo");
        assert_eq!(error.data(), None);

        let error = custom(ErrorOptions::new().with_code(1001).with_message("foo").with_data(json!({ "foo": "bar" })))
            .unwrap();
        assert_eq!(error.data(), Some(&json!({ "foo": "bar" })));
    }

    #[test]
    fn custom_requires_a_record() {
        let err = custom("foo").unwrap_err();
        assert_eq!(err.violation(), Violation::Shape);
        assert_eq!(err.message(), "Ethereum Provider custom errors must provide single object argument.");
        assert_eq!(custom(()).unwrap_err(), CUSTOM_ARG_NOT_RECORD);
        assert_eq!(custom(json!([4009, "foo"])).unwrap_err(), CUSTOM_ARG_NOT_RECORD);
    }

    #[test]
    fn custom_requires_integer_code() {
        assert_eq!(custom(json!({ "code": "4009", "message": "foo" })).unwrap_err(), CODE_NOT_INTEGER);
        assert_eq!(custom(json!({ "message": "foo" })).unwrap_err(), CODE_NOT_INTEGER);
    }

    #[test]
    fn custom_requires_nonempty_string_message() {
        assert_eq!(custom(json!({ "code": 4009, "message": 2 })).unwrap_err(), CUSTOM_MESSAGE_INVALID);
        assert_eq!(custom(json!({ "code": 4009, "message": "" })).unwrap_err(), CUSTOM_MESSAGE_INVALID);
        assert_eq!(custom(json!({ "code": 4009 })).unwrap_err(), CUSTOM_MESSAGE_INVALID);
    }

    #[test]
    fn custom_code_range_is_checked_by_the_value_type() {
        let err = custom(json!({ "code": -32000, "message": "foo" })).unwrap_err();
        assert_eq!(err, PROVIDER_CODE_OUT_OF_RANGE);
        assert_ne!(err, CODE_NOT_INTEGER);
    }
}
