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

use eth_rpc_errors::{
    code_info, message_from_code, provider_errors, rpc_errors, ErrorOptions, InvalidInputError, ProviderErrorKey,
    RpcErrorKey, UnknownKey,
};
use log::{debug, warn};
use serde_json::{json, Map, Value};

use crate::cli::{BuildArgs, CodesArgs, Commands, MessageArgs, Namespace};

const SERVER_KEY: &str = "server";
const CUSTOM_KEY: &str = "custom";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    UnknownKey(#[from] UnknownKey),

    #[error("Could not parse data as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn handle(command: &Commands) -> Result<Value, Error> {
    match command {
        Commands::Message(args) => Ok(message(args)),
        Commands::Codes(args) => Ok(codes(args)),
        Commands::Rpc(args) => build_rpc(args),
        Commands::Provider(args) => build_provider(args),
    }
}

fn message(args: &MessageArgs) -> Value {
    Value::String(message_from_code(args.code, args.fallback.as_deref()))
}

fn registry_entry(code: i32) -> Value {
    match code_info(code) {
        Some(info) => json!({ "code": code, "standard": info.standard, "message": info.message }),
        None => json!({ "code": code }),
    }
}

fn codes(args: &CodesArgs) -> Value {
    let rpc: Map<String, Value> =
        RpcErrorKey::ALL.iter().map(|key| (key.name().to_string(), registry_entry(key.code()))).collect();
    let provider: Map<String, Value> =
        ProviderErrorKey::ALL.iter().map(|key| (key.name().to_string(), registry_entry(key.code()))).collect();

    match args.namespace {
        Some(Namespace::Rpc) => Value::Object(rpc),
        Some(Namespace::Provider) => Value::Object(provider),
        None => json!({ "rpc": rpc, "provider": provider }),
    }
}

fn options(args: &BuildArgs) -> Result<ErrorOptions, Error> {
    let mut options = ErrorOptions::new();
    if let Some(code) = args.code {
        options = options.with_code(code);
    }
    if let Some(message) = &args.message {
        options = options.with_message(message);
    }
    if let Some(data) = &args.data {
        options = options.with_data(serde_json::from_str(data)?);
    }
    Ok(options)
}

fn build_rpc(args: &BuildArgs) -> Result<Value, Error> {
    let options = options(args)?;
    let error = if args.key == SERVER_KEY {
        rpc_errors::server(options)?
    } else {
        let key: RpcErrorKey = args.key.parse()?;
        if args.code.is_some() {
            warn!("Ignoring --code, {} always uses {}", key, key.code());
        }
        rpc_errors::by_key(key, options)?
    };
    debug!("Built error {}", error.code());
    Ok(serde_json::to_value(error)?)
}

fn build_provider(args: &BuildArgs) -> Result<Value, Error> {
    let options = options(args)?;
    let error = if args.key == CUSTOM_KEY {
        provider_errors::custom(options)?
    } else {
        let key: ProviderErrorKey = args.key.parse()?;
        if args.code.is_some() {
            warn!("Ignoring --code, {} always uses {}", key, key.code());
        }
        provider_errors::by_key(key, options)?
    };
    debug!("Built provider error {}", error.code());
    Ok(serde_json::to_value(error)?)
}
