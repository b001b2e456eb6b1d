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

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prints the canonical message for a code
    Message(MessageArgs),
    /// Prints the error code registries as JSON
    Codes(CodesArgs),
    /// Builds a generic JSON-RPC error, `server` takes `--code`
    Rpc(BuildArgs),
    /// Builds an Ethereum provider error, `custom` takes `--code`
    Provider(BuildArgs),
}

#[derive(Args)]
pub struct MessageArgs {
    #[arg(allow_negative_numbers = true)]
    pub code: i32,

    #[arg(long)]
    pub fallback: Option<String>,
}

#[derive(Args)]
pub struct CodesArgs {
    #[arg(long, value_enum)]
    pub namespace: Option<Namespace>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Namespace {
    Rpc,
    Provider,
}

#[derive(Args)]
pub struct BuildArgs {
    /// camelCase key, e.g. `invalidParams` or `userRejectedRequest`
    pub key: String,

    #[arg(long)]
    pub message: Option<String>,

    /// JSON value stored as the error's `data`
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub code: Option<i32>,
}
