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

use clap::Parser;
use log::error;
use std::io::Write;

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<(), ()> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "{} [{}]: {}", buf.timestamp_micros(), record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let output = commands::handle(&cli.command).map_err(|e| error!("{}", e))?;
    let text = serde_json::to_string_pretty(&output).map_err(|e| error!("Could not render output: {}", e))?;
    println!("{}", text);

    Ok(())
}
