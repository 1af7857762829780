// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use clap::Parser;
use disasm_window::debug::init_logging;
use disasm_window::render::{serialize_window, write_window};
use disasm_window::source::DEFAULT_OBJDUMP;
use disasm_window::{lookup, Mode, ObjdumpDisassembler};
use log::debug;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "disasm-window",
    version,
    about = "Show the disassembly around an address",
    after_help = "Examples:\n  \
                  disasm-window ./a.out 0x401136\n  \
                  disasm-window ./a.out 0x401136 5 15\n  \
                  disasm-window ./a.out 0x401136 full"
)]
struct Cli {
    /// Binary to disassemble
    binary: PathBuf,

    /// Address to look up (hex, with or without 0x)
    address: String,

    /// Either `full`, or the number of lines to show before and after the address
    #[arg(value_name = "full | BEFORE AFTER", num_args = 0..=2)]
    mode: Vec<String>,

    /// objdump executable to run
    #[arg(long = "objdump", env = "OBJDUMP", default_value = DEFAULT_OBJDUMP)]
    objdump: PathBuf,

    /// Print the window as a JSON object
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// Enable debug output
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.debug).context("failed to start logger")?;

    let mode = Mode::from_args(&cli.mode)?;
    debug!("Looking up {} in {} ({:?})", cli.address, cli.binary.display(), mode);

    let disassembler = ObjdumpDisassembler::new(cli.objdump);
    let stdout = io::stdout();
    lookup(&disassembler, &cli.binary, &cli.address, mode, |window, address| {
        if cli.json {
            let value = serialize_window(window, address);
            writeln_json(&mut stdout.lock(), &value)
        } else {
            write_window(&mut stdout.lock(), window)
        }
    })?
    .context("failed to write output")?;

    Ok(())
}

fn writeln_json<W: io::Write>(out: &mut W, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    out.flush()
}
