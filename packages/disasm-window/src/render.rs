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

use crate::address::NormalizedAddress;
use crate::window::Window;
use serde_json::{json, Value};
use std::io::{self, Write};

/// Write the plain-text report: the enclosing function, then every window
/// line exactly as the disassembler printed it.
pub fn write_window<W: Write>(out: &mut W, window: &Window<'_>) -> io::Result<()> {
    writeln!(out, "Function: {}", window.function_name())?;
    for line in window.lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Serialize a window into a single JSON object.
/// Format:
/// {
///   "function": "main" | null,
///   "address": "0x...",
///   "start": <first line index>,
///   "end": <one past the last line index>,
///   "target": <index of the address line>,
///   "lines": [ "...", ... ]
/// }
pub fn serialize_window(window: &Window<'_>, address: &NormalizedAddress) -> Value {
    json!({
        "function": window.function,
        "address": format!("0x{}", address),
        "start": window.start,
        "end": window.end,
        "target": window.target,
        "lines": window.lines(),
    })
}
