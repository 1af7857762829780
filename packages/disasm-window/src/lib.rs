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

//! Print the disassembly around a single address of a binary.
//!
//! The lines come from an external disassembler (objdump by default); this
//! crate only locates the address among them and picks the window to show.

pub mod address;
pub mod debug;
pub mod error;
pub mod listing;
pub mod render;
pub mod source;
pub mod window;

pub use address::{normalize_address, NormalizedAddress};
pub use error::ExtractError;
pub use source::{Disassembler, ObjdumpDisassembler};
pub use window::{extract, Mode, Window};

use std::path::Path;

/// Disassemble `binary`, locate `address` in the output and hand the
/// resulting window to `emit`.
///
/// The listing only lives for the duration of the call, so the window is
/// passed to a closure instead of being returned.
pub fn lookup<D, F, T>(
    disassembler: &D,
    binary: &Path,
    address: &str,
    mode: Mode,
    emit: F,
) -> Result<T, ExtractError>
where
    D: Disassembler + ?Sized,
    F: FnOnce(&Window<'_>, &NormalizedAddress) -> T,
{
    let lines = disassembler.disassemble(binary)?;
    let address = NormalizedAddress::new(address);
    let window = extract(&lines, &address, mode)?;
    Ok(emit(&window, &address))
}
