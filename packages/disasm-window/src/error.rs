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

//! Errors surfaced by a single address lookup.
//!
//! Every variant is recoverable: a lookup either finds its window or reports
//! one of these, and nothing is left half-updated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The normalized address never appears as a line-start token.
    #[error("Address 0x{0} not found in disassembly.")]
    NotFound(String),

    /// The disassembler produced no lines at all.
    #[error("Disassembly failed or binary invalid.")]
    EmptyInput,

    #[error("Invalid line count '{0}': expected a non-negative integer")]
    MalformedNumericArgument(String),

    #[error("Expected either 'full' or two line counts, got {0} extra argument(s)")]
    InvalidModeArguments(usize),

    /// The external disassembler could not be started or exited unsuccessfully.
    #[error("Failed to run disassembler: {0}")]
    Launch(String),
}
