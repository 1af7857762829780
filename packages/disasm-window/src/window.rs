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

//! Window extraction over a materialized disassembly listing.

use crate::address::NormalizedAddress;
use crate::error::ExtractError;
use crate::listing::{contains_return_marker, is_target_line, LineKind};
use log::debug;

/// Name printed when no function header precedes the target line.
pub const UNKNOWN_FUNCTION: &str = "UNKNOWN";

pub const DEFAULT_LINES_BEFORE: usize = 10;
pub const DEFAULT_LINES_AFTER: usize = 10;

// Full-function fallbacks when neither a header nor a return marker bounds the target
const FALLBACK_BEFORE: usize = 10;
const FALLBACK_AFTER: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fixed span of lines around the target, clamped to the listing.
    Bounded { before: usize, after: usize },
    /// From the enclosing function header to the first line containing "ret".
    FullFunction,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Bounded {
            before: DEFAULT_LINES_BEFORE,
            after: DEFAULT_LINES_AFTER,
        }
    }
}

impl Mode {
    /// Interpret the optional trailing command line arguments: nothing, the
    /// literal `full`, or a `before after` pair of line counts.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ExtractError> {
        match args {
            [] => Ok(Mode::default()),
            [one] if one.as_ref() == "full" => Ok(Mode::FullFunction),
            [before, after] => Ok(Mode::Bounded {
                before: parse_count(before.as_ref())?,
                after: parse_count(after.as_ref())?,
            }),
            _ => Err(ExtractError::InvalidModeArguments(args.len())),
        }
    }
}

fn parse_count(arg: &str) -> Result<usize, ExtractError> {
    arg.trim()
        .parse::<usize>()
        .map_err(|_| ExtractError::MalformedNumericArgument(arg.to_string()))
}

/// A contiguous `[start, end)` range of the listing around the target line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    pub start: usize,
    pub end: usize,
    pub target: usize,
    pub function: Option<&'a str>,
    source: &'a [String],
}

impl<'a> Window<'a> {
    pub fn lines(&self) -> &'a [String] {
        &self.source[self.start..self.end]
    }

    pub fn function_name(&self) -> &'a str {
        self.function.unwrap_or(UNKNOWN_FUNCTION)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Locate `address` in `lines` and select the window around it.
///
/// The scan is a single forward pass that stops at the first line starting
/// with the address; later occurrences are ignored.
pub fn extract<'a>(
    lines: &'a [String],
    address: &NormalizedAddress,
    mode: Mode,
) -> Result<Window<'a>, ExtractError> {
    if lines.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut current_function: Option<&'a str> = None;
    let mut func_start: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        if let Some(symbol) = LineKind::classify(line).symbol() {
            func_start = Some(i);
            current_function = Some(symbol);
        }

        if !is_target_line(line, address.as_str()) {
            continue;
        }

        debug!(
            "Found 0x{} at line {} in function {}",
            address,
            i,
            current_function.unwrap_or(UNKNOWN_FUNCTION)
        );

        let (start, end) = match mode {
            Mode::Bounded { before, after } => (
                i.saturating_sub(before),
                i.saturating_add(after).saturating_add(1).min(lines.len()),
            ),
            Mode::FullFunction => full_function_bounds(lines, i, func_start),
        };

        return Ok(Window {
            start,
            end,
            target: i,
            function: current_function,
            source: lines,
        });
    }

    Err(ExtractError::NotFound(address.to_string()))
}

fn full_function_bounds(
    lines: &[String],
    target: usize,
    func_start: Option<usize>,
) -> (usize, usize) {
    let start = func_start.unwrap_or_else(|| target.saturating_sub(FALLBACK_BEFORE));

    let end = lines[target..]
        .iter()
        .position(|l| contains_return_marker(l))
        .map(|offset| target + offset + 1)
        .unwrap_or_else(|| (target + FALLBACK_AFTER).min(lines.len()));

    (start, end)
}
