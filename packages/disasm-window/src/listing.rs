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

/// Classification of raw `objdump -d` lines.
///
/// The disassembler is trusted to emit two shapes of interesting line:
///
/// ```text
/// 0000000000401000 <main>:
///   401000:	55                   	push   %rbp
/// ```
///
/// Function headers carry an address and an angle-bracketed symbol followed
/// by a colon. Instruction lines carry an address followed directly by a
/// colon. Nothing else is validated here.
use regex::Regex;
use std::sync::OnceLock;

/// Substring that marks the end of a function in full-function mode. This is
/// a plain substring test, so `iretq`, `retf` or a symbol containing "ret"
/// all count.
pub const RETURN_MARKER: &str = "ret";

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*([0-9a-f]+)\s+<([^>]+)>:").expect("function header pattern is valid")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    FunctionHeader { address: &'a str, symbol: &'a str },
    Other,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        match header_regex().captures(line) {
            Some(caps) => {
                // Both groups are mandatory in the pattern
                let address = caps.get(1).map_or("", |m| m.as_str());
                let symbol = caps.get(2).map_or("", |m| m.as_str());
                LineKind::FunctionHeader { address, symbol }
            }
            None => LineKind::Other,
        }
    }

    pub fn symbol(&self) -> Option<&'a str> {
        match self {
            LineKind::FunctionHeader { symbol, .. } => Some(symbol),
            LineKind::Other => None,
        }
    }
}

pub fn is_function_header(line: &str) -> bool {
    header_regex().is_match(line)
}

/// True when `line` starts (after optional whitespace) with `address`
/// immediately followed by a colon. An empty address never matches.
pub fn is_target_line(line: &str, address: &str) -> bool {
    if address.is_empty() {
        return false;
    }
    line.trim_start()
        .strip_prefix(address)
        .is_some_and(|rest| rest.starts_with(':'))
}

pub fn contains_return_marker(line: &str) -> bool {
    line.contains(RETURN_MARKER)
}
