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

use std::fmt;

/// Canonical form of an address as objdump prints it at the start of an
/// instruction line: lowercase hex, no `0x` prefix, no zero padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedAddress(String);

impl NormalizedAddress {
    pub fn new(raw: &str) -> Self {
        Self(normalize_address(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only possible for inputs without any digits, e.g. `""` or `"0x"`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize a user supplied address.
///
/// Any number of leading `0x`/`0X` prefixes are removed, then leading zeroes,
/// then the rest is lowercased. An all-zero value collapses to `"0"` so that
/// address zero stays matchable. Non-hex characters are kept; they simply
/// never match a disassembly line.
pub fn normalize_address(raw: &str) -> String {
    let mut s = raw;
    while let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        s = rest;
    }

    let had_digits = !s.is_empty();
    let s = s.trim_start_matches('0');
    if s.is_empty() {
        return if had_digits { "0".to_string() } else { String::new() };
    }

    s.to_lowercase()
}
