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

use crate::error::ExtractError;
use log::{debug, warn};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Instant;

pub const DEFAULT_OBJDUMP: &str = "objdump";

/// Anything that can turn a binary into its textual disassembly, one entry
/// per output line with line terminators removed.
pub trait Disassembler {
    fn disassemble(&self, binary: &Path) -> Result<Vec<String>, ExtractError>;
}

/// Runs `objdump -d` and collects its stdout.
pub struct ObjdumpDisassembler {
    program: PathBuf,
}

impl Default for ObjdumpDisassembler {
    fn default() -> Self {
        Self::new(DEFAULT_OBJDUMP)
    }
}

impl ObjdumpDisassembler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Disassembler for ObjdumpDisassembler {
    fn disassemble(&self, binary: &Path) -> Result<Vec<String>, ExtractError> {
        if !binary.is_file() {
            return Err(ExtractError::Launch(format!(
                "cannot open binary file '{}'",
                binary.display()
            )));
        }

        let now = Instant::now();
        let mut child = Command::new(&self.program)
            .arg("-d")
            .arg(binary)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ExtractError::Launch(format!("{}: {}", self.program.display(), e))
            })?;

        // Drained on its own thread so a chatty stderr cannot stall stdout
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut text = String::new();
                let _ = pipe.read_to_string(&mut text);
                text
            })
        });

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ExtractError::Launch("failed to capture objdump stdout".to_string()))?;
        let lines = read_lines(stdout)
            .map_err(|e| ExtractError::Launch(format!("reading objdump output: {}", e)))?;

        let stderr = stderr_reader
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();

        let status = child
            .wait()
            .map_err(|e| ExtractError::Launch(format!("waiting for objdump: {}", e)))?;
        if !status.success() {
            let detail = stderr.lines().next().unwrap_or("").trim().to_string();
            warn!("{} exited with {}", self.program.display(), status);
            return Err(ExtractError::Launch(format!(
                "{} exited with {}: {}",
                self.program.display(),
                status,
                detail
            )));
        }

        debug!(
            "Disassembly loaded: {} lines from {} in {:.2?}",
            lines.len(),
            binary.display(),
            now.elapsed()
        );
        Ok(lines)
    }
}

/// Split a byte stream into lines, dropping CR/LF and decoding lossily.
pub fn read_lines<R: Read>(input: R) -> std::io::Result<Vec<String>> {
    let mut reader = BufReader::with_capacity(64 * 1024, input);
    let mut buf: Vec<u8> = Vec::with_capacity(8 * 1024);
    let mut lines = Vec::new();

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break; // EOF
        }

        while buf
            .last()
            .map(|b| *b == b'\n' || *b == b'\r')
            .unwrap_or(false)
        {
            buf.pop();
        }

        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}
