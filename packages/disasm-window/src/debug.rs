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

//! Logger setup.
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Start the stderr logger. `RUST_LOG` wins when set; otherwise only
/// warnings are shown unless `debug` is on. Stdout stays reserved for the
/// extracted window.
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init_logging(debug: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let default_level = if debug { "debug" } else { "warn" };
    Logger::try_with_env_or_str(default_level)?
        .log_to_stderr()
        .start()
}
