// Copyright 2023 The AppSvc CLI Authors
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
use std::str::FromStr;

use appsvc_error::AppSvcError;

/// Initializes the logger with an explicit level.
///
/// Log lines go to stderr so that command output on stdout stays machine
/// readable.
///
/// Calling it more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_logger_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(true)
        .with_line_number(true)
        .with_max_level(level.as_tracing())
        .try_init();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level(&'static str);

impl Level {
    /// Constant representing the ERROR log level.
    pub const ERROR: Level = Level("ERROR");

    /// Constant representing the WARN log level.
    pub const WARN: Level = Level("WARN");

    /// Constant representing the INFO log level.
    pub const INFO: Level = Level("INFO");

    /// Constant representing the DEBUG log level.
    pub const DEBUG: Level = Level("DEBUG");

    /// Constant representing the TRACE log level.
    pub const TRACE: Level = Level("TRACE");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Level for a `-v` count: 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE
    pub fn from_verbosity(count: u8) -> Level {
        match count {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    fn as_tracing(&self) -> tracing::Level {
        match self.0 {
            "ERROR" => tracing::Level::ERROR,
            "INFO" => tracing::Level::INFO,
            "DEBUG" => tracing::Level::DEBUG,
            "TRACE" => tracing::Level::TRACE,
            _ => tracing::Level::WARN,
        }
    }
}

impl FromStr for Level {
    type Err = AppSvcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::ERROR),
            "WARN" => Ok(Level::WARN),
            "INFO" => Ok(Level::INFO),
            "DEBUG" => Ok(Level::DEBUG),
            "TRACE" => Ok(Level::TRACE),
            _ => Err(AppSvcError::illegal_argument(format!("Invalid log level: {s}"))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_as_str_returns_correct_value() {
        assert_eq!(Level::ERROR.as_str(), "ERROR");
        assert_eq!(Level::WARN.as_str(), "WARN");
        assert_eq!(Level::INFO.as_str(), "INFO");
        assert_eq!(Level::DEBUG.as_str(), "DEBUG");
        assert_eq!(Level::TRACE.as_str(), "TRACE");
    }

    #[test]
    fn level_from_str_is_case_insensitive() {
        assert_eq!("error".parse::<Level>().unwrap(), Level::ERROR);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::WARN);
        assert_eq!(" INFO ".parse::<Level>().unwrap(), Level::INFO);
        assert_eq!("debug".parse::<Level>().unwrap(), Level::DEBUG);
        assert_eq!("TRACE".parse::<Level>().unwrap(), Level::TRACE);
    }

    #[test]
    fn level_from_str_rejects_unknown() {
        assert!("verbose".parse::<Level>().is_err());
        assert!("appsvc_tools=debug".parse::<Level>().is_err());
    }

    #[test]
    fn level_from_verbosity() {
        assert_eq!(Level::from_verbosity(0), Level::WARN);
        assert_eq!(Level::from_verbosity(1), Level::INFO);
        assert_eq!(Level::from_verbosity(2), Level::DEBUG);
        assert_eq!(Level::from_verbosity(7), Level::TRACE);
    }

    #[test]
    fn level_display_formats_correctly() {
        assert_eq!(format!("{}", Level::ERROR), "ERROR");
        assert_eq!(format!("{:>5}", Level::INFO), " INFO");
    }

    #[test]
    fn init_logger_twice_does_not_panic() {
        init_logger_with_level(Level::ERROR);
        init_logger_with_level(Level::DEBUG);
    }
}
