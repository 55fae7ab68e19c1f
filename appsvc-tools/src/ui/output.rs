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

//! Styled terminal text

use colored::Colorize;

/// Print error message to stderr with a red prefix
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Bold label as used in report summaries
pub fn bold(text: &str) -> String {
    text.bold().to_string()
}

/// Italic marker, e.g. for placeholder values in tables
pub fn italic(text: &str) -> String {
    text.italic().to_string()
}
