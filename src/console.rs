// Copyright 2025 dentsusoken
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

//! Interactive questions asked while downloading.

use crate::error::Result;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Ask whether an existing local file may be replaced. Only an exact `Y`
    /// answer means yes.
    fn confirm_overwrite(&mut self, file_name: &str) -> Result<bool>;

    /// Read the OTN password without echoing it.
    fn read_password(&mut self, username: &str) -> Result<String>;
}

/// Console bound to the process' stdin and controlling terminal.
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn confirm_overwrite(&mut self, file_name: &str) -> Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        ask_overwrite(file_name, &mut stdin.lock(), &mut stdout.lock())
    }

    fn read_password(&mut self, username: &str) -> Result<String> {
        let password = rpassword::prompt_password(format!(
            "To complete the license acceptance, you must enter valid OTN credentials. Please \
             enter your OTN password ({username}): "
        ))?;
        Ok(password)
    }
}

pub(crate) fn ask_overwrite<R: BufRead, W: Write>(
    file_name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    writeln!(
        output,
        "This file already exists. Would you like to overwrite {file_name}?"
    )?;
    write!(output, "Enter Y to overwrite, or N to skip: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim() == "Y")
}
