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

use crate::error::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Decide whether the OTN license agreement has been accepted.
///
/// Acceptance comes either from the `--accept-license` flag, in which case
/// `input` is never read, or from an interactive answer where only an exact
/// `Y` counts as acceptance.
pub fn accept_license<R: BufRead, W: Write>(
    accept_from_flag: bool,
    license_url: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    if accept_from_flag {
        debug!("License accepted via --accept-license");
        return Ok(true);
    }

    writeln!(
        output,
        "Before continuing, you must accept the OTN license agreement."
    )?;
    writeln!(output, "The full terms can be found here: {license_url}")?;
    write!(output, "Please enter Y if you accept the license agreement: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim() == "Y")
}
