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

use crate::error::{OdlError, Result};
use std::str::FromStr;

/// CPU architecture a resource is built for.
///
/// Only the exact lowercase spellings are accepted so that a selection always
/// compares equal to the catalog entry it was typed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arch {
    X86,
    X64,
    /// Platform independent
    #[default]
    Na,
}

impl FromStr for Arch {
    type Err = OdlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x86" => Ok(Arch::X86),
            "x64" => Ok(Arch::X64),
            "na" => Ok(Arch::Na),
            _ => Err(OdlError::InvalidArchitecture(s.to_string())),
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arch = match self {
            Arch::X86 => "x86",
            Arch::X64 => "x64",
            Arch::Na => "na",
        };
        write!(f, "{arch}")
    }
}
