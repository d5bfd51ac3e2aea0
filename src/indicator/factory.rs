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

use crate::indicator::{
    IndicatifProgress, ProgressIndicator, ProgressRendererKind, SilentProgress, SimpleProgress,
};
use std::env;
use std::io::IsTerminal;

const FORCE_TTY_ENV: &str = "ODL_FORCE_TTY_PROGRESS";
const NO_TTY_ENV: &str = "ODL_NO_TTY_PROGRESS";

pub struct ProgressFactory;

impl ProgressFactory {
    pub fn create(no_progress: bool) -> Box<dyn ProgressIndicator> {
        match Self::renderer_for(no_progress) {
            ProgressRendererKind::Silent => Box::new(SilentProgress),
            ProgressRendererKind::NonTty => Box::new(SimpleProgress::new()),
            ProgressRendererKind::Tty => Box::new(IndicatifProgress::new()),
        }
    }

    /// Pick the renderer: `--no-progress` first, then the explicit
    /// environment overrides, then terminal detection.
    pub fn renderer_for(no_progress: bool) -> ProgressRendererKind {
        if no_progress {
            ProgressRendererKind::Silent
        } else if env_flag(FORCE_TTY_ENV) {
            ProgressRendererKind::Tty
        } else if env_flag(NO_TTY_ENV) || !interactive_stderr() {
            ProgressRendererKind::NonTty
        } else {
            ProgressRendererKind::Tty
        }
    }
}

/// Set and not "0"/"false"; an empty value counts as set.
fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(value) => {
            let value = value.trim();
            !(value == "0" || value.eq_ignore_ascii_case("false"))
        }
        Err(_) => false,
    }
}

fn interactive_stderr() -> bool {
    if !std::io::stderr().is_terminal() || env::var_os("CI").is_some() {
        return false;
    }
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    // https://no-color.org/
    env::var_os("NO_COLOR").is_none()
}
