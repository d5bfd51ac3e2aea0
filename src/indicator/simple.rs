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

use crate::indicator::{ProgressConfig, ProgressIndicator};

/// One line per file, printed when the file is done. Used for pipes and CI logs.
#[derive(Default)]
pub struct SimpleProgress {
    file_name: String,
    total: Option<u64>,
    current: u64,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn summary(&self, message: &str) -> String {
        let size = match self.total {
            Some(total) => format!("{}/{total} bytes", self.current),
            None => format!("{} bytes", self.current),
        };
        if message.is_empty() {
            format!("{} ({size})", self.file_name)
        } else {
            format!("{} ({size}) - {message}", self.file_name)
        }
    }
}

impl ProgressIndicator for SimpleProgress {
    fn start(&mut self, config: ProgressConfig) {
        self.file_name = config.file_name;
        self.total = config.total;
        self.current = 0;
    }

    fn update(&mut self, current: u64, total: Option<u64>) {
        self.current = current;
        if total.is_some() {
            self.total = total;
        }
    }

    fn complete(&mut self, message: Option<String>) {
        println!("✓ {}", self.summary(message.as_deref().unwrap_or_default()));
    }

    fn error(&mut self, message: String) {
        eprintln!("✗ {}", self.summary(&message));
    }
}
