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

use crate::indicator::{ProgressConfig, ProgressIndicator, ProgressRendererKind};
use indicatif::ProgressBar;
use std::time::Duration;

const SIZED_TEMPLATE: &str = "{prefix} [{elapsed_precise}] [{bar:40.cyan/blue}] \
     {bytes}/{total_bytes} ({bytes_per_sec}, {eta}) {msg}";
const UNSIZED_TEMPLATE: &str =
    "{spinner:.green} {prefix} [{elapsed_precise}] {bytes} ({bytes_per_sec}) {msg}";

/// Animated bar on a terminal, one bar per file.
pub struct IndicatifProgress {
    progress_bar: Option<ProgressBar>,
}

impl IndicatifProgress {
    pub fn new() -> Self {
        Self { progress_bar: None }
    }

    fn template(config: &ProgressConfig) -> &'static str {
        if config.total.is_some() {
            SIZED_TEMPLATE
        } else {
            UNSIZED_TEMPLATE
        }
    }
}

impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator for IndicatifProgress {
    fn start(&mut self, config: ProgressConfig) {
        let pb = match config.total {
            Some(total) => ProgressBar::new(total),
            None => ProgressBar::new_spinner(),
        };

        let style = indicatif::ProgressStyle::default_bar()
            .template(Self::template(&config))
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
            .progress_chars("█▓░")
            .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷");
        pb.set_style(style);

        pb.set_prefix(format!("{}:", config.file_name));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    fn update(&mut self, current: u64, total: Option<u64>) {
        let Some(pb) = &self.progress_bar else {
            return;
        };
        if let Some(total) = total {
            pb.set_length(total);
        }
        pb.set_position(current);
    }

    fn complete(&mut self, message: Option<String>) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(message.unwrap_or_default());
        }
    }

    fn error(&mut self, message: String) {
        if let Some(pb) = self.progress_bar.take() {
            pb.abandon_with_message(format!("✗ {message}"));
        }
    }

    fn renderer_kind(&self) -> ProgressRendererKind {
        ProgressRendererKind::Tty
    }
}
