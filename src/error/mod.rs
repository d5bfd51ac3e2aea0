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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OdlError {
    #[error("No OTN username was provided")]
    MissingUsername,

    #[error("Invalid architecture '{0}'")]
    InvalidArchitecture(String),

    #[error("You must accept the license agreement in order to download")]
    LicenseDeclined,

    #[error("Could not find the selected file: {component} {version} ({os}, {arch}, {lang})")]
    ResourceNotFound {
        component: String,
        version: String,
        os: String,
        arch: String,
        lang: String,
    },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Failed to read login form: {0}")]
    LoginForm(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, OdlError>;
