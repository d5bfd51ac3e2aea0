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

use crate::error::OdlError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a OdlError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a OdlError) -> Self {
        let (suggestion, details) = match error {
            OdlError::MissingUsername => {
                let suggestion = Some(
                    "Set the username with --username or the OTN_USERNAME environment variable."
                        .to_string(),
                );
                (suggestion, None)
            }
            OdlError::InvalidArchitecture(value) => {
                let suggestion = Some("Architecture must be one of: x86, x64, na.".to_string());
                let details = Some(format!("Received: {value}"));
                (suggestion, details)
            }
            OdlError::LicenseDeclined => (None, None),
            OdlError::ResourceNotFound { component, .. } => {
                let suggestion = Some(format!(
                    "Run 'odl --list' to see the available components. Use the exact values \
                     shown, including 'na' for any dimension that does not apply to \
                     '{component}'."
                ));
                (suggestion, None)
            }
            OdlError::NetworkError(msg) => {
                let suggestion = Some(
                    "Check your internet connection and proxy settings. Use --timeout to \
                     increase the timeout if needed."
                        .to_string(),
                );
                let details = Some(format!("Network issue: {msg}"));
                (suggestion, details)
            }
            OdlError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                {
                    Some(
                        "Try increasing the timeout with --timeout option (e.g., --timeout 600)."
                            .to_string(),
                    )
                } else {
                    Some("Check your internet connection and try again.".to_string())
                };
                let details = Some(format!("HTTP error: {http_err}"));
                (suggestion, details)
            }
            OdlError::LoginForm(msg) => {
                let suggestion = Some(
                    "The sign-in page did not look as expected. Verify the download URL opens a \
                     login page in a browser."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            OdlError::ConfigError(msg) => {
                let suggestion =
                    Some("Fix or remove the odl config.toml file and try again.".to_string());
                let details = Some(msg.clone());
                (suggestion, details)
            }
            OdlError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => Some(
                        "Check that the current directory is writable.".to_string(),
                    ),
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            OdlError::InvalidUrl(url_err) => (None, Some(format!("URL error: {url_err}"))),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
