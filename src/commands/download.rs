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

use crate::catalog::Catalog;
use crate::config::OdlConfig;
use crate::download::{Credentials, DownloadOptions, download_resource};
use crate::error::{OdlError, Result};
use crate::finder::ResourceFinder;
use crate::license::accept_license;
use crate::models::{Arch, Selection};
use log::{debug, info};
use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

const USERNAME_ENV: &str = "OTN_USERNAME";
const PASSWORD_ENV: &str = "OTN_PASSWORD";

/// Everything the user passed on the command line for a download.
#[derive(Debug, Clone, Default)]
pub struct DownloadRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub component: String,
    pub version: String,
    pub os: String,
    pub arch: Arch,
    pub lang: String,
    pub accept_license: bool,
    pub skip_existing: bool,
    pub no_progress: bool,
    pub timeout: Option<u64>,
}

impl DownloadRequest {
    pub fn selection(&self) -> Selection {
        Selection::new(
            &self.component,
            &self.version,
            &self.os,
            self.arch,
            &self.lang,
        )
    }
}

pub struct DownloadCommand<'a> {
    config: &'a OdlConfig,
    catalog: Catalog,
    destination: PathBuf,
}

impl<'a> DownloadCommand<'a> {
    pub fn new(config: &'a OdlConfig) -> Result<Self> {
        Ok(Self {
            config,
            catalog: Catalog::new(),
            destination: PathBuf::from("."),
        })
    }

    pub fn execute(&self, request: &DownloadRequest) -> Result<()> {
        let username = resolve_username(
            request.username.as_deref(),
            env::var(USERNAME_ENV).ok().as_deref(),
            self.config,
        )?;

        let selection = request.selection();
        let resource = ResourceFinder::new(&self.catalog)
            .find(&selection)
            .ok_or_else(|| OdlError::ResourceNotFound {
                component: selection.component.clone(),
                version: selection.version.clone(),
                os: selection.os.clone(),
                arch: selection.arch.to_string(),
                lang: selection.lang.clone(),
            })?;

        println!(
            "Beginning download process for {} {}",
            resource.component, resource.version
        );

        let accepted = {
            let stdin = io::stdin();
            let stdout = io::stdout();
            accept_license(
                request.accept_license,
                &resource.license_url,
                &mut stdin.lock(),
                &mut stdout.lock(),
            )?
        };
        if !accepted {
            return Err(OdlError::LicenseDeclined);
        }

        let password = resolve_password(
            request.password.as_deref(),
            env::var(PASSWORD_ENV).ok().as_deref(),
        );
        let credentials = Credentials::new(username, password);
        let options = DownloadOptions {
            destination: self.destination.clone(),
            skip_existing: request.skip_existing || self.config.download.skip_existing,
        };
        let no_progress = request.no_progress || self.config.download.no_progress;
        let timeout = request
            .timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| self.config.download.timeout());

        debug!("Download options: {options:?}, timeout {timeout:?}");

        let summary = download_resource(resource, &credentials, &options, no_progress, timeout)?;

        info!(
            "Downloaded {} file(s), skipped {}",
            summary.downloaded.len(),
            summary.skipped.len()
        );
        println!("Download complete.");

        Ok(())
    }
}

/// First non-empty of `--username`, `OTN_USERNAME` and `auth.username`.
fn resolve_username(
    from_cli: Option<&str>,
    from_env: Option<&str>,
    config: &OdlConfig,
) -> Result<String> {
    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    non_empty(from_cli)
        .or_else(|| non_empty(from_env))
        .or_else(|| non_empty(config.auth.username.as_deref()))
        .map(str::to_string)
        .ok_or(OdlError::MissingUsername)
}

/// First non-empty of `--password` and `OTN_PASSWORD`. `None` means prompt.
fn resolve_password(from_cli: Option<&str>, from_env: Option<&str>) -> Option<String> {
    from_cli
        .filter(|p| !p.is_empty())
        .or(from_env.filter(|p| !p.is_empty()))
        .map(str::to_string)
}
