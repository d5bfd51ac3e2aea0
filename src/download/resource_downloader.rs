use crate::console::Console;
use crate::download::client::{HttpResponse, HttpSession};
use crate::download::login::{LOGIN_URL, LoginForm};
use crate::download::options::{Credentials, DownloadOptions, DownloadSummary};
use crate::error::{OdlError, Result};
use crate::models::Resource;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use url::Url;

const DOWNLOAD_CHUNK_SIZE: usize = 8192;

pub trait ProgressReporter: Send + Sync {
    fn on_start(&mut self, file_name: &str, total_bytes: u64);

    fn on_progress(&mut self, bytes_downloaded: u64);

    fn on_complete(&mut self);

    fn on_error(&mut self, message: &str);
}

/// Fetches every file of a resource, signing in at most once per call.
pub struct ResourceDownloader {
    session: Box<dyn HttpSession>,
    console: Box<dyn Console>,
    progress_reporter: Option<Box<dyn ProgressReporter>>,
    login_url: String,
}

impl ResourceDownloader {
    pub fn new(session: Box<dyn HttpSession>, console: Box<dyn Console>) -> Self {
        Self {
            session,
            console,
            progress_reporter: None,
            login_url: LOGIN_URL.to_string(),
        }
    }

    pub fn with_progress_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }

    /// Download the files of `resource` into `options.destination`.
    ///
    /// The first file that is actually requested triggers the sign-in when the
    /// resource needs it; the response to the sign-in POST is what gets
    /// written for that file. Any error aborts the remaining files and leaves
    /// what was already written on disk.
    pub fn download(
        &mut self,
        resource: &Resource,
        credentials: &Credentials,
        options: &DownloadOptions,
    ) -> Result<DownloadSummary> {
        let login_url = Url::parse(&self.login_url)?;
        let mut password = credentials.password.clone().filter(|p| !p.is_empty());
        let mut summary = DownloadSummary::default();

        for file in &resource.files {
            let url = Url::parse(file)?;
            let file_name = file_name(&url)?;
            let target = options.destination.join(&file_name);

            if target.exists() {
                if options.skip_existing {
                    info!("Skipping {file_name}, it already exists");
                    summary.skipped.push(target);
                    continue;
                }
                if !self.console.confirm_overwrite(&file_name)? {
                    info!("Keeping existing {file_name}");
                    summary.skipped.push(target);
                    continue;
                }
            }

            self.session.seed_cookie(&url, &resource.accept_cookie)?;

            debug!("Requesting {url}");
            let mut response = self.session.get(&url)?;
            validate_response(response.as_ref())?;

            if !resource.skip_auth && !summary.authenticated {
                if password.is_none() {
                    password = Some(self.console.read_password(&credentials.username)?);
                }
                let password = password.as_deref().unwrap_or_default();

                response = self.sign_in(response, &login_url, &credentials.username, password)?;
                summary.authenticated = true;
            }

            let written = self.persist(response, &target, &file_name)?;
            info!("Saved {written} bytes to {}", target.display());
            summary.downloaded.push(target);
        }

        Ok(summary)
    }

    fn sign_in(
        &mut self,
        mut login_page: Box<dyn HttpResponse>,
        login_url: &Url,
        username: &str,
        password: &str,
    ) -> Result<Box<dyn HttpResponse>> {
        let mut body = Vec::new();
        login_page.read_to_end(&mut body)?;
        let html = String::from_utf8_lossy(&body);

        let form = LoginForm::from_html(&html)?.with_credentials(username, password);

        info!("Signing in to {login_url} as {username}");
        let response = self.session.post_form(login_url, &form.encode())?;
        validate_response(response.as_ref())?;
        Ok(response)
    }

    fn persist(
        &mut self,
        response: Box<dyn HttpResponse>,
        target: &Path,
        file_name: &str,
    ) -> Result<u64> {
        let total_size = response.content_length().unwrap_or(0);

        if let Some(reporter) = &mut self.progress_reporter {
            reporter.on_start(file_name, total_size);
        }

        match self.write_to_file(response, target) {
            Ok(written) => {
                if let Some(reporter) = &mut self.progress_reporter {
                    reporter.on_complete();
                }
                Ok(written)
            }
            Err(e) => {
                if let Some(reporter) = &mut self.progress_reporter {
                    reporter.on_error(&e.to_string());
                }
                Err(e)
            }
        }
    }

    fn write_to_file(&mut self, mut response: Box<dyn HttpResponse>, path: &Path) -> Result<u64> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let mut downloaded = 0u64;
        let mut buffer = vec![0; DOWNLOAD_CHUNK_SIZE];

        loop {
            match response.read(&mut buffer) {
                Ok(0) => break, // EOF
                Ok(n) => {
                    writer.write_all(&buffer[..n])?;
                    downloaded += n as u64;

                    if let Some(reporter) = &mut self.progress_reporter {
                        reporter.on_progress(downloaded);
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        writer.flush()?;
        Ok(downloaded)
    }
}

fn validate_response(response: &dyn HttpResponse) -> Result<()> {
    let status = response.status();

    if !(200..300).contains(&status) {
        return Err(OdlError::NetworkError(format!(
            "{} answered with status {status}",
            response.final_url()
        )));
    }

    Ok(())
}

/// Local file name for a download URL: its last path segment.
pub(crate) fn file_name(url: &Url) -> Result<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| OdlError::NetworkError(format!("{url} does not name a file")))
}

#[cfg(test)]
#[path = "resource_downloader_tests.rs"]
mod resource_downloader_tests;
