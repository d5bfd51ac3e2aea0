/// Download management for license-gated OTN resources
///
/// This module provides:
/// - A cookie-keeping HTTP session that re-sends the User-Agent on redirects
/// - Sign-in form scraping for the single sign-on page
/// - The per-resource download loop with progress reporting
mod client;
mod login;
mod options;
mod progress;
mod resource_downloader;

// Re-export public types and traits
pub use client::{AttohttpcSession, DEFAULT_TIMEOUT, HttpResponse, HttpSession};
pub use login::{LOGIN_URL, LoginForm};
pub use options::{Credentials, DownloadOptions, DownloadSummary};
pub use progress::DownloadProgressAdapter;
pub use resource_downloader::{ProgressReporter, ResourceDownloader};

use crate::console::TerminalConsole;
use crate::error::Result;
use crate::models::Resource;
use std::time::Duration;

/// Download every file of `resource` with the real network session and
/// terminal prompts.
///
/// # Arguments
/// * `resource` - Catalog entry to fetch
/// * `credentials` - OTN account used if the resource needs a sign-in
/// * `options` - Destination directory and skip-existing behaviour
/// * `no_progress` - Disable progress reporting
/// * `timeout` - Per-request timeout
pub fn download_resource(
    resource: &Resource,
    credentials: &Credentials,
    options: &DownloadOptions,
    no_progress: bool,
    timeout: Duration,
) -> Result<DownloadSummary> {
    let session = AttohttpcSession::new().with_timeout(timeout);

    let mut downloader = ResourceDownloader::new(Box::new(session), Box::new(TerminalConsole::new()))
        .with_progress_reporter(Box::new(DownloadProgressAdapter::new(no_progress)));

    downloader.download(resource, credentials, options)
}
