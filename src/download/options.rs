use std::path::PathBuf;

/// Options for configuring download behavior
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Directory the files are written to
    pub destination: PathBuf,

    /// Leave files that already exist untouched instead of asking
    pub skip_existing: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            destination: PathBuf::from("."),
            skip_existing: false,
        }
    }
}

/// OTN account used for the sign-in form
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,

    /// Asked for interactively when `None` and sign-in is required
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password: password.filter(|p| !p.is_empty()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .finish()
    }
}

/// Outcome of downloading one resource
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Files written, in catalog order
    pub downloaded: Vec<PathBuf>,

    /// Files that already existed and were left alone
    pub skipped: Vec<PathBuf>,

    /// Whether the sign-in form was submitted
    pub authenticated: bool,
}
