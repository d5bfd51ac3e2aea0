/// What a progress indicator is about to track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    pub file_name: String,

    /// Expected size in bytes; `None` when the server sent no Content-Length
    pub total: Option<u64>,
}

impl ProgressConfig {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            total: None,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}

/// Which renderer a progress indicator draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressRendererKind {
    Tty,
    NonTty,
    Silent,
}
