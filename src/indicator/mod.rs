//! Progress feedback for file transfers
//!
//! `ProgressFactory` picks a renderer from the `--no-progress` flag and the
//! terminal: an indicatif bar, one plain line per file, or nothing.

pub mod factory;
pub mod indicatif;
pub mod silent;
pub mod simple;
pub mod types;

pub use factory::ProgressFactory;
pub use self::indicatif::IndicatifProgress;
pub use silent::SilentProgress;
pub use simple::SimpleProgress;
pub use types::{ProgressConfig, ProgressRendererKind};

pub trait ProgressIndicator: Send + Sync {
    /// Begin tracking one file. Without a total a spinner is shown.
    fn start(&mut self, config: ProgressConfig);

    /// `total` replaces the size given to `start` when it is `Some`.
    fn update(&mut self, current: u64, total: Option<u64>);

    fn complete(&mut self, message: Option<String>);

    fn error(&mut self, message: String);

    fn renderer_kind(&self) -> ProgressRendererKind {
        ProgressRendererKind::NonTty
    }
}
