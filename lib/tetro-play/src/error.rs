use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config parse error: {0}")]
    ParseConfig(#[from] serde_json::Error),
    #[error("board must be between 4x4 and 1024x1024, got {width}x{height}")]
    BoardSize { width: usize, height: usize },
    #[error("a {width}x{height} board of {cell}px cells overflows pixel coordinates")]
    Extent {
        width: usize,
        height: usize,
        cell: u32,
    },
    #[error("padding {padding} leaves no room in a {cell}px cell")]
    Padding { cell: u32, padding: u32 },
    #[error("tick interval must be non-zero")]
    TickInterval,
    #[error("key {key:?} bound to unknown action {action:?}")]
    UnknownAction { key: String, action: String },
}
