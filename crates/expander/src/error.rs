use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpandError>;

#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("native long-path lookup is not supported on this platform")]
    UnsupportedPlatform,

    #[error("failed to bind native long-path function: {0}")]
    NativeBind(String),

    #[error("native long-path lookup failed for {path}")]
    NativeCall { path: String },
}
