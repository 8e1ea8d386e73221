use crate::processing::Mode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("There is no such image file '{0}'")]
    InputNotFound(PathBuf),

    #[error("Specified file is a directory '{0}'")]
    InputIsDirectory(PathBuf),

    #[error("Output path is a directory '{0}'")]
    OutputIsDirectory(PathBuf),

    #[error("The specified file is not an image '{0}'")]
    NotAnImage(PathBuf),

    #[error("Invalid extensions '{input}' '{output}': compression does not convert formats")]
    ExtensionMismatch { input: String, output: String },

    #[error("JPEG encoding failed: {0}")]
    EncodeFailed(#[source] image::ImageError),

    #[error("Quit the program...")]
    OverwriteDeclined,

    #[error("Malformed arguments: {0}")]
    MalformedArguments(#[from] clap::Error),

    #[error("Invalid image dimensions: {0}x{1}. Each side must be between 1 and {2}")]
    InvalidDimensions(u32, u32, u32),

    #[error(": {mode} ({source})")]
    TransformFailed {
        mode: Mode,
        #[source]
        source: Box<EditError>,
    },
}

pub type Result<T> = std::result::Result<T, EditError>;
