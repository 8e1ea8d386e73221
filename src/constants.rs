pub const PROGRAM_NAME: &str = "editimage";

pub const DEFAULT_QUALITY: u8 = 50;
pub const DEFAULT_OUTPUT: &str = "resize.jpg";
pub const DEFAULT_SCALE: f64 = 1.0;

/// JPEG quality used when a resized image is written as JPEG.
pub const RESIZE_JPEG_QUALITY: u8 = 95;

/// File looked up inside a directory passed as input or output.
pub const DIRECTORY_DEFAULT_FILE: &str = "resize.jpg";

pub const MAX_IMAGE_DIMENSION: u32 = 65_535;

pub const KIB: f64 = 1024.0;

// Status line tags
pub const OK_TAG: &str = "[OK]";
pub const INFO_TAG: &str = "[INFO]";
pub const FAILED_TAG: &str = "[FAILED]";
pub const DEBUG_TAG: &str = "[DEBUG INFO]";

pub const OVERWRITE_PROMPT: &str = "Please respond with 'yes' or 'no' [y/N]: ";
