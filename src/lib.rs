pub mod cli;
pub mod constants;
pub mod error;
pub mod info;
pub mod logger;
pub mod processing;
pub mod report;
pub mod validation;

pub use cli::{parse_request, Args};
pub use error::{EditError, Result};
pub use info::{describe, resolve, ImageDescriptor, Resolved};
pub use processing::{
    apply, compress_image, encode_jpeg, resize_image, scaled_dimensions, Mode, OperationRequest,
};
pub use report::{format_file_size, print_report};
pub use validation::{
    check_extensions, confirm_overwrite, validate, validate_input, validate_output,
    ValidatedRequest,
};
