use crate::constants::{DEFAULT_OUTPUT, DEFAULT_QUALITY, DEFAULT_SCALE, PROGRAM_NAME};
use crate::error::Result;
use crate::processing::{Mode, OperationRequest};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Re-compress a JPEG by quality or resize an image by scale factors",
    long_about = "editimage processes exactly one image per run. In 'comp' mode it re-encodes \
                  the input as JPEG at the given quality and writes the lossy result with the \
                  same extension. In 'resize' mode it scales width and height independently. \
                  Before/after metadata is reported on success.",
    after_help = "EXAMPLES:\n  \
    editimage photo.jpg -q 80 -o photo_small.jpg\n  \
    editimage photo.jpg --mode resize --width 0.5 --height 0.5 -o half.jpg\n  \
    editimage photo.jpg --verbose 1"
)]
pub struct Args {
    #[arg(help = "Input image file path")]
    pub input: PathBuf,

    #[arg(
        long,
        value_enum,
        default_value_t = Mode::Compress,
        help = "Operation to perform"
    )]
    pub mode: Mode,

    #[arg(
        short = 'q',
        value_name = "QUALITY",
        default_value_t = DEFAULT_QUALITY,
        help = "JPEG quality (0 to 100, comp mode)",
        long_help = "JPEG quality from 0 (smallest file) to 100 (best fidelity). \
                     Larger values are accepted and clamped by the encoder."
    )]
    pub quality: u8,

    #[arg(
        short = 'o',
        value_name = "OUTPUT",
        default_value = DEFAULT_OUTPUT,
        help = "Output file path"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_SCALE,
        allow_negative_numbers = true,
        help = "Height scale factor, e.g. 0.5 (resize mode)"
    )]
    pub height: f64,

    #[arg(
        long,
        default_value_t = DEFAULT_SCALE,
        allow_negative_numbers = true,
        help = "Width scale factor, e.g. 0.5 (resize mode)"
    )]
    pub width: f64,

    #[arg(
        long,
        value_name = "LEVEL",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Debug level; any value above 0 prints before/after details"
    )]
    pub verbose: i64,

    #[arg(
        short = 'y',
        long,
        help = "Overwrite an existing output without asking"
    )]
    pub yes: bool,
}

impl Args {
    pub fn into_request(self) -> OperationRequest {
        OperationRequest {
            mode: self.mode,
            input: self.input,
            output: self.output,
            quality: self.quality,
            width_scale: self.width,
            height_scale: self.height,
            verbose: self.verbose > 0,
            assume_yes: self.yes,
        }
    }
}

/// Parses an argument list (program name first) into a request.
///
/// `--help` and `--version` also surface as [`EditError::MalformedArguments`];
/// their clap error reports `use_stderr() == false`.
///
/// [`EditError::MalformedArguments`]: crate::error::EditError::MalformedArguments
pub fn parse_request<I, T>(args: I) -> Result<OperationRequest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(args)?.into_request())
}
