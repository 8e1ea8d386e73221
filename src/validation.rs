use crate::constants::OVERWRITE_PROMPT;
use crate::error::{EditError, Result};
use crate::info::{resolve, ImageDescriptor, Resolved};
use crate::processing::{Mode, OperationRequest};
use std::io::{BufRead, Write};
use std::path::Path;

/// A request that passed every pre-flight check, paired with the source
/// descriptor taken while checking it.
///
/// Input and output paths are already resolved: a directory argument has
/// been replaced by its default file.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub(crate) request: OperationRequest,
    pub(crate) source: ImageDescriptor,
}

impl ValidatedRequest {
    pub fn request(&self) -> &OperationRequest {
        &self.request
    }

    pub fn source(&self) -> &ImageDescriptor {
        &self.source
    }
}

/// Runs the pre-flight checks in order: input, output collision, then the
/// extension rule for compression.
///
/// `reader` and `writer` back the overwrite prompt, which is only shown when
/// the output already exists and `assume_yes` is off.
pub fn validate<R: BufRead, W: Write>(
    mut request: OperationRequest,
    reader: &mut R,
    writer: &mut W,
) -> Result<ValidatedRequest> {
    let source = validate_input(&request.input)?;
    request.input = source.path().to_path_buf();

    if let Some(existing) = validate_output(&request.output)? {
        if !request.assume_yes && !confirm_overwrite(existing.path(), reader, writer)? {
            return Err(EditError::OverwriteDeclined);
        }
        request.output = existing.path().to_path_buf();
    }

    match request.mode {
        Mode::Compress => check_extensions(&request.input, &request.output)?,
        Mode::Resize => {}
    }

    Ok(ValidatedRequest { request, source })
}

/// Resolves the input path to a decodable image.
pub fn validate_input(path: &Path) -> Result<ImageDescriptor> {
    match resolve(path)? {
        Resolved::Image(desc) | Resolved::DirectoryDefault(desc) => Ok(desc),
        Resolved::Missing => Err(EditError::InputNotFound(path.to_path_buf())),
        Resolved::BareDirectory => Err(EditError::InputIsDirectory(path.to_path_buf())),
    }
}

/// Resolves the output path.
///
/// # Returns
/// * `Ok(None)` if nothing is there yet
/// * `Ok(Some(desc))` for an existing image that would be overwritten
/// * `Err(EditError::OutputIsDirectory)` for a directory without a default image
pub fn validate_output(path: &Path) -> Result<Option<ImageDescriptor>> {
    match resolve(path)? {
        Resolved::Missing => Ok(None),
        Resolved::Image(desc) | Resolved::DirectoryDefault(desc) => Ok(Some(desc)),
        Resolved::BareDirectory => Err(EditError::OutputIsDirectory(path.to_path_buf())),
    }
}

/// Asks whether `path` may be overwritten until a recognized answer arrives.
///
/// `y`, `ye` and `yes` accept; `n` and `no` decline. End of input declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool> {
    writeln!(writer, "Output file '{}' already exists.", path.display())?;

    loop {
        write!(writer, "{}", OVERWRITE_PROMPT)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "ye" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

/// Compression re-encodes without converting formats, so both paths must
/// carry the same extension. The comparison is case-sensitive.
pub fn check_extensions(input: &Path, output: &Path) -> Result<()> {
    let input_ext = dotted_extension(input);
    let output_ext = dotted_extension(output);

    if input_ext != output_ext {
        return Err(EditError::ExtensionMismatch {
            input: input_ext,
            output: output_ext,
        });
    }
    Ok(())
}

fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
