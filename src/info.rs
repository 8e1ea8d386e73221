use crate::constants::DIRECTORY_DEFAULT_FILE;
use crate::error::{EditError, Result};
use image::{GenericImageView, ImageReader};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Snapshot of an image file taken right after it was decoded.
///
/// A descriptor never changes once built. If the file changes, call
/// [`describe`] again to get a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    path: PathBuf,
    byte_size: u64,
    modified_at: SystemTime,
    width: u32,
    height: u32,
}

impl ImageDescriptor {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn modified_at(&self) -> SystemTime {
        self.modified_at
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Reads file metadata for `path` and fully decodes it to get its dimensions.
///
/// # Returns
/// * `Ok(ImageDescriptor)` for a regular file the codec can decode
/// * `Err(EditError::FileNotFound)` if nothing exists at `path`
/// * `Err(EditError::NotAnImage)` if the path exists but cannot be decoded
pub fn describe(path: &Path) -> Result<ImageDescriptor> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(EditError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        return Err(EditError::NotAnImage(path.to_path_buf()));
    }

    // Sniff the format from content so a misnamed file still decodes.
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|_| EditError::NotAnImage(path.to_path_buf()))?
        .decode()
        .map_err(|_| EditError::NotAnImage(path.to_path_buf()))?;
    let (width, height) = img.dimensions();

    Ok(ImageDescriptor {
        path: path.to_path_buf(),
        byte_size: metadata.len(),
        modified_at: metadata.modified()?,
        width,
        height,
    })
}

/// What a user-supplied path turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Missing,
    Image(ImageDescriptor),
    /// A directory whose default file is a decodable image.
    DirectoryDefault(ImageDescriptor),
    /// A directory with no usable default file.
    BareDirectory,
}

/// Resolves `path` the way both the input and output arguments are checked:
/// a directory is checked for [`DIRECTORY_DEFAULT_FILE`].
pub fn resolve(path: &Path) -> Result<Resolved> {
    if path.is_dir() {
        let default_file = path.join(DIRECTORY_DEFAULT_FILE);
        return Ok(match describe(&default_file) {
            Ok(desc) => Resolved::DirectoryDefault(desc),
            Err(_) => Resolved::BareDirectory,
        });
    }

    match describe(path) {
        Ok(desc) => Ok(Resolved::Image(desc)),
        Err(EditError::FileNotFound(_)) => Ok(Resolved::Missing),
        Err(e) => Err(e),
    }
}
