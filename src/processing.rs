use crate::constants::{
    DEFAULT_OUTPUT, DEFAULT_QUALITY, DEFAULT_SCALE, MAX_IMAGE_DIMENSION, RESIZE_JPEG_QUALITY,
};
use crate::error::{EditError, Result};
use crate::info::{describe, ImageDescriptor};
use crate::validation::ValidatedRequest;
use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Re-encode as JPEG at the requested quality
    #[value(name = "comp")]
    Compress,
    /// Scale width and height by independent factors
    #[value(name = "resize")]
    Resize,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => write!(f, "comp"),
            Mode::Resize => write!(f, "resize"),
        }
    }
}

/// A fully typed description of one run.
///
/// `quality` only matters for [`Mode::Compress`]; the scale factors only
/// matter for [`Mode::Resize`].
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub quality: u8,
    pub width_scale: f64,
    pub height_scale: f64,
    pub verbose: bool,
    /// Overwrite an existing output without asking.
    pub assume_yes: bool,
}

impl OperationRequest {
    pub fn new(mode: Mode, input: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            quality: DEFAULT_QUALITY,
            width_scale: DEFAULT_SCALE,
            height_scale: DEFAULT_SCALE,
            verbose: false,
            assume_yes: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_scale(mut self, width_scale: f64, height_scale: f64) -> Self {
        self.width_scale = width_scale;
        self.height_scale = height_scale;
        self
    }
}

/// Runs the transform selected by the request's mode.
///
/// Any failure is wrapped in [`EditError::TransformFailed`] so the caller can
/// report which mode broke.
pub fn apply(validated: &ValidatedRequest) -> Result<ImageDescriptor> {
    let request = &validated.request;
    let outcome = match request.mode {
        Mode::Compress => compress_image(request),
        Mode::Resize => resize_image(request),
    };

    outcome.map_err(|e| EditError::TransformFailed {
        mode: request.mode,
        source: Box::new(e),
    })
}

/// Re-encodes the input as JPEG at `request.quality` and writes the lossy
/// result to `request.output`.
///
/// The encoded bytes are decoded again before anything is written. A JPEG
/// output receives those exact bytes; any other extension receives the
/// decoded raster, so it still carries the lossy artifact.
pub fn compress_image(request: &OperationRequest) -> Result<ImageDescriptor> {
    let img = load_image(&request.input)?;
    let encoded = encode_jpeg(&img, request.quality)?;
    let lossy = image::load_from_memory_with_format(&encoded, ImageFormat::Jpeg)?;

    if is_jpeg_path(&request.output) {
        fs::write(&request.output, &encoded)?;
    } else {
        lossy.save(&request.output)?;
    }
    describe(&request.output)
}

/// Scales the input by the request's factors and writes it to `request.output`.
pub fn resize_image(request: &OperationRequest) -> Result<ImageDescriptor> {
    let img = load_image(&request.input)?;
    let (width, height) = img.dimensions();
    let (new_width, new_height) =
        scaled_dimensions(width, height, request.width_scale, request.height_scale)?;

    let resized = img.resize_exact(new_width, new_height, FilterType::Triangle);
    if is_jpeg_path(&request.output) {
        fs::write(&request.output, encode_jpeg(&resized, RESIZE_JPEG_QUALITY)?)?;
    } else {
        resized.save(&request.output)?;
    }
    describe(&request.output)
}

/// Target size for a resize: each side is the product truncated toward zero.
///
/// # Returns
/// * `Ok((width, height))` when both sides land in `1..=MAX_IMAGE_DIMENSION`
/// * `Err(EditError::InvalidDimensions)` otherwise
pub fn scaled_dimensions(
    width: u32,
    height: u32,
    width_scale: f64,
    height_scale: f64,
) -> Result<(u32, u32)> {
    // `as` saturates: negative and NaN products become 0.
    let new_width = (f64::from(width) * width_scale) as u32;
    let new_height = (f64::from(height) * height_scale) as u32;

    let valid = |side: u32| (1..=MAX_IMAGE_DIMENSION).contains(&side);
    if !valid(new_width) || !valid(new_height) {
        return Err(EditError::InvalidDimensions(
            new_width,
            new_height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    Ok((new_width, new_height))
}

/// Encodes `img` as JPEG in memory. The encoder clamps `quality` to its own range.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    img.write_with_encoder(encoder)
        .map_err(EditError::EncodeFailed)?;
    Ok(buffer)
}

fn is_jpeg_path(path: &Path) -> bool {
    matches!(ImageFormat::from_path(path), Ok(ImageFormat::Jpeg))
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}
