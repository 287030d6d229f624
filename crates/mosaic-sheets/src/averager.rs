//! Block averager: image -> color grid
//!
//! The image is cut into `step`×`step` blocks starting at the top-left
//! corner. Blocks on the right and bottom edges are clipped to the image, so
//! they may be smaller but are never empty. Each block becomes one grid cell
//! holding the floor of the per-channel mean of its pixels.

use std::path::Path;

use image::error::{LimitError, LimitErrorKind};
use image::{DynamicImage, ImageError, ImageReader, RgbImage};

use crate::error::{MosaicError, MosaicResult};
use crate::grid::{ColorGrid, Rgb};

/// A rectangular region of the source image, half-open on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Block {
    /// Block starting at (x, y), clipped to an image of `width`×`height`
    pub fn clipped(x: u32, y: u32, step: u32, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x.saturating_add(step).min(width),
            y1: y.saturating_add(step).min(height),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

/// Open and decode the image at `path`, then average it into a grid
///
/// `step` is validated before the file is touched. The format is sniffed
/// from the file's leading bytes, falling back to its extension.
pub fn process<P: AsRef<Path>>(path: P, step: u32) -> MosaicResult<ColorGrid> {
    validate_step(step)?;

    let path = path.as_ref();
    log::debug!("decoding {}", path.display());
    let image = open_image(path)?.to_rgb8();

    process_image(&image, step)
}

fn open_image(path: &Path) -> Result<DynamicImage, ImageError> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(ImageError::IoError)?;
    log::trace!("{} detected as {:?}", path.display(), reader.format());
    reader.decode()
}

/// Average an already decoded image into a grid
///
/// Any alpha channel must already be dropped; use `DynamicImage::to_rgb8`.
pub fn process_image(image: &RgbImage, step: u32) -> MosaicResult<ColorGrid> {
    validate_step(step)?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::ImageDecode(ImageError::Limits(
            LimitError::from_kind(LimitErrorKind::DimensionError),
        )));
    }

    let rows = height.div_ceil(step) as usize;
    let cols = width.div_ceil(step) as usize;
    log::debug!(
        "averaging {}x{} image with step {} into {} rows x {} columns",
        width,
        height,
        step,
        rows,
        cols
    );

    let mut cells = Vec::with_capacity(rows * cols);
    for y in (0..height).step_by(step as usize) {
        for x in (0..width).step_by(step as usize) {
            let block = Block::clipped(x, y, step, width, height);
            cells.push(average_block(image, block));
        }
    }

    Ok(ColorGrid::from_parts(rows, cols, cells))
}

/// Floor of the per-channel mean over the pixels of `block`
///
/// `block` must lie inside the image and cover at least one pixel.
pub fn average_block(image: &RgbImage, block: Block) -> Rgb {
    let (mut r_total, mut g_total, mut b_total) = (0u64, 0u64, 0u64);

    for y in block.y0..block.y1 {
        for x in block.x0..block.x1 {
            let [r, g, b] = image.get_pixel(x, y).0;
            r_total += r as u64;
            g_total += g as u64;
            b_total += b as u64;
        }
    }

    let count = block.pixel_count().max(1);
    // Each quotient is a mean of u8 values and therefore fits in u8
    Rgb::new(
        (r_total / count) as u8,
        (g_total / count) as u8,
        (b_total / count) as u8,
    )
}

fn validate_step(step: u32) -> MosaicResult<()> {
    if step == 0 {
        return Err(MosaicError::InvalidParameter(
            "step must be a positive number of pixels".into(),
        ));
    }
    Ok(())
}
