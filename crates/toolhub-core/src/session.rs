//! Image editing session.
//!
//! An [`EditSession`] owns the loaded image, the current rotation and the
//! filter options for a single editor. Rotating only changes the stored
//! angle. Applying a filter draws the original image through the current
//! rotation and filters the result, so filters never stack on one another.
//! Resizing resamples the source itself and is not undone by a reset.

use crate::buffer::PixelBuffer;
use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_png, EncodeError};
use crate::filter::{FilterError, FilterKind};
use crate::transform::{self, apply_rotation, compute_rotated_bounds, ResizeError, Rotation};
use crate::FilterOptions;

/// File name offered when the edited image is downloaded.
pub const EXPORT_FILE_NAME: &str = "edited-image.png";

/// State of one image editor.
#[derive(Debug, Clone)]
pub struct EditSession {
    source: PixelBuffer,
    rotation: Rotation,
    options: FilterOptions,
    rendered: Option<Rendered>,
}

/// The last filtered render and what produced it.
#[derive(Debug, Clone)]
struct Rendered {
    filter: FilterKind,
    image: PixelBuffer,
}

impl EditSession {
    /// Start a session on an already decoded image.
    pub fn new(source: PixelBuffer) -> Self {
        Self::with_options(source, FilterOptions::default())
    }

    pub fn with_options(source: PixelBuffer, options: FilterOptions) -> Self {
        Self {
            source,
            rotation: Rotation::NONE,
            options,
            rendered: None,
        }
    }

    /// Start a session from the bytes of an image file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_image(bytes).map(Self::new)
    }

    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: FilterOptions) {
        self.options = options;
    }

    /// Filter used for the current output, if any.
    pub fn last_filter(&self) -> Option<FilterKind> {
        self.rendered.as_ref().map(|r| r.filter)
    }

    /// Advance the rotation by 90 degrees.
    ///
    /// Pixels are not touched; the new angle takes effect the next time a
    /// filter is applied.
    pub fn rotate(&mut self) -> Rotation {
        let rotation = self.rotation.rotate();
        log::debug!("Rotation is now {}", rotation);
        rotation
    }

    /// The source image drawn through the current rotation, unfiltered.
    pub fn preview(&self) -> PixelBuffer {
        apply_rotation(&self.source, self.rotation)
    }

    /// Draw the source through the current rotation and apply `filter`.
    ///
    /// Returns the new output. On error the previous output is kept.
    pub fn apply_filter(&mut self, filter: FilterKind) -> Result<&PixelBuffer, FilterError> {
        let image = self.preview().filtered(filter, &self.options)?;
        let rendered = self.rendered.insert(Rendered { filter, image });
        Ok(&rendered.image)
    }

    /// Parse a filter selector and apply it.
    pub fn apply_filter_named(&mut self, selector: &str) -> Result<&PixelBuffer, FilterError> {
        let filter = selector.parse::<FilterKind>().inspect_err(|_| {
            log::warn!("Rejected unknown filter selector {:?}", selector);
        })?;
        self.apply_filter(filter)
    }

    /// The image that would be downloaded: the last filtered render, or the
    /// rotated source if no filter has been applied yet.
    pub fn output(&self) -> PixelBuffer {
        match &self.rendered {
            Some(rendered) => rendered.image.clone(),
            None => self.preview(),
        }
    }

    /// Encode [`output`](Self::output) as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png(&self.output())
    }

    /// Resample the source so the rotated preview is `width x height`.
    ///
    /// The filtered output is discarded, so [`output`](Self::output) shows
    /// the resized preview until a filter is applied again.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ResizeError> {
        // Source dimensions that rotate into the requested surface
        let (src_w, src_h) = compute_rotated_bounds(width, height, self.rotation);
        self.source = transform::resize(&self.source, src_w, src_h)?;
        self.rendered = None;
        Ok(())
    }

    /// Discard rotation and filter output.
    pub fn reset(&mut self) {
        self.rotation = Rotation::NONE;
        self.rendered = None;
    }
}
