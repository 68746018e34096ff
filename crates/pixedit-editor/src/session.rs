//! The editing session and its transform requests

use crate::{SessionError, SessionResult};
use log::{debug, warn};
use pixedit_core::{PixelBuffer, Rect};
use pixedit_transform::{ScaleOptions, rotate_90, scale_with_options};

/// A transform the host can ask the session to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Replace each pixel's color channels with their average
    Grayscale,
    /// Rotate 90 degrees clockwise
    Rotate,
    /// Nearest-neighbor scale by a uniform ratio
    Scale(f64),
    /// Keep only the given rectangle, in buffer coordinates
    Crop(Rect),
}

impl Transform {
    /// Short lowercase name, used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::Rotate => "rotate",
            Transform::Scale(_) => "scale",
            Transform::Crop(_) => "crop",
        }
    }

    fn run(&self, pix: &PixelBuffer, scale_options: &ScaleOptions) -> SessionResult<PixelBuffer> {
        let out = match *self {
            Transform::Grayscale => pix.to_grayscale(),
            Transform::Rotate => rotate_90(pix, true)?,
            Transform::Scale(ratio) => scale_with_options(pix, ratio, scale_options)?,
            Transform::Crop(rect) => pix.crop(&rect)?,
        };
        Ok(out)
    }
}

/// Holds the image being edited
///
/// At most one image is loaded at a time. Every transform reads the
/// current image and, if it succeeds, replaces it; a failed transform
/// leaves the current image exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    current: Option<PixelBuffer>,
    scale_options: ScaleOptions,
}

impl EditorSession {
    /// Create a session with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the options used by [`Transform::Scale`].
    pub fn with_scale_options(mut self, options: ScaleOptions) -> Self {
        self.scale_options = options;
        self
    }

    /// Options used by [`Transform::Scale`].
    pub fn scale_options(&self) -> &ScaleOptions {
        &self.scale_options
    }

    /// Load an image, replacing whatever was loaded before.
    pub fn load(&mut self, pix: PixelBuffer) {
        debug!("loaded {}x{} image", pix.width(), pix.height());
        self.current = Some(pix);
    }

    /// Whether an image is loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// The current image, if any.
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    /// Apply a transform to the current image.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded, or the
    /// transform's own error (invalid crop rectangle, invalid scale ratio).
    /// On error the current image is unchanged.
    pub fn apply(&mut self, transform: Transform) -> SessionResult<&PixelBuffer> {
        let options = self.scale_options.clone();
        self.replace_with(transform.name(), |pix| transform.run(pix, &options))
    }

    /// Apply an arbitrary buffer-to-buffer function to the current image.
    ///
    /// Behaves like [`apply`](Self::apply): the result replaces the current
    /// image only if `f` succeeds.
    pub fn apply_with<F, E>(&mut self, f: F) -> SessionResult<&PixelBuffer>
    where
        F: FnOnce(&PixelBuffer) -> Result<PixelBuffer, E>,
        E: Into<SessionError>,
    {
        self.replace_with("custom", |pix| f(pix).map_err(Into::into))
    }

    fn replace_with<F>(&mut self, name: &str, f: F) -> SessionResult<&PixelBuffer>
    where
        F: FnOnce(&PixelBuffer) -> SessionResult<PixelBuffer>,
    {
        let Some(pix) = self.current.as_ref() else {
            warn!("{} rejected: no image loaded", name);
            return Err(SessionError::NoImageLoaded);
        };

        let (w, h) = pix.dimensions();
        match f(pix) {
            Ok(next) => {
                debug!(
                    "{}: {}x{} -> {}x{}",
                    name,
                    w,
                    h,
                    next.width(),
                    next.height()
                );
                Ok(&*self.current.insert(next))
            }
            Err(e) => {
                warn!("{} rejected on {}x{} image: {}", name, w, h, e);
                Err(e)
            }
        }
    }

    /// The image to hand to the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoImageLoaded`] if nothing is loaded.
    pub fn export(&self) -> SessionResult<&PixelBuffer> {
        self.current.as_ref().ok_or(SessionError::NoImageLoaded)
    }

    /// Remove and return the current image, leaving the session empty.
    pub fn take(&mut self) -> Option<PixelBuffer> {
        self.current.take()
    }

    /// Drop the current image.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
