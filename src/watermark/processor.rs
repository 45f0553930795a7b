//! Watermark facade.
//!
//! [`Watermark`] ties a validated [`WatermarkConfig`] to an image
//! [`Driver`] and runs the panel pipeline for one image per call:
//!
//! 1. load the image (and the logo, when configured)
//! 2. adjust the layout to the image, growing the canvas for the outside
//!    variant
//! 3. skip drawing when the panel does not fit
//! 4. fill the background, place the logo, draw the text
//! 5. encode in the source format
//!
//! Calls share nothing but the immutable configuration, so one `Watermark`
//! can serve concurrent requests.
//!
//! # Example
//!
//! ```no_run
//! use shortener::watermark::config::WatermarkConfig;
//! use shortener::watermark::processor::Watermark;
//! use std::path::Path;
//!
//! let watermark = Watermark::new(WatermarkConfig::default());
//! let encoded = watermark.apply(Path::new("photo.png"), "example.com").unwrap();
//! println!("{} bytes of {}", encoded.len(), encoded.media_type);
//! ```

use super::canvas::{Canvas, Color, Driver, EncodedImage, TextStyle};
use super::config::WatermarkConfig;
use super::layout::Layout;
use super::position::Placement;
use super::raster::RasterDriver;
use super::WatermarkError;
use crate::constants::TEXT_SIZE_PX;
use std::path::Path;
use tracing::debug;

/// Applies the configured panel to images.
#[derive(Debug, Clone)]
pub struct Watermark<D: Driver = RasterDriver> {
    config: WatermarkConfig,
    layout: Layout,
    driver: D,
}

impl Watermark<RasterDriver> {
    /// Watermark backed by the `image` crate.
    pub fn new(config: WatermarkConfig) -> Self {
        Self::with_driver(config, RasterDriver::new())
    }
}

impl<D: Driver> Watermark<D> {
    pub fn with_driver(config: WatermarkConfig, driver: D) -> Self {
        let layout = Layout::from_config(&config);
        Self {
            config,
            layout,
            driver,
        }
    }

    pub fn config(&self) -> &WatermarkConfig {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Watermark the image at `path` with `text` and encode the result.
    ///
    /// Load and encode failures are returned as is; nothing is partially
    /// applied. A panel that does not fit leaves the image untouched but
    /// still re-encodes it.
    pub fn apply(&self, path: &Path, text: &str) -> Result<EncodedImage, WatermarkError> {
        let mut image = self.driver.read(path)?;
        let logo = match &self.config.logo {
            Some(logo_path) => Some(self.driver.read(logo_path)?),
            None => None,
        };

        self.render(&mut image, logo.as_ref(), text)?;

        let encoded = image.encode()?;
        debug!(
            path = %path.display(),
            media_type = encoded.media_type,
            bytes = encoded.len(),
            "Encoded watermarked image"
        );
        Ok(encoded)
    }

    /// Draw the panel onto an already loaded image.
    ///
    /// Returns the panel placement, or `None` when the panel did not fit and
    /// the image was left as it was.
    pub fn render(
        &self,
        image: &mut D::Image,
        logo: Option<&D::Image>,
        text: &str,
    ) -> Result<Option<Placement>, WatermarkError> {
        let original = image.dimensions();
        let adjusted = self
            .layout
            .adjust(original, logo.map(|logo| logo.dimensions()));

        if let Some(growth) = adjusted.growth() {
            image.grow(growth);
        }

        let dims = image.dimensions();
        let fits = adjusted.fits(dims);

        debug!(
            variant = %adjusted.variant(),
            width = dims.width,
            height = dims.height,
            panel_width = adjusted.panel().width,
            panel_height = adjusted.panel().height,
            fallback = adjusted.is_fallback(),
            grown_rows = adjusted.growth().map(|g| g.rows).unwrap_or(0),
            fits,
            "Watermark layout adjusted"
        );

        if !fits {
            return Ok(None);
        }

        let placement = adjusted.placement(dims);

        if let Some(color) = adjusted.background() {
            image.fill_rect(placement.x, placement.y, color);
        }

        if let Some(logo) = logo {
            image.place(logo, adjusted.logo_position(&placement));
        }

        if !text.is_empty() {
            let text_placement = adjusted.text(dims, &placement);
            let style = TextStyle {
                font: self.config.font.clone(),
                size: TEXT_SIZE_PX,
                color: Color::white(),
                align: text_placement.align,
                valign: text_placement.valign,
            };
            image.text(text, text_placement.anchor, &style)?;
        }

        Ok(Some(placement))
    }
}
