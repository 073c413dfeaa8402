//! Detector tunables
//!
//! Every heuristic constant of the detection pipeline lives here. The
//! defaults were tuned on phone camera preview frames; they are starting
//! points, not derived values.

use crate::{RecogError, RecogResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordsnap_filter::radius_fits_accumulator;
use wordsnap_morph::MAX_ELEMENT_RADIUS;

/// Parameters of [`WordExtentDetector`](crate::WordExtentDetector).
///
/// Missing fields in JSON fall back to the defaults:
///
/// ```
/// use wordsnap_recog::DetectorConfig;
///
/// let cfg = DetectorConfig::from_json_str(r#"{ "polarity_threshold": 96.0 }"#).unwrap();
/// assert_eq!(cfg.polarity_threshold, 96.0);
/// assert_eq!(cfg.mean_radius, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Stretch the frame to the full `0..=255` range before thresholding.
    pub contrast_stretch: bool,
    /// Frames with a mean above this are treated as dark text on light.
    pub polarity_threshold: f32,
    /// Radius of the local mean window.
    pub mean_radius: u32,
    /// Threshold offset is `round(offset_multiplier * stddev)`.
    pub offset_multiplier: f32,
    /// Radius of the horizontal and vertical erosion runs.
    ///
    /// Erosion spreads foreground by this many pixels on every side, so
    /// the extent overshoots the ink by up to `erosion_radius` per edge: a
    /// radius of 2 turns a square at `(45,45)-(55,55)` into
    /// `(43,43)-(57,57)`. Larger radii bridge wider gaps between letters.
    /// At most [`MAX_ELEMENT_RADIUS`].
    pub erosion_radius: u32,
    /// Seed rectangle width as a fraction of the frame width.
    pub seed_width_fraction: f32,
    /// Seed rectangle height as a fraction of the frame height.
    pub seed_height_fraction: f32,
    /// Frames with `max - min` below this get a low-contrast warning.
    pub min_contrast: u8,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            contrast_stretch: true,
            polarity_threshold: 127.0,
            mean_radius: 10,
            offset_multiplier: 0.33,
            erosion_radius: 2,
            seed_width_fraction: 0.021,
            seed_height_fraction: 0.033,
            min_contrast: 48,
        }
    }
}

impl DetectorConfig {
    /// Parse from JSON and validate.
    pub fn from_json_str(json: &str) -> RecogResult<Self> {
        let config: DetectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON file and validate.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RecogResult<Self> {
        let data = fs::read_to_string(path).map_err(wordsnap_io::IoError::from)?;
        Self::from_json_str(&data)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> RecogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every tunable is usable.
    ///
    /// # Errors
    ///
    /// [`RecogError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> RecogResult<()> {
        if !radius_fits_accumulator(self.mean_radius) {
            return Err(RecogError::InvalidConfig(format!(
                "mean_radius {} overflows the window sum accumulator",
                self.mean_radius
            )));
        }
        if self.erosion_radius > MAX_ELEMENT_RADIUS {
            return Err(RecogError::InvalidConfig(format!(
                "erosion_radius {} exceeds {}",
                self.erosion_radius, MAX_ELEMENT_RADIUS
            )));
        }
        if !self.polarity_threshold.is_finite() {
            return Err(RecogError::InvalidConfig(
                "polarity_threshold must be finite".into(),
            ));
        }
        if !self.offset_multiplier.is_finite() || self.offset_multiplier < 0.0 {
            return Err(RecogError::InvalidConfig(format!(
                "offset_multiplier must be finite and >= 0, got {}",
                self.offset_multiplier
            )));
        }
        for (name, f) in [
            ("seed_width_fraction", self.seed_width_fraction),
            ("seed_height_fraction", self.seed_height_fraction),
        ] {
            if !f.is_finite() || f <= 0.0 || f > 1.0 {
                return Err(RecogError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, f
                )));
            }
        }
        Ok(())
    }
}
