//! Word extent detection
//!
//! Turns a grayscale frame into the rectangle around the word at its
//! centre:
//!
//! 1. optional contrast stretch to the full intensity range
//! 2. polarity from the mean of the stretched frame
//! 3. local means (clipped box filter)
//! 4. threshold offset from the global standard deviation
//! 5. adaptive threshold, in place
//! 6. erosion by a horizontal then a vertical run
//! 7. region growing from a seed at the frame centre
//!
//! Foreground ends up as 0 after step 5, so step 6 uses *erosion* (the
//! neighbourhood minimum) to spread foreground: it bridges the gaps between
//! strokes so a word grows as one blob.

use crate::config::DetectorConfig;
use crate::grow::{grow_region, seed_rect};
use crate::RecogResult;
use log::debug;
use wordsnap_core::{GrayBuffer, Rect};
use wordsnap_filter::{Polarity, adaptive_threshold_in_place, mean_filter};
use wordsnap_io::{DebugDump, NoDump};
use wordsnap_morph::{CachedElement, StructuringElement, erode_cached_into};

/// Conditions that make a detected extent suspect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtentWarnings {
    /// The extent reaches a frame edge; the word is probably cut off.
    pub touches_border: bool,
    /// The frame's dynamic range is below `min_contrast`.
    pub low_contrast: bool,
}

impl ExtentWarnings {
    /// True if any warning is set
    pub fn any(&self) -> bool {
        self.touches_border || self.low_contrast
    }
}

/// Detection result
#[derive(Debug, Clone)]
pub struct WordExtent {
    /// Grown word rectangle
    pub rect: Rect,
    /// Binarized and eroded frame; foreground is 0
    pub binary: GrayBuffer,
    /// Polarity chosen for the frame
    pub polarity: Polarity,
    /// Offset passed to the adaptive threshold
    pub threshold_offset: i32,
    /// Region growing passes
    pub passes: u32,
    /// Heuristic warnings
    pub warnings: ExtentWarnings,
}

impl WordExtent {
    /// The processed word image: `binary` cropped to `rect`.
    pub fn crop(&self) -> RecogResult<GrayBuffer> {
        Ok(self.binary.crop(&self.rect)?)
    }
}

/// Finds the extent of the word at the centre of a frame
///
/// The structuring elements and their flattened offsets are built once and
/// reused for every frame of the same width.
/// Each call to [`detect`](Self::detect) works on its own buffers, so one
/// detector can serve several threads.
#[derive(Debug)]
pub struct WordExtentDetector<D = NoDump> {
    config: DetectorConfig,
    h_element: CachedElement,
    v_element: CachedElement,
    dump: D,
}

impl WordExtentDetector<NoDump> {
    /// Create a detector without debug dumps.
    ///
    /// # Errors
    ///
    /// [`RecogError::InvalidConfig`](crate::RecogError::InvalidConfig) if
    /// the config does not validate.
    pub fn new(config: DetectorConfig) -> RecogResult<Self> {
        Self::with_dump(config, NoDump)
    }
}

impl<D: DebugDump> WordExtentDetector<D> {
    /// Create a detector that sends every intermediate buffer to `dump`.
    pub fn with_dump(config: DetectorConfig, dump: D) -> RecogResult<Self> {
        config.validate()?;
        Ok(Self {
            h_element: StructuringElement::horizontal(config.erosion_radius)?.into(),
            v_element: StructuringElement::vertical(config.erosion_radius)?.into(),
            config,
            dump,
        })
    }

    /// Detector configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect the word extent, seeding at the frame centre.
    pub fn detect(&self, frame: &GrayBuffer) -> RecogResult<WordExtent> {
        let (w, h) = frame.dimensions();
        let seed = seed_rect(
            w,
            h,
            self.config.seed_width_fraction,
            self.config.seed_height_fraction,
        );
        self.detect_from_seed(frame, seed)
    }

    /// Detect the word extent, growing from a caller-chosen seed.
    ///
    /// # Errors
    ///
    /// Range error if `seed` is empty or outside the frame.
    pub fn detect_from_seed(&self, frame: &GrayBuffer, seed: Rect) -> RecogResult<WordExtent> {
        let (w, h) = frame.dimensions();
        seed.check_within(w, h)?;
        debug!("WordExtentDetector::detect frame {}x{}, seed {:?}", w, h, seed);
        self.dump.dump("input", frame);

        let mut work = frame.clone();
        let min = work.min_value(None)?;
        let max = work.max_value(None)?;
        if self.config.contrast_stretch && max > min {
            work.contrast_stretch(min, max);
            debug!("WordExtentDetector::detect stretched [{}, {}] to [0, 255]", min, max);
        }
        self.dump.dump("stretch", &work);

        let stats = work.stats(None)?;
        let polarity = Polarity::from_mean(stats.mean, self.config.polarity_threshold);
        let (mut scratch, _) = mean_filter(&work, self.config.mean_radius)?;
        self.dump.dump("mean", &scratch);

        let threshold_offset = (self.config.offset_multiplier * stats.std_dev()).round() as i32;
        debug!(
            "WordExtentDetector::detect mean {:.1}, stddev {:.2}, {:?}, offset {}",
            stats.mean,
            stats.std_dev(),
            polarity,
            threshold_offset
        );
        adaptive_threshold_in_place(
            &mut work,
            &scratch,
            polarity.hi(),
            polarity.lo(),
            threshold_offset,
        )?;
        self.dump.dump("binary", &work);

        // Horizontal pass into the spent mean buffer, vertical pass back
        erode_cached_into(&work, &self.h_element, &mut scratch)?;
        erode_cached_into(&scratch, &self.v_element, &mut work)?;
        self.dump.dump("eroded", &work);

        let growth = grow_region(&work, seed)?;
        let warnings = ExtentWarnings {
            touches_border: growth.rect.touches_border(w, h),
            low_contrast: max - min < self.config.min_contrast,
        };
        debug!(
            "WordExtentDetector::detect extent {:?} after {} passes{}",
            growth.rect,
            growth.passes,
            if warnings.any() {
                format!(", warnings {:?}", warnings)
            } else {
                String::new()
            }
        );

        Ok(WordExtent {
            rect: growth.rect,
            binary: work,
            polarity,
            threshold_offset,
            passes: growth.passes,
            warnings,
        })
    }
}
