//! Font size scaling
//!
//! Maps a word's count onto a CSS font size class between a minimum and a
//! maximum size.

use crate::error::TagCloudError;

/// Smallest font size in the default stylesheet
pub const FONT_MIN: u32 = 11;

/// Largest font size in the default stylesheet
pub const FONT_MAX: u32 = 37;

/// Linear font size range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min: u32,
    max: u32,
}

impl FontScale {
    /// Create a scale from `min` to `max` inclusive
    ///
    /// # Errors
    /// Returns `TagCloudError::InvalidFontRange` if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, TagCloudError> {
        if min > max {
            return Err(TagCloudError::InvalidFontRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Size used when every word has the same count
    #[must_use]
    pub const fn midpoint(&self) -> u32 {
        self.min + (self.max - self.min) / 2
    }

    /// Font size for `count` given the selected count range
    ///
    /// `ceil(min + (max - min) * (count - min_count) / (max_count - min_count))`,
    /// computed in integers. Counts outside the range are clamped to it. When
    /// `min_count == max_count` the midpoint is returned and nothing is divided.
    ///
    /// # Examples
    /// ```
    /// use tag_cloud::render::FontScale;
    ///
    /// let scale = FontScale::default();
    /// assert_eq!(scale.size_for(10, 1, 10), 37);
    /// assert_eq!(scale.size_for(1, 1, 10), 11);
    /// assert_eq!(scale.size_for(5, 5, 5), 24);
    /// ```
    #[must_use]
    pub fn size_for(&self, count: usize, min_count: usize, max_count: usize) -> u32 {
        if max_count <= min_count {
            return self.midpoint();
        }

        let offset = (count.clamp(min_count, max_count) - min_count) as u128;
        let spread = (max_count - min_count) as u128;
        let step = u128::from(self.max - self.min) * offset;

        // step / spread <= max - min, so the sum stays within u32
        self.min + step.div_ceil(spread) as u32
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            min: FONT_MIN,
            max: FONT_MAX,
        }
    }
}
