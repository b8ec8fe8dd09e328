// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract and name the dominant shades of a garment photo.
//!
//! The analysis runs entirely on the device:
//!
//! 1. the image is decoded and its central region resampled to a small square grid,
//! 2. the grid is binned into a coarse color histogram where pixels near the center weigh more,
//! 3. the heaviest bins that are clearly distinct from each other form the palette,
//! 4. every palette color gets the closest name from a fixed fashion color dictionary, avoiding repeats when a
//!    repeat isn't much more accurate,
//! 5. the weighted red and blue averages decide whether the garment reads warm, cool or neutral.
//!
//! ```no_run
//! let bytes = std::fs::read("jacket.jpg")?;
//! let analysis = shade::Analysis::from_bytes(&bytes)?.max_colors(3).generate();
//!
//! for (swatch, name) in analysis.palette().iter().zip(analysis.shade_names()) {
//!     println!("{} {}", swatch, name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod histogram;
mod label;
mod loader;
mod namer;
mod selector;
mod settings;
mod swatch;

pub use crate::{
    error::{DecodeError, Result},
    histogram::{radial_weight, Histogram, QuantizedColor},
    label::{Complexity, Temperature},
    loader::{decode, decode_base64, sample_region},
    namer::{name_color, name_palette, ranked_candidates, Candidate, FASHION_COLORS},
    selector::select_palette,
    settings::*,
    swatch::Swatch,
};
pub use image;

use image::RgbImage;

/// The outcome of analyzing one image.
///
/// `palette` and `shade_names` are parallel: the name at every index belongs to the swatch at the same index, and
/// both are ordered from the most to the least prominent color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Analysis {
    palette: Vec<Swatch>,
    shade_names: Vec<String>,
    complexity: Complexity,
    temperature: Temperature,
}

pub struct AnalysisBuilder {
    image: RgbImage,
    settings: Settings,
}

impl Analysis {
    pub fn from_image(image: RgbImage) -> AnalysisBuilder {
        AnalysisBuilder::from_image(image)
    }

    /// Decode encoded image bytes and start an analysis of them.
    pub fn from_bytes(bytes: &[u8]) -> Result<AnalysisBuilder> {
        Ok(AnalysisBuilder::from_image(loader::decode(bytes)?))
    }

    /// Decode a base64 payload or a base64 data URL and start an analysis of it.
    pub fn from_base64(payload: &str) -> Result<AnalysisBuilder> {
        Ok(AnalysisBuilder::from_image(loader::decode_base64(payload)?))
    }

    /// The result reported for an image that couldn't be decoded: no colors, `Simple` and `Neutral`.
    pub fn fallback() -> Analysis {
        Self {
            palette: Vec::new(),
            shade_names: Vec::new(),
            complexity: Complexity::Simple,
            temperature: Temperature::Neutral,
        }
    }

    pub fn palette(&self) -> &[Swatch] {
        &self.palette
    }

    pub fn colors(&self) -> Vec<(u8, u8, u8)> {
        self.palette.iter().map(|swatch| swatch.rgb()).collect()
    }

    /// The palette as `rgb(R,G,B)` strings.
    pub fn css_colors(&self) -> Vec<String> {
        self.palette.iter().map(|swatch| swatch.to_string()).collect()
    }

    pub fn shade_names(&self) -> &[String] {
        &self.shade_names
    }

    /// Name of the most prominent shade, if any color was found.
    pub fn primary_shade(&self) -> Option<&str> {
        self.shade_names.first().map(String::as_str)
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    fn generate(image: &RgbImage, settings: &Settings) -> Analysis {
        let grid = loader::sample_region(image, settings);
        let histogram = Histogram::from_grid(&grid, settings.quantize_step);

        let palette = selector::select_palette(&histogram, settings.max_colors, settings.min_distance);
        let shade_names = namer::name_palette(palette.iter().map(|swatch| swatch.rgb()), settings.naming_tolerance)
            .into_iter()
            .map(String::from)
            .collect();

        let complexity = if settings.derive_complexity {
            Complexity::from_palette_len(palette.len())
        } else {
            Complexity::Medium
        };

        let temperature = Temperature::classify(
            histogram.average_red(),
            histogram.average_blue(),
            settings.temperature_margin,
        );

        Self {
            palette,
            shade_names,
            complexity,
            temperature,
        }
    }
}

impl AnalysisBuilder {
    pub fn from_image(image: RgbImage) -> Self {
        Self {
            image,
            settings: Settings::default(),
        }
    }

    pub fn settings(self, settings: Settings) -> Self {
        Self { settings, ..self }
    }

    pub fn sample_size(mut self, sample_size: u32) -> Self {
        self.settings.sample_size = sample_size;
        self
    }

    /// Analyze the region starting `offset` into each dimension and spanning `span` of it, both as fractions.
    pub fn crop(mut self, offset: f64, span: f64) -> Self {
        self.settings.crop_offset = offset;
        self.settings.crop_span = span;
        self
    }

    pub fn quantize_step(mut self, quantize_step: u8) -> Self {
        self.settings.quantize_step = quantize_step;
        self
    }

    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.settings.max_colors = max_colors;
        self
    }

    pub fn min_distance(mut self, min_distance: f64) -> Self {
        self.settings.min_distance = min_distance;
        self
    }

    pub fn naming_tolerance(mut self, naming_tolerance: f64) -> Self {
        self.settings.naming_tolerance = naming_tolerance;
        self
    }

    pub fn temperature_margin(mut self, temperature_margin: f64) -> Self {
        self.settings.temperature_margin = temperature_margin;
        self
    }

    pub fn derive_complexity(mut self, derive_complexity: bool) -> Self {
        self.settings.derive_complexity = derive_complexity;
        self
    }

    pub fn generate(self) -> Analysis {
        Analysis::generate(&self.image, &self.settings)
    }
}

/// Analyze encoded image bytes with the default settings, failing if they can't be decoded.
pub fn analyze(bytes: &[u8]) -> Result<Analysis> {
    Ok(Analysis::from_bytes(bytes)?.generate())
}

/// Analyze encoded image bytes with the default settings. Undecodable input yields [`Analysis::fallback`].
pub fn analyze_or_fallback(bytes: &[u8]) -> Analysis {
    analyze(bytes).unwrap_or_else(|err| {
        log::warn!("image analysis fell back to an empty result: {}", err);
        Analysis::fallback()
    })
}

/// Analyze a base64 payload or data URL with the default settings. Undecodable input yields
/// [`Analysis::fallback`].
pub fn analyze_image_locally(payload: &str) -> Analysis {
    match Analysis::from_base64(payload) {
        Ok(builder) => builder.generate(),
        Err(err) => {
            log::warn!("image analysis fell back to an empty result: {}", err);
            Analysis::fallback()
        }
    }
}

/// Euclidean distance between two colors in 0-255 units.
pub fn rgb_distance(lhs: (u8, u8, u8), rhs: (u8, u8, u8)) -> f64 {
    let dr = lhs.0 as f64 - rhs.0 as f64;
    let dg = lhs.1 as f64 - rhs.1 as f64;
    let db = lhs.2 as f64 - rhs.2 as f64;

    (dr * dr + dg * dg + db * db).sqrt()
}
