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

pub const DEFAULT_SAMPLE_SIZE: u32 = 128;
pub const DEFAULT_CROP_OFFSET: f64 = 0.2;
pub const DEFAULT_CROP_SPAN: f64 = 0.6;
pub const DEFAULT_QUANTIZE_STEP: u8 = 20;
pub const DEFAULT_MAX_COLORS: usize = 5;
pub const DEFAULT_MIN_DISTANCE: f64 = 45.0;
pub const DEFAULT_NAMING_TOLERANCE: f64 = 30.0;
pub const DEFAULT_TEMPERATURE_MARGIN: f64 = 10.0;

/// Tunables of the analysis pipeline.
///
/// The defaults are the calibrated values every caller should normally use. Changing any of them changes the
/// observable palette and names, so they're mostly useful for experiments. See [`crate::AnalysisBuilder`] for
/// setting them one by one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Side length of the square grid the cropped region is resampled to.
    pub sample_size: u32,
    /// Fraction of each dimension skipped before the crop begins.
    pub crop_offset: f64,
    /// Fraction of each dimension the crop spans.
    pub crop_span: f64,
    /// Histogram bin width per channel.
    pub quantize_step: u8,
    /// Maximum number of palette entries.
    pub max_colors: usize,
    /// Minimum Euclidean RGB distance between two palette entries.
    pub min_distance: f64,
    /// How much farther than the closest dictionary entry a not-yet-used name may be.
    pub naming_tolerance: f64,
    /// Average red/blue difference needed for a warm or cool verdict.
    pub temperature_margin: f64,
    /// Derive the complexity label from the palette size instead of reporting the fixed `Medium`.
    pub derive_complexity: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            crop_offset: DEFAULT_CROP_OFFSET,
            crop_span: DEFAULT_CROP_SPAN,
            quantize_step: DEFAULT_QUANTIZE_STEP,
            max_colors: DEFAULT_MAX_COLORS,
            min_distance: DEFAULT_MIN_DISTANCE,
            naming_tolerance: DEFAULT_NAMING_TOLERANCE,
            temperature_margin: DEFAULT_TEMPERATURE_MARGIN,
            derive_complexity: false,
        }
    }
}
