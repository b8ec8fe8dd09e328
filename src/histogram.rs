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

use image::RgbImage;
use std::collections::HashMap;

const MIN_PIXEL_WEIGHT: f64 = 0.1;

/// A histogram bin key: a color with every channel floored to a multiple of the quantization step, packed into a
/// single integer with red as the most significant channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantizedColor(u32);

impl QuantizedColor {
    pub fn from_rgb((r, g, b): (u8, u8, u8), step: u8) -> Self {
        let step = step.max(1);
        let quantize = |channel: u8| (channel / step * step) as u32;

        Self((quantize(r) << 16) | (quantize(g) << 8) | quantize(b))
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

/// Radially weighted color histogram of a sampling grid.
///
/// Besides the bins, the histogram keeps weighted sums of the unquantized channels which the temperature verdict is
/// computed from.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    bins: HashMap<QuantizedColor, f64>,
    red_sum: f64,
    green_sum: f64,
    blue_sum: f64,
    pixel_count: usize,
}

impl Histogram {
    /// Build the histogram of `grid`, quantizing with `step`. The weights fall off from the center of the grid
    /// towards the circle inscribed in its shorter side, so non-square grids are accepted too.
    pub fn from_grid(grid: &RgbImage, step: u8) -> Self {
        let (width, height) = grid.dimensions();
        let mut histogram = Histogram::default();

        for (x, y, pixel) in grid.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            histogram.insert((r, g, b), weight_at(x, y, width, height), step);
        }

        log::debug!(
            "histogram of {} pixels has {} bins",
            histogram.pixel_count,
            histogram.bins.len()
        );

        histogram
    }

    fn insert(&mut self, rgb: (u8, u8, u8), weight: f64, step: u8) {
        self.red_sum += rgb.0 as f64 * weight;
        self.green_sum += rgb.1 as f64 * weight;
        self.blue_sum += rgb.2 as f64 * weight;
        self.pixel_count += 1;

        *self.bins.entry(QuantizedColor::from_rgb(rgb, step)).or_insert(0.0) += weight;
    }

    /// The bins ordered by descending weight. Equal weights are ordered by the packed color so the order never
    /// depends on hashing.
    pub fn bins_by_weight(&self) -> Vec<(QuantizedColor, f64)> {
        let mut bins: Vec<_> = self.bins.iter().map(|(color, weight)| (*color, *weight)).collect();
        bins.sort_by(|(lhs_color, lhs_weight), (rhs_color, rhs_weight)| {
            rhs_weight.total_cmp(lhs_weight).then(lhs_color.cmp(rhs_color))
        });

        bins
    }

    pub fn weight_of(&self, color: QuantizedColor) -> Option<f64> {
        self.bins.get(&color).copied()
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    // the averages are taken over the pixel count, not the total weight, so they shrink with the radial falloff
    pub fn average_red(&self) -> f64 {
        self.average(self.red_sum)
    }

    pub fn average_green(&self) -> f64 {
        self.average(self.green_sum)
    }

    pub fn average_blue(&self) -> f64 {
        self.average(self.blue_sum)
    }

    fn average(&self, sum: f64) -> f64 {
        if self.pixel_count == 0 {
            0.0
        } else {
            sum / self.pixel_count as f64
        }
    }
}

/// Weight of the pixel at (`x`, `y`) in a grid of `size` pixels per side: 1.0 at the center, falling off linearly to
/// the inscribed circle and never below 0.1.
pub fn radial_weight(x: u32, y: u32, size: u32) -> f64 {
    weight_at(x, y, size, size)
}

// center at (width/2, height/2), radius half the shorter side
fn weight_at(x: u32, y: u32, width: u32, height: u32) -> f64 {
    let radius = width.min(height) as f64 / 2.0;
    let dx = x as f64 - width as f64 / 2.0;
    let dy = y as f64 - height as f64 / 2.0;
    let distance = (dx * dx + dy * dy).sqrt();

    (1.0 - distance / radius).max(MIN_PIXEL_WEIGHT)
}
