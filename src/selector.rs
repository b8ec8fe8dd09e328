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

use crate::{histogram::Histogram, swatch::Swatch};

/// Greedily pick up to `max_colors` bins, heaviest first, skipping any bin closer than `min_distance` to a bin
/// that was already picked.
///
/// A palette shorter than `max_colors` is normal: once the dominant colors are in, the remaining bins are often
/// just shading variations of them.
pub fn select_palette(histogram: &Histogram, max_colors: usize, min_distance: f64) -> Vec<Swatch> {
    let mut palette: Vec<Swatch> = Vec::with_capacity(max_colors);

    for (color, weight) in histogram.bins_by_weight() {
        if palette.len() >= max_colors {
            break;
        }

        let rgb = color.rgb();
        let too_similar = palette
            .iter()
            .any(|swatch| crate::rgb_distance(swatch.rgb(), rgb) < min_distance);

        if !too_similar {
            palette.push(Swatch::new(rgb, weight));
        }
    }

    log::debug!("selected {} palette colors", palette.len());
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn histogram_of(stripes: &[(u8, u8, u8)]) -> Histogram {
        // horizontal stripes, one per color, each at least a full row
        let rows = 128 / stripes.len() as u32;
        let grid = RgbImage::from_fn(128, 128, |_, y| {
            let (r, g, b) = stripes[((y / rows) as usize).min(stripes.len() - 1)];
            Rgb([r, g, b])
        });

        Histogram::from_grid(&grid, 20)
    }

    #[test]
    fn test_single_color() {
        let palette = select_palette(&histogram_of(&[(255, 0, 0)]), 5, 45.0);

        assert_eq!(palette.len(), 1);
        assert_eq!(palette[0].rgb(), (240, 0, 0));
    }

    #[test]
    fn test_near_duplicates_are_skipped() {
        // these land in neighbouring bins, 20 apart
        let palette = select_palette(&histogram_of(&[(100, 100, 100), (120, 100, 100), (0, 0, 255)]), 5, 45.0);
        let colors: Vec<_> = palette.iter().map(|swatch| swatch.rgb()).collect();

        assert_eq!(colors.len(), 2);
        assert!(colors.contains(&(0, 0, 240)));
    }

    #[test]
    fn test_capped_at_max_colors() {
        let stripes = [
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
        ];
        let palette = select_palette(&histogram_of(&stripes), 5, 45.0);

        assert_eq!(palette.len(), 5);
        for (i, lhs) in palette.iter().enumerate() {
            for rhs in &palette[i + 1..] {
                assert!(crate::rgb_distance(lhs.rgb(), rhs.rgb()) >= 45.0);
            }
        }
    }

    #[test]
    fn test_ordered_by_weight() {
        let palette = select_palette(&histogram_of(&[(255, 0, 0)]), 5, 45.0);
        assert!(palette.windows(2).all(|pair| pair[0].weight() >= pair[1].weight()));

        let grid = RgbImage::from_fn(128, 128, |x, y| {
            if (24..104).contains(&x) && (24..104).contains(&y) {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let palette = select_palette(&Histogram::from_grid(&grid, 20), 5, 45.0);

        // the dark center outweighs the larger light surround because of the radial falloff
        assert_eq!(palette[0].rgb(), (0, 0, 0));
        assert_eq!(palette[1].rgb(), (240, 240, 240));
    }

    #[test]
    fn test_empty_histogram() {
        assert!(select_palette(&Histogram::default(), 5, 45.0).is_empty());
    }
}
