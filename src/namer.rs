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

//! Nearest-neighbour naming of palette colors against a fixed fashion color dictionary.

use std::collections::HashSet;

/// Fashion color names and their reference values, calibrated to garment dye tones rather than screen primaries.
///
/// The grouping is only for the reader. The order matters in one place: candidates at exactly the same distance
/// keep this order.
pub const FASHION_COLORS: &[(&str, (u8, u8, u8))] = &[
    // whites & neutrals
    ("Optical White", (245, 245, 245)),
    ("Ivory", (255, 255, 240)),
    ("Bone", (227, 218, 201)),
    ("Champagne", (247, 231, 206)),
    ("Cream", (255, 253, 208)),
    ("Beige", (245, 245, 220)),
    ("Stone", (215, 208, 199)),
    // grays & blacks
    ("Dove Gray", (169, 169, 169)),
    ("Charcoal", (54, 69, 79)),
    ("Obsidian", (35, 35, 35)),
    ("Slate", (112, 128, 144)),
    ("Jet Black", (10, 10, 10)),
    ("Silver", (192, 192, 192)),
    ("Ash", (178, 190, 181)),
    ("Pewter", (105, 105, 105)),
    // blues & denim
    ("Raw Indigo", (21, 27, 141)),
    ("Vintage Indigo", (71, 102, 150)),
    ("Washed Cobalt", (95, 129, 157)),
    ("Mid-Wash Blue", (100, 149, 237)),
    ("Stone Wash", (176, 196, 222)),
    ("Midnight Navy", (25, 25, 112)),
    ("Steel Blue", (70, 130, 180)),
    ("Sky Azure", (135, 206, 235)),
    ("Deep Teal", (0, 128, 128)),
    ("Cyan", (0, 255, 255)),
    ("Turquoise", (64, 224, 208)),
    ("Baby Blue", (137, 207, 240)),
    ("Dusty Blue", (136, 157, 175)),
    // greens & teals
    ("Mint", (189, 252, 201)),
    ("Sage", (156, 175, 136)),
    ("Seafoam", (147, 223, 184)),
    ("Olive", (128, 128, 0)),
    ("Forest", (34, 139, 34)),
    ("Emerald", (80, 200, 120)),
    ("Lime", (191, 255, 0)),
    ("Kelly Green", (76, 187, 23)),
    ("Slate Green", (47, 79, 79)),
    ("Muted Teal", (95, 158, 160)),
    // earth tones
    ("Camel", (193, 154, 107)),
    ("Cognac", (154, 70, 61)),
    ("Sand", (194, 178, 128)),
    ("Taupe", (135, 124, 113)),
    ("Coffee", (111, 78, 55)),
    ("Espresso", (62, 40, 36)),
    ("Chocolate", (90, 50, 40)),
    ("Terracotta", (226, 114, 91)),
    ("Rust", (183, 65, 14)),
    ("Brown", (139, 69, 19)),
    ("Mushroom", (186, 171, 160)),
    ("Khaki", (189, 183, 107)),
    ("Mocha", (150, 121, 105)),
    // pinks, purples & reds
    ("Blush", (255, 228, 225)),
    ("Rosewood", (101, 0, 11)),
    ("Bordeaux", (109, 7, 26)),
    ("Crimson", (153, 0, 0)),
    ("Red", (255, 0, 0)),
    ("Soft Peony", (255, 192, 203)),
    ("Hot Pink", (255, 105, 180)),
    ("Mauve", (224, 176, 255)),
    ("Dusty Mauve", (180, 140, 150)),
    ("Lilac", (200, 162, 200)),
    ("Lavender", (230, 230, 250)),
    ("Plum", (142, 69, 133)),
    ("Violet", (138, 43, 226)),
    ("Coral", (255, 127, 80)),
    ("Salmon", (250, 128, 114)),
];

/// A dictionary entry and its distance to the color being named.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub name: &'static str,
    pub distance: f64,
}

/// Every dictionary entry, closest to `rgb` first.
pub fn ranked_candidates(rgb: (u8, u8, u8)) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = FASHION_COLORS
        .iter()
        .map(|&(name, reference)| Candidate {
            name,
            distance: crate::rgb_distance(rgb, reference),
        })
        .collect();

    // stable, so exact ties keep dictionary order
    candidates.sort_by(|lhs, rhs| lhs.distance.total_cmp(&rhs.distance));
    candidates
}

/// Name a color, preferring a name not in `excluded`.
///
/// Only the closest candidate not in `excluded` is considered. If it is more than `tolerance` farther away than the
/// overall closest entry, the closest entry's name is returned even though it's a repeat. The scan does not continue
/// past that first unused candidate.
pub fn name_color(rgb: (u8, u8, u8), excluded: &HashSet<&str>, tolerance: f64) -> &'static str {
    let candidates = ranked_candidates(rgb);
    let best = candidates[0];

    match candidates.iter().find(|candidate| !excluded.contains(candidate.name)) {
        Some(unused) if unused.distance > best.distance + tolerance => best.name,
        Some(unused) => unused.name,
        None => best.name,
    }
}

/// Name every color in order. Earlier colors claim their names first.
pub fn name_palette<I>(colors: I, tolerance: f64) -> Vec<&'static str>
where
    I: IntoIterator<Item = (u8, u8, u8)>,
{
    let (names, _) = colors.into_iter().fold(
        (Vec::<&'static str>::new(), HashSet::<&'static str>::new()),
        |(mut names, mut used), rgb| {
            let name = name_color(rgb, &used, tolerance);
            used.insert(name);
            names.push(name);
            (names, used)
        },
    );

    names
}
